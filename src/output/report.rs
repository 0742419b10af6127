//! Conversion reports for each value type.

use crate::models::{Ipv4Address, Ipv6Address, Port, Subnet, Validatable};
use serde::Serialize;

/// One derived notation or property.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportField {
    pub name: &'static str,
    pub value: String,
}

/// Everything derivable from one input value.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub kind: &'static str,
    pub input: String,
    pub valid: bool,
    pub fields: Vec<ReportField>,
}

impl Report {
    fn new(kind: &'static str, input: &str, valid: bool) -> Report {
        Report {
            kind,
            input: input.to_string(),
            valid,
            fields: Vec::new(),
        }
    }

    fn push(&mut self, name: &'static str, value: impl ToString) {
        self.fields.push(ReportField {
            name,
            value: value.to_string(),
        });
    }

    /// Value of the named field, if present.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }

    pub fn for_subnet(input: &str, subnet: &Subnet) -> Report {
        let mut report = Report::new("subnet", input, subnet.is_valid());
        report.push("notation", format!("{:?}", subnet.notation()));
        report.push("dot", subnet.to_dot());
        report.push("cidr", subnet.to_cidr());
        report.push("binary", subnet.to_bin());
        report.push(
            "class",
            subnet
                .class()
                .map_or_else(|| "none".to_string(), |c| c.to_string()),
        );
        report
    }

    pub fn for_ipv4(input: &str, address: &Ipv4Address) -> Report {
        let mut report = Report::new("ipv4", input, address.is_valid());
        report.push("notation", format!("{:?}", address.notation()));
        report.push("dot", address.to_canonical_text());
        report.push("binary", address.to_binary());
        if let Some(subnet) = address.subnet() {
            report.push("subnet_valid", subnet.is_valid());
            report.push("cidr_short", address.to_cidr_short());
            report.push("cidr_long", address.to_cidr_long());
            report.push("cidr_binary", address.to_cidr_binary());
        }
        report
    }

    pub fn for_ipv6(input: &str, address: &Ipv6Address) -> Report {
        let mut report = Report::new("ipv6", input, address.is_valid());
        report.push("full", address.to_full());
        if let Some(condensed) = address.to_condensed() {
            report.push("condensed", condensed);
        }
        report
    }

    pub fn for_port(input: &str, port: &Port) -> Report {
        let mut report = Report::new("port", input, port.is_valid());
        report.push("number", port.number());
        report.push("range", port.range());
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ipv4Notation, SubnetNotation};

    #[test]
    fn test_subnet_report() {
        let subnet = Subnet::new("16", SubnetNotation::Cidr);
        let report = Report::for_subnet("16", &subnet);
        assert!(report.valid);
        assert_eq!(report.field("dot"), Some("255.255.0.0"));
        assert_eq!(report.field("cidr"), Some("16"));
        assert_eq!(report.field("class"), Some("B"));
    }

    #[test]
    fn test_ipv4_report_without_subnet() {
        let ip = Ipv4Address::new("10.0.0.1", Ipv4Notation::DotDecimal);
        let report = Report::for_ipv4("10.0.0.1", &ip);
        assert!(report.valid);
        assert_eq!(report.field("binary"), Some("00001010.00000000.00000000.00000001"));
        assert_eq!(report.field("cidr_short"), None);
    }

    #[test]
    fn test_ipv6_and_port_reports() {
        let report = Report::for_ipv6("::1", &Ipv6Address::new("::1"));
        assert!(report.valid);
        assert_eq!(report.field("condensed"), Some("::1"));

        let report = Report::for_port("22", &Port::new(22));
        assert_eq!(report.field("range"), Some("WELL_KNOWN"));
    }
}
