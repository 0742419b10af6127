//! Integration tests for net-notation
//!
//! These tests exercise the public API the way a caller converts between notations.

use net_notation::codec::{mask_for, SUBNET_MASKS};
use net_notation::output::{render_json, Report};
use net_notation::{
    Ipv4Address, Ipv4Notation, Ipv6Address, Port, PortRange, Subnet, SubnetNotation, Validatable,
};

fn invalid_subnet() -> Subnet {
    Subnet::new("0", SubnetNotation::Invalid)
}

#[test]
fn test_subnet_scenarios() {
    let subnet = Subnet::new("13", SubnetNotation::Cidr);
    assert!(subnet.is_valid());
    assert_eq!(subnet.to_dot(), "255.248.0.0");

    let mut subnet = invalid_subnet();
    subnet.from_cidr(18);
    assert_eq!(subnet.to_dot(), "255.255.192.0");
    subnet.from_cidr(29);
    assert_eq!(subnet.to_dot(), "255.255.255.248");
    subnet.from_dot("255.255.255.0");
    assert_eq!(subnet.to_cidr(), 24);
    subnet.from_cidr(8);
    assert_eq!(subnet.to_bin(), "11111111.00000000.00000000.00000000");
    subnet.from_cidr(1);
    assert_eq!(subnet.to_string(), "128.0.0.0");
}

#[test]
fn test_every_prefix_round_trips() {
    for prefix in 0..=32i64 {
        let mut subnet = invalid_subnet();
        subnet.from_cidr(prefix);
        assert_eq!(i64::from(subnet.to_cidr()), prefix);
        assert_eq!(Some(subnet.to_dot().as_str()), mask_for(prefix));

        let bin = subnet.to_bin();
        let mut from_bin = invalid_subnet();
        from_bin.from_bin(&bin);
        assert_eq!(from_bin.to_bin(), bin);
        assert_eq!(from_bin.to_cidr(), subnet.to_cidr());
    }
}

#[test]
fn test_every_canonical_mask_is_valid() {
    for mask in SUBNET_MASKS {
        assert!(Subnet::new(mask, SubnetNotation::Dot).is_valid(), "{mask}");
    }
    for mask in ["255.0.255.0", "255.255.255.1", "128.128.0.0", "255.255.255"] {
        assert!(!Subnet::new(mask, SubnetNotation::Dot).is_valid(), "{mask}");
    }
}

#[test]
fn test_ipv4_notations_agree() {
    let short = Ipv4Address::new("172.16.0.0/12", Ipv4Notation::CidrShort);
    let long = Ipv4Address::new("172.16.0.0/255.240.0.0", Ipv4Notation::CidrLong);
    let binary = Ipv4Address::new(
        "10101100.00010000.00000000.00000000/11111111.11110000.00000000.00000000",
        Ipv4Notation::CidrBinary,
    );
    for ip in [&short, &long, &binary] {
        assert!(ip.is_valid());
        assert_eq!(ip.to_string(), "172.16.0.0");
        assert_eq!(ip.subnet().map(Subnet::to_cidr), Some(12));
        assert_eq!(ip.to_cidr_binary(), binary.to_cidr_binary());
    }
}

#[test]
fn test_ipv4_validity() {
    let valid = |s: &str| Ipv4Address::new(s, Ipv4Notation::DotDecimal).is_valid();
    assert!(valid("255.255.255.255"));
    assert!(!valid("256.0.0.1"));
    assert!(!valid("1.2.3"));
}

#[test]
fn test_ipv6_expansion() {
    let ip = Ipv6Address::new("ff06::3");
    assert_eq!(
        ip.segments().join(":"),
        "ff06:0000:0000:0000:0000:0000:0000:0003"
    );
    assert!(ip.is_valid());

    let loopback = Ipv6Address::new("::1");
    assert_eq!(loopback.segments().len(), 8);
    assert_eq!(loopback.segments()[7], "0001");

    assert!(Ipv6Address::new("ff06::3::1").segments().is_empty());
}

#[test]
fn test_ports() {
    assert_eq!(Port::new(80).range(), PortRange::WellKnown);
    assert_eq!(Port::new(8080).range(), PortRange::Registered);
    assert_eq!(Port::new(60000).range(), PortRange::Private);
    assert!(!Port::new(65536).is_valid());
}

#[test]
fn test_trait_objects() {
    let values: Vec<Box<dyn Validatable>> = vec![
        Box::new(Subnet::new("24", SubnetNotation::Cidr)),
        Box::new(Ipv4Address::new("10.0.0.1", Ipv4Notation::DotDecimal)),
        Box::new(Ipv6Address::new("::1")),
        Box::new(Port::new(443)),
    ];
    let texts: Vec<String> = values.iter().map(|v| v.to_canonical_text()).collect();
    assert!(values.iter().all(|v| v.is_valid()));
    assert_eq!(
        texts,
        vec![
            "255.255.255.0",
            "10.0.0.1",
            "0000:0000:0000:0000:0000:0000:0000:0001",
            "443"
        ]
    );
}

#[test]
fn test_json_report() {
    let ip = Ipv4Address::new("192.168.0.1/24", Ipv4Notation::CidrShort);
    let json = render_json(&Report::for_ipv4("192.168.0.1/24", &ip)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["kind"], "ipv4");
    assert_eq!(value["valid"], true);
}
