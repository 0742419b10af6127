//! IPv4 subnet mask with dot, CIDR and binary notation support.

use super::Validatable;
use crate::codec::mask_table::{class_for, mask_for, prefix_for, MaskClass};
use crate::codec::segment::{binary_dotted_to_decimal, decimal_dotted_to_binary, from_prefix};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// How a [`Subnet`] value was last set.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SubnetNotation {
    Invalid,
    /// `255.255.255.0`
    Dot,
    /// `24`
    Cidr,
    /// `11111111.11111111.11111111.00000000`
    Binary,
}

impl SubnetNotation {
    /// Map the legacy numeric notation codes. Unknown codes become `Invalid`.
    pub fn from_code(code: i32) -> SubnetNotation {
        match code {
            0 => SubnetNotation::Dot,
            1 => SubnetNotation::Cidr,
            2 => SubnetNotation::Binary,
            _ => SubnetNotation::Invalid,
        }
    }
}

impl FromStr for SubnetNotation {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dot" => Ok(SubnetNotation::Dot),
            "cidr" => Ok(SubnetNotation::Cidr),
            "binary" | "bin" => Ok(SubnetNotation::Binary),
            other => Err(format!("Unknown subnet notation: {other}").into()),
        }
    }
}

/// An IPv4 subnet mask.
///
/// The mask is stored as dotted-decimal text. It is only valid when that text
/// equals one of the 33 canonical masks, see [`crate::codec::SUBNET_MASKS`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Subnet {
    value: String,
    notation: SubnetNotation,
}

impl Subnet {
    /// Create a subnet from `value` written in `notation`.
    ///
    /// Never fails; check [`Subnet::is_valid`] afterwards.
    ///
    /// # Examples
    /// ```
    /// use net_notation::models::{Subnet, SubnetNotation};
    /// let subnet = Subnet::new("13", SubnetNotation::Cidr);
    /// assert_eq!(subnet.to_dot(), "255.248.0.0");
    /// ```
    pub fn new(value: &str, notation: SubnetNotation) -> Subnet {
        let mut subnet = Subnet {
            value: value.to_string(),
            notation,
        };
        subnet.parse();
        subnet
    }

    fn parse(&mut self) {
        log::trace!("Subnet::parse({}, {:?})", self.value, self.notation);
        let value = self.value.clone();
        match self.notation {
            SubnetNotation::Dot => self.from_dot(&value),
            SubnetNotation::Cidr => match from_prefix(&value) {
                Some(prefix) => self.from_cidr(prefix),
                None => {
                    log::warn!("Subnet prefix is not a number: {value}");
                    self.notation = SubnetNotation::Invalid;
                }
            },
            SubnetNotation::Binary => self.from_bin(&value),
            SubnetNotation::Invalid => {}
        }
    }

    /// Notation of the last successful update, or `Invalid`.
    pub fn notation(&self) -> SubnetNotation {
        self.notation
    }

    /// Store a dotted-decimal mask verbatim. Validity is left to [`Subnet::is_valid`].
    pub fn from_dot(&mut self, value: &str) {
        self.value = value.to_string();
        self.notation = SubnetNotation::Dot;
    }

    /// Set the mask from a prefix length.
    ///
    /// A prefix outside 0..=32 marks the notation `Invalid` and leaves the
    /// previously stored mask untouched.
    pub fn from_cidr(&mut self, prefix: i64) {
        match mask_for(prefix) {
            Some(mask) => {
                self.value = mask.to_string();
                self.notation = SubnetNotation::Dot;
            }
            None => {
                log::warn!("No subnet mask for prefix {prefix}, keeping {}", self.value);
                self.notation = SubnetNotation::Invalid;
            }
        }
    }

    /// Set the mask from `B.B.B.B` binary text.
    ///
    /// Anything other than four groups of 1-8 binary digits clears the value.
    pub fn from_bin(&mut self, value: &str) {
        match binary_dotted_to_decimal(value) {
            Some(dotted) => {
                self.value = dotted;
                self.notation = SubnetNotation::Dot;
            }
            None => {
                log::warn!("Malformed binary subnet mask: {value}");
                self.value.clear();
                self.notation = SubnetNotation::Invalid;
            }
        }
    }

    /// The stored dotted-decimal value.
    pub fn to_dot(&self) -> String {
        self.value.clone()
    }

    /// The stored value as `B.B.B.B`, or an empty string if it is not four decimal segments.
    pub fn to_bin(&self) -> String {
        decimal_dotted_to_binary(&self.value).unwrap_or_default()
    }

    /// Prefix length of the stored mask, `-1` when it is not a canonical mask.
    pub fn to_cidr(&self) -> i32 {
        self.prefix_len().map_or(-1, i32::from)
    }

    /// Prefix length of the stored mask.
    pub fn prefix_len(&self) -> Option<u8> {
        prefix_for(&self.value)
    }

    /// Legacy class of the mask.
    pub fn class(&self) -> Option<MaskClass> {
        class_for(&self.value)
    }

    pub fn is_class_a(&self) -> bool {
        self.class() == Some(MaskClass::A)
    }

    pub fn is_class_b(&self) -> bool {
        self.class() == Some(MaskClass::B)
    }

    pub fn is_class_c(&self) -> bool {
        self.class() == Some(MaskClass::C)
    }

    /// Matches `224.0.0.0` (prefix 3).
    pub fn is_class_d(&self) -> bool {
        self.class() == Some(MaskClass::D)
    }

    pub fn is_class_e(&self) -> bool {
        self.class() == Some(MaskClass::E)
    }
}

impl Validatable for Subnet {
    fn is_valid(&self) -> bool {
        self.prefix_len().is_some()
    }

    fn to_canonical_text(&self) -> String {
        self.to_dot()
    }
}

impl fmt::Display for Subnet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Serialize for Subnet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for Subnet {
    fn deserialize<D>(deserializer: D) -> Result<Subnet, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let subnet = Subnet::new(&s, SubnetNotation::Dot);
        if !subnet.is_valid() {
            return Err(de::Error::custom(format!("invalid subnet mask: {s}")));
        }
        Ok(subnet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::SUBNET_MASKS;

    fn blank() -> Subnet {
        Subnet::new("0", SubnetNotation::Invalid)
    }

    #[test]
    fn test_initialized_with_invalid_notation() {
        let subnet = blank();
        assert!(!subnet.is_valid());
        assert_eq!(subnet.notation(), SubnetNotation::Invalid);
        assert_eq!(subnet.to_dot(), "0");
    }

    #[test]
    fn test_created_from_each_notation() {
        assert!(Subnet::new("255.0.0.0", SubnetNotation::Dot).is_valid());
        let cidr = Subnet::new("13", SubnetNotation::Cidr);
        assert!(cidr.is_valid());
        assert_eq!(cidr.to_dot(), "255.248.0.0");
        assert_eq!(cidr.notation(), SubnetNotation::Dot);
        let bin = Subnet::new("11111111.11110000.00000000.00000000", SubnetNotation::Binary);
        assert!(bin.is_valid());
        assert_eq!(bin.to_dot(), "255.240.0.0");
    }

    #[test]
    fn test_modified_with_each_notation() {
        let mut subnet = blank();
        subnet.from_dot("255.255.128.0");
        assert_eq!(subnet.to_dot(), "255.255.128.0");
        assert!(subnet.is_valid());

        subnet.from_cidr(18);
        assert_eq!(subnet.to_dot(), "255.255.192.0");
        assert!(subnet.is_valid());

        subnet.from_bin("11111111.11111111.11111111.11111100");
        assert_eq!(subnet.to_dot(), "255.255.255.252");
    }

    #[test]
    fn test_conversions() {
        let mut subnet = blank();
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
    fn test_cidr_round_trip_all_prefixes() {
        for prefix in 0..=32i64 {
            let mut subnet = blank();
            subnet.from_cidr(prefix);
            assert_eq!(subnet.to_cidr() as i64, prefix);
            assert_eq!(subnet.to_dot(), SUBNET_MASKS[prefix as usize]);
        }
    }

    #[test]
    fn test_failed_cidr_keeps_stale_value() {
        let mut subnet = Subnet::new("255.255.0.0", SubnetNotation::Dot);
        subnet.from_cidr(33);
        assert_eq!(subnet.notation(), SubnetNotation::Invalid);
        assert_eq!(subnet.to_dot(), "255.255.0.0");
        subnet.from_cidr(-4);
        assert_eq!(subnet.to_dot(), "255.255.0.0");

        let not_a_number = Subnet::new("abc", SubnetNotation::Cidr);
        assert_eq!(not_a_number.notation(), SubnetNotation::Invalid);
        assert!(!not_a_number.is_valid());
    }

    #[test]
    fn test_cidr_text_must_be_plain_digits() {
        for text in ["+8", " 8", "8 ", "0x8", "8.0"] {
            let subnet = Subnet::new(text, SubnetNotation::Cidr);
            assert_eq!(subnet.notation(), SubnetNotation::Invalid, "{text:?}");
            assert!(!subnet.is_valid(), "{text:?}");
            assert_eq!(subnet.to_dot(), text);
        }
        assert!(Subnet::new("08", SubnetNotation::Cidr).is_class_a());
    }

    #[test]
    fn test_non_canonical_masks_are_invalid() {
        let mut subnet = blank();
        subnet.from_dot("255.0.255.0");
        assert!(!subnet.is_valid());
        assert_eq!(subnet.to_cidr(), -1);
        subnet.from_dot("255.255.255.00");
        assert!(!subnet.is_valid());
    }

    #[test]
    fn test_malformed_binary_clears_value() {
        let mut subnet = Subnet::new("255.0.0.0", SubnetNotation::Dot);
        subnet.from_bin("11111111.11111111");
        assert_eq!(subnet.notation(), SubnetNotation::Invalid);
        assert_eq!(subnet.to_dot(), "");
        assert_eq!(subnet.to_bin(), "");
        assert!(!subnet.is_valid());

        subnet.from_bin("11111111.11111111.11111111.2");
        assert!(!subnet.is_valid());
    }

    #[test]
    fn test_binary_round_trip() {
        let bin = "11111111.11111111.11100000.00000000";
        let mut subnet = blank();
        subnet.from_bin(bin);
        assert_eq!(subnet.to_bin(), bin);
    }

    #[test]
    fn test_classes() {
        let cases = [
            (8, [true, false, false, false, false]),
            (16, [false, true, false, false, false]),
            (24, [false, false, true, false, false]),
            (3, [false, false, false, true, false]),
            (32, [false, false, false, false, true]),
        ];
        for (prefix, expected) in cases {
            let mut subnet = blank();
            subnet.from_cidr(prefix);
            assert!(subnet.is_valid());
            let got = [
                subnet.is_class_a(),
                subnet.is_class_b(),
                subnet.is_class_c(),
                subnet.is_class_d(),
                subnet.is_class_e(),
            ];
            assert_eq!(got, expected, "prefix {prefix}");
        }

        for prefix in [0, 1, 2, 4, 7, 9, 15, 17, 23, 25, 31] {
            let mut subnet = blank();
            subnet.from_cidr(prefix);
            assert_eq!(subnet.class(), None, "prefix {prefix}");
        }
    }

    #[test]
    fn test_notation_parsing() {
        assert_eq!("dot".parse::<SubnetNotation>().unwrap(), SubnetNotation::Dot);
        assert_eq!("CIDR".parse::<SubnetNotation>().unwrap(), SubnetNotation::Cidr);
        assert!("hex".parse::<SubnetNotation>().is_err());
        assert_eq!(SubnetNotation::from_code(2), SubnetNotation::Binary);
        assert_eq!(SubnetNotation::from_code(7), SubnetNotation::Invalid);
        assert_eq!(SubnetNotation::from_code(-1), SubnetNotation::Invalid);
    }

    #[test]
    fn test_serde() {
        let subnet = Subnet::new("24", SubnetNotation::Cidr);
        let json = serde_json::to_string(&subnet).unwrap();
        assert_eq!(json, "\"255.255.255.0\"");
        let back: Subnet = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_cidr(), 24);
        assert!(serde_json::from_str::<Subnet>("\"255.0.255.0\"").is_err());
    }
}
