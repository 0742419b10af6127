//! IPv4 address with dot-decimal, binary and CIDR notation support.
//!
//! Provides [`Ipv4Address`], which keeps the address as dotted-decimal text and
//! optionally owns the [`Subnet`] given with a CIDR notation.

use super::{Subnet, SubnetNotation, Validatable};
use crate::codec::segment::{
    binary_dotted_to_decimal, decimal_dotted_to_binary, from_decimal, split_exact,
    IPV4_SEGMENT_BITS,
};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Number of segments in an IPv4 address.
pub const NUM_SEGMENTS: usize = 4;

/// How an [`Ipv4Address`] value was given.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Ipv4Notation {
    Invalid,
    /// `127.0.0.1`
    DotDecimal,
    /// `01111111.00000000.00000000.00000001`
    Binary,
    /// `127.0.0.1/32`
    CidrShort,
    /// `127.0.0.1/255.255.255.255`
    CidrLong,
    /// `01111111.00000000.00000000.00000001/11111111.11111111.11111111.11111111`
    CidrBinary,
}

impl Ipv4Notation {
    /// Map the legacy numeric notation codes. Unknown codes become `Invalid`.
    pub fn from_code(code: i32) -> Ipv4Notation {
        match code {
            0 => Ipv4Notation::DotDecimal,
            1 => Ipv4Notation::Binary,
            2 => Ipv4Notation::CidrShort,
            3 => Ipv4Notation::CidrLong,
            4 => Ipv4Notation::CidrBinary,
            _ => Ipv4Notation::Invalid,
        }
    }

    /// Guess the notation of `text` from its shape.
    ///
    /// Groups of exactly 8 binary digits are read as binary, a '/' followed by
    /// a dotted value as CIDR long, any other '/' as CIDR short.
    pub fn detect(text: &str) -> Ipv4Notation {
        let is_binary = |part: &str| {
            split_exact(part, '.', NUM_SEGMENTS).is_some_and(|groups| {
                groups.iter().all(|g| {
                    g.len() == IPV4_SEGMENT_BITS && g.chars().all(|c| c == '0' || c == '1')
                })
            })
        };
        match text.split_once('/') {
            Some((addr, _)) if is_binary(addr) => Ipv4Notation::CidrBinary,
            Some((_, mask)) if mask.contains('.') => Ipv4Notation::CidrLong,
            Some(_) => Ipv4Notation::CidrShort,
            None if is_binary(text) => Ipv4Notation::Binary,
            None => Ipv4Notation::DotDecimal,
        }
    }
}

impl FromStr for Ipv4Notation {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dot" | "dot-decimal" => Ok(Ipv4Notation::DotDecimal),
            "binary" | "bin" => Ok(Ipv4Notation::Binary),
            "cidr-short" | "cidr" => Ok(Ipv4Notation::CidrShort),
            "cidr-long" => Ok(Ipv4Notation::CidrLong),
            "cidr-binary" => Ok(Ipv4Notation::CidrBinary),
            other => Err(format!("Unknown IPv4 notation: {other}").into()),
        }
    }
}

/// An IPv4 address, optionally carrying a subnet mask.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ipv4Address {
    value: String,
    notation: Ipv4Notation,
    subnet: Option<Subnet>,
}

impl Ipv4Address {
    /// Create an address from `value` written in `notation`.
    ///
    /// # Examples
    /// ```
    /// use net_notation::models::{Ipv4Address, Ipv4Notation};
    /// let ip = Ipv4Address::new("10.1.2.0/24", Ipv4Notation::CidrShort);
    /// assert_eq!(ip.to_string(), "10.1.2.0");
    /// assert_eq!(ip.subnet().unwrap().to_dot(), "255.255.255.0");
    /// ```
    pub fn new(value: &str, notation: Ipv4Notation) -> Ipv4Address {
        let mut address = Ipv4Address {
            value: value.to_string(),
            notation,
            subnet: None,
        };
        address.parse();
        address
    }

    /// Create an address, guessing the notation with [`Ipv4Notation::detect`].
    pub fn detect(value: &str) -> Ipv4Address {
        Ipv4Address::new(value, Ipv4Notation::detect(value))
    }

    fn parse(&mut self) {
        log::trace!("Ipv4Address::parse({}, {:?})", self.value, self.notation);
        let value = self.value.clone();
        match self.notation {
            Ipv4Notation::DotDecimal => self.from_dot_decimal(&value),
            Ipv4Notation::Binary => self.from_binary(&value),
            Ipv4Notation::CidrShort => self.from_cidr_short(&value),
            Ipv4Notation::CidrLong => self.from_cidr_long(&value),
            Ipv4Notation::CidrBinary => self.from_cidr_binary(&value),
            Ipv4Notation::Invalid => {}
        }
    }

    fn invalidate(&mut self, reason: &str, value: &str) {
        log::warn!("{reason}: {value}");
        self.value.clear();
        self.subnet = None;
        self.notation = Ipv4Notation::Invalid;
    }

    /// Notation of the last update: `DotDecimal` once parsed, `Invalid` otherwise.
    pub fn notation(&self) -> Ipv4Notation {
        self.notation
    }

    /// The owned subnet, present after a CIDR notation was parsed.
    pub fn subnet(&self) -> Option<&Subnet> {
        self.subnet.as_ref()
    }

    /// Store a dotted-decimal address verbatim.
    pub fn from_dot_decimal(&mut self, value: &str) {
        self.value = value.to_string();
        self.notation = Ipv4Notation::DotDecimal;
    }

    /// Set the address from `B.B.B.B`, dropping any subnet.
    pub fn from_binary(&mut self, value: &str) {
        match binary_dotted_to_decimal(value) {
            Some(dotted) => {
                self.value = dotted;
                self.subnet = None;
                self.notation = Ipv4Notation::DotDecimal;
            }
            None => self.invalidate("Malformed binary address", value),
        }
    }

    /// The address as `B.B.B.B`, with the binary mask appended directly when a subnet is owned.
    pub fn to_binary(&self) -> String {
        let mut out = self.address_binary();
        if let Some(subnet) = &self.subnet {
            out.push_str(&subnet.to_bin());
        }
        out
    }

    fn address_binary(&self) -> String {
        decimal_dotted_to_binary(&self.value).unwrap_or_default()
    }

    /// Set address and mask from `A.A.A.A/M.M.M.M`.
    pub fn from_cidr_long(&mut self, value: &str) {
        match split_exact(value, '/', 2) {
            Some(parts) => {
                self.value = parts[0].to_string();
                self.subnet = Some(Subnet::new(parts[1], SubnetNotation::Dot));
                self.notation = Ipv4Notation::DotDecimal;
            }
            None => self.invalidate("Malformed CIDR long address", value),
        }
    }

    /// Address followed directly by the dotted mask.
    pub fn to_cidr_long(&self) -> String {
        match &self.subnet {
            Some(subnet) => format!("{}{}", self.value, subnet.to_dot()),
            None => self.value.clone(),
        }
    }

    /// Set address and mask from `A.A.A.A/N`.
    pub fn from_cidr_short(&mut self, value: &str) {
        match split_exact(value, '/', 2) {
            Some(parts) => {
                self.value = parts[0].to_string();
                self.subnet = Some(Subnet::new(parts[1], SubnetNotation::Cidr));
                self.notation = Ipv4Notation::DotDecimal;
            }
            None => self.invalidate("Malformed CIDR short address", value),
        }
    }

    /// Address followed directly by the prefix length (`-1` for a non-canonical mask).
    pub fn to_cidr_short(&self) -> String {
        match &self.subnet {
            Some(subnet) => format!("{}{}", self.value, subnet.to_cidr()),
            None => self.value.clone(),
        }
    }

    /// Set address and mask from `B.B.B.B/B.B.B.B`.
    ///
    /// The subnet is kept even when the address part is malformed.
    pub fn from_cidr_binary(&mut self, value: &str) {
        let Some(parts) = split_exact(value, '/', 2) else {
            self.invalidate("Malformed CIDR binary address", value);
            return;
        };
        let subnet = Subnet::new(parts[1], SubnetNotation::Binary);
        match binary_dotted_to_decimal(parts[0]) {
            Some(dotted) => {
                self.value = dotted;
                self.notation = Ipv4Notation::DotDecimal;
            }
            None => {
                log::warn!("Malformed binary address: {}", parts[0]);
                self.value.clear();
                self.notation = Ipv4Notation::Invalid;
            }
        }
        self.subnet = Some(subnet);
    }

    /// Binary address followed directly by the binary mask.
    pub fn to_cidr_binary(&self) -> String {
        self.to_binary()
    }

    /// The address as a std [`Ipv4Addr`] when it is valid.
    pub fn to_ipv4_addr(&self) -> Option<Ipv4Addr> {
        let parts = split_exact(&self.value, '.', NUM_SEGMENTS)?;
        let segments: Option<Vec<u8>> = parts.iter().map(|p| from_decimal(p)).collect();
        let s = segments?;
        Some(Ipv4Addr::new(s[0], s[1], s[2], s[3]))
    }
}

impl Validatable for Ipv4Address {
    /// Four dot-separated decimal segments, each within 0..=255.
    fn is_valid(&self) -> bool {
        self.to_ipv4_addr().is_some()
    }

    fn to_canonical_text(&self) -> String {
        self.value.clone()
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Serialize for Ipv4Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let text = match &self.subnet {
            Some(subnet) => match subnet.prefix_len() {
                Some(prefix) => format!("{}/{}", self.value, prefix),
                None => format!("{}/{}", self.value, subnet.to_dot()),
            },
            None => self.value.clone(),
        };
        serializer.serialize_str(&text)
    }
}

impl<'de> Deserialize<'de> for Ipv4Address {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let address = Ipv4Address::detect(&s);
        if !address.is_valid() {
            return Err(de::Error::custom(format!("invalid IP address: {s}")));
        }
        if address.subnet().is_some_and(|subnet| !subnet.is_valid()) {
            return Err(de::Error::custom(format!("invalid subnet mask: {s}")));
        }
        Ok(address)
    }
}
