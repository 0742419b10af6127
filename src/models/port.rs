//! Port number classification into IANA ranges.

use super::Validatable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

pub const WELL_KNOWN: RangeInclusive<i64> = 0..=1023;
pub const REGISTERED: RangeInclusive<i64> = 1024..=49151;
pub const PRIVATE: RangeInclusive<i64> = 49152..=65535;

/// IANA port range.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PortRange {
    WellKnown,
    Registered,
    /// Private or dynamic ports.
    Private,
    Invalid,
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            PortRange::WellKnown => "WELL_KNOWN",
            PortRange::Registered => "REGISTERED",
            PortRange::Private => "PRIVATE",
            PortRange::Invalid => "INVALID",
        };
        write!(f, "{name}")
    }
}

/// A port number and the range it falls in.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Port {
    number: i64,
    range: PortRange,
}

impl Port {
    pub fn new(number: i64) -> Port {
        let range = if WELL_KNOWN.contains(&number) {
            PortRange::WellKnown
        } else if REGISTERED.contains(&number) {
            PortRange::Registered
        } else if PRIVATE.contains(&number) {
            PortRange::Private
        } else {
            PortRange::Invalid
        };
        Port { number, range }
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn range(&self) -> PortRange {
        self.range
    }
}

impl Validatable for Port {
    fn is_valid(&self) -> bool {
        self.range != PortRange::Invalid
    }

    fn to_canonical_text(&self) -> String {
        self.number.to_string()
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}
