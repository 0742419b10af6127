//! Canonical IPv4 subnet masks.
//!
//! Index `n` of [`SUBNET_MASKS`] holds the dotted-decimal mask for prefix length `n`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest IPv4 prefix length.
pub const MAX_PREFIX: u8 = 32;

/// Every contiguous-ones IPv4 mask, ordered by prefix length 0..=32.
pub static SUBNET_MASKS: [&str; 33] = [
    "0.0.0.0",
    "128.0.0.0",
    "192.0.0.0",
    "224.0.0.0",
    "240.0.0.0",
    "248.0.0.0",
    "252.0.0.0",
    "254.0.0.0",
    "255.0.0.0",
    "255.128.0.0",
    "255.192.0.0",
    "255.224.0.0",
    "255.240.0.0",
    "255.248.0.0",
    "255.252.0.0",
    "255.254.0.0",
    "255.255.0.0",
    "255.255.128.0",
    "255.255.192.0",
    "255.255.224.0",
    "255.255.240.0",
    "255.255.248.0",
    "255.255.252.0",
    "255.255.254.0",
    "255.255.255.0",
    "255.255.255.128",
    "255.255.255.192",
    "255.255.255.224",
    "255.255.255.240",
    "255.255.255.248",
    "255.255.255.252",
    "255.255.255.254",
    "255.255.255.255",
];

/// Legacy mask classes.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MaskClass {
    A,
    B,
    C,
    D,
    E,
}

/// Classful lookup keyed by prefix length. Class D maps to prefix 3 (224.0.0.0).
pub static CLASS_MASKS: [(MaskClass, u8); 5] = [
    (MaskClass::A, 8),
    (MaskClass::B, 16),
    (MaskClass::C, 24),
    (MaskClass::D, 3),
    (MaskClass::E, 32),
];

impl MaskClass {
    /// The canonical mask that identifies this class.
    pub fn mask(self) -> &'static str {
        CLASS_MASKS
            .iter()
            .find(|(class, _)| *class == self)
            .map(|(_, prefix)| SUBNET_MASKS[*prefix as usize])
            .unwrap_or(SUBNET_MASKS[0])
    }
}

impl fmt::Display for MaskClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            MaskClass::A => "A",
            MaskClass::B => "B",
            MaskClass::C => "C",
            MaskClass::D => "D",
            MaskClass::E => "E",
        };
        write!(f, "{name}")
    }
}

/// Mask for a prefix length, or `None` when the prefix is outside 0..=32.
///
/// # Examples
/// ```
/// use net_notation::codec::mask_for;
/// assert_eq!(mask_for(13), Some("255.248.0.0"));
/// assert_eq!(mask_for(33), None);
/// ```
pub fn mask_for(prefix: i64) -> Option<&'static str> {
    if !(0..=MAX_PREFIX as i64).contains(&prefix) {
        return None;
    }
    Some(SUBNET_MASKS[prefix as usize])
}

/// Reverse lookup by exact text equality.
pub fn prefix_for(mask: &str) -> Option<u8> {
    SUBNET_MASKS
        .iter()
        .position(|m| *m == mask)
        .map(|pos| pos as u8)
}

/// Legacy class for an exact mask value.
pub fn class_for(mask: &str) -> Option<MaskClass> {
    let prefix = prefix_for(mask)?;
    CLASS_MASKS
        .iter()
        .find(|(_, p)| *p == prefix)
        .map(|(class, _)| *class)
}
