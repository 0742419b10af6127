//! IPv6 address with condensed "::" expansion.

use super::Validatable;
use crate::codec::segment::{from_hex, pad_hex_group};
use itertools::Itertools;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::net::Ipv6Addr;

/// Number of 16-bit groups in an IPv6 address.
pub const NUM_SEGMENTS: usize = 8;

const ZERO_GROUP: &str = "0000";

/// An IPv6 address.
///
/// The raw text is kept as given; the normalized form holds 8 groups padded
/// to 4 hex digits, or no groups at all when the text could not be expanded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ipv6Address {
    value: String,
    segments: Vec<String>,
}

impl Ipv6Address {
    /// Create an address from colon-separated or "::" condensed text.
    ///
    /// # Examples
    /// ```
    /// use net_notation::models::Ipv6Address;
    /// let ip = Ipv6Address::new("ff06::3");
    /// assert_eq!(ip.to_full(), "ff06:0000:0000:0000:0000:0000:0000:0003");
    /// ```
    pub fn new(value: &str) -> Ipv6Address {
        let mut address = Ipv6Address {
            value: value.to_string(),
            segments: Vec::new(),
        };
        address.normalize();
        address
    }

    fn normalize(&mut self) {
        let groups = if self.value.contains("::") {
            deflate(&self.value)
        } else {
            split_groups(&self.value).map(|g| g.into_iter().map(String::from).collect())
        };
        self.segments = match groups {
            Some(groups) => groups.iter().map(|g| pad_hex_group(g)).collect(),
            None => {
                log::warn!("Could not normalize IPv6 address: {}", self.value);
                Vec::new()
            }
        };
        log::debug!("Ipv6Address {} -> {:?}", self.value, self.segments);
    }

    /// The text the address was created from.
    pub fn raw(&self) -> &str {
        &self.value
    }

    /// Normalized groups, empty when normalization failed.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The normalized groups joined with ':'.
    pub fn to_full(&self) -> String {
        self.segments.join(":")
    }

    fn values(&self) -> Option<Vec<u16>> {
        if self.segments.len() != NUM_SEGMENTS {
            return None;
        }
        self.segments.iter().map(|s| from_hex(s)).collect()
    }

    /// Shortest form: lowercase, no leading zeros, longest zero run as "::".
    pub fn to_condensed(&self) -> Option<String> {
        let values = self.values()?;
        let (start, len) = longest_zero_run(&values);
        let hex = |slice: &[u16]| slice.iter().map(|v| format!("{v:x}")).join(":");
        if len < 2 {
            return Some(hex(&values[..]));
        }
        Some(format!(
            "{}::{}",
            hex(&values[..start]),
            hex(&values[start + len..])
        ))
    }

    /// The address as a std [`Ipv6Addr`] when it is valid.
    pub fn to_ipv6_addr(&self) -> Option<Ipv6Addr> {
        let v = self.values()?;
        Some(Ipv6Addr::new(
            v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7],
        ))
    }
}

/// Split plain colon-separated text. Empty groups are malformed.
fn split_groups(text: &str) -> Option<Vec<&str>> {
    let groups: Vec<&str> = text.split(':').collect();
    if groups.iter().any(|g| g.is_empty()) {
        return None;
    }
    Some(groups)
}

/// Expand a single "::" into the missing zero groups.
///
/// An empty left part contributes no groups, while the right part always
/// counts as at least one group (padded to "0000" when empty). Returns `None`
/// for more than one "::", empty groups inside either part, or when no group
/// is left for the "::" to stand for.
fn deflate(text: &str) -> Option<Vec<String>> {
    let parts: Vec<&str> = text.split("::").collect();
    if parts.len() != 2 {
        return None;
    }
    let before = if parts[0].is_empty() {
        Vec::new()
    } else {
        split_groups(parts[0])?
    };
    let after = if parts[1].is_empty() {
        vec![""]
    } else {
        split_groups(parts[1])?
    };

    let remaining = NUM_SEGMENTS as i64 - before.len() as i64 - after.len() as i64;
    if remaining <= 0 {
        return None;
    }

    let mut groups: Vec<String> = before.iter().map(|g| g.to_string()).collect();
    groups.extend(std::iter::repeat(ZERO_GROUP.to_string()).take(remaining as usize));
    groups.extend(after.iter().map(|g| g.to_string()));
    Some(groups)
}

/// Start and length of the leftmost longest run of zero groups.
fn longest_zero_run(values: &[u16]) -> (usize, usize) {
    let mut best = (0, 0);
    let mut i = 0;
    while i < values.len() {
        if values[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < values.len() && values[i] == 0 {
            i += 1;
        }
        if i - start > best.1 {
            best = (start, i - start);
        }
    }
    best
}

impl Validatable for Ipv6Address {
    /// Checks the normalized groups, so condensed input is valid when it expands cleanly.
    fn is_valid(&self) -> bool {
        self.values().is_some()
    }

    fn to_canonical_text(&self) -> String {
        if self.is_valid() {
            self.to_full()
        } else {
            self.value.clone()
        }
    }
}

impl fmt::Display for Ipv6Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_canonical_text())
    }
}

impl Serialize for Ipv6Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_canonical_text())
    }
}

impl<'de> Deserialize<'de> for Ipv6Address {
    fn deserialize<D>(deserializer: D) -> Result<Ipv6Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let address = Ipv6Address::new(&s);
        if !address.is_valid() {
            return Err(de::Error::custom(format!("invalid IPv6 address: {s}")));
        }
        Ok(address)
    }
}
