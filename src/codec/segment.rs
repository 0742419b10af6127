//! Segment codec.
//!
//! Converts the numeric segments of an address to and from fixed-width
//! text. Parsing is strict: only the digits of the requested base are
//! accepted, so inputs like `"+1"` or `" 7"` are rejected.

use itertools::Itertools;
use regex::Regex;
use std::sync::OnceLock;

/// Number of binary digits in an IPv4 segment.
pub const IPV4_SEGMENT_BITS: usize = 8;

/// Number of hex digits in a padded IPv6 group.
pub const IPV6_GROUP_DIGITS: usize = 4;

static BINARY_REGEX: OnceLock<Regex> = OnceLock::new();
static DECIMAL_REGEX: OnceLock<Regex> = OnceLock::new();
static HEX_REGEX: OnceLock<Regex> = OnceLock::new();

fn binary_regex() -> &'static Regex {
    BINARY_REGEX.get_or_init(|| Regex::new(r"^[01]{1,8}$").expect("Invalid Regex"))
}

fn decimal_regex() -> &'static Regex {
    DECIMAL_REGEX.get_or_init(|| Regex::new(r"^[0-9]{1,3}$").expect("Invalid Regex"))
}

fn hex_regex() -> &'static Regex {
    HEX_REGEX.get_or_init(|| Regex::new(r"^[0-9a-fA-F]{1,4}$").expect("Invalid Regex"))
}

/// Encode an 8-bit segment as exactly 8 binary digits.
///
/// # Examples
/// ```
/// use net_notation::codec::segment::to_binary;
/// assert_eq!(to_binary(192), "11000000");
/// assert_eq!(to_binary(1), "00000001");
/// ```
pub fn to_binary(value: u8) -> String {
    format!("{value:0width$b}", width = IPV4_SEGMENT_BITS)
}

/// Decode 1 to 8 binary digits into an 8-bit segment.
pub fn from_binary(text: &str) -> Option<u8> {
    if !binary_regex().is_match(text) {
        return None;
    }
    u8::from_str_radix(text, 2).ok()
}

/// Parse a base-10 segment in the range 0..=255.
pub fn from_decimal(text: &str) -> Option<u8> {
    if !decimal_regex().is_match(text) {
        return None;
    }
    text.parse::<u8>().ok()
}

/// Parse prefix-length text: 1 to 3 decimal digits, no sign or whitespace.
///
/// Range checking is left to the mask table lookup.
pub fn from_prefix(text: &str) -> Option<i64> {
    if !decimal_regex().is_match(text) {
        return None;
    }
    text.parse::<i64>().ok()
}

/// Parse a hex group of 1 to 4 digits (either case) into a 16-bit segment.
pub fn from_hex(text: &str) -> Option<u16> {
    if !hex_regex().is_match(text) {
        return None;
    }
    u16::from_str_radix(text, 16).ok()
}

/// Encode a 16-bit segment as 4 lowercase hex digits.
pub fn to_hex(value: u16) -> String {
    format!("{value:0width$x}", width = IPV6_GROUP_DIGITS)
}

/// Left-pad a hex group with zeros to 4 characters. Longer groups are left as they are.
pub fn pad_hex_group(group: &str) -> String {
    format!("{group:0>width$}", width = IPV6_GROUP_DIGITS)
}

/// Split dotted text into exactly `count` parts, or `None` on a different arity.
pub fn split_exact(text: &str, delimiter: char, count: usize) -> Option<Vec<&str>> {
    let parts: Vec<&str> = text.split(delimiter).collect();
    if parts.len() != count {
        return None;
    }
    Some(parts)
}

/// Decode `B.B.B.B` into dotted-decimal text.
pub fn binary_dotted_to_decimal(text: &str) -> Option<String> {
    let parts = split_exact(text, '.', 4)?;
    let segments: Option<Vec<u8>> = parts.iter().map(|p| from_binary(p)).collect();
    Some(segments?.iter().join("."))
}

/// Encode dotted-decimal text as `B.B.B.B`.
pub fn decimal_dotted_to_binary(text: &str) -> Option<String> {
    let parts = split_exact(text, '.', 4)?;
    let segments: Option<Vec<u8>> = parts.iter().map(|p| from_decimal(p)).collect();
    Some(segments?.into_iter().map(to_binary).join("."))
}
