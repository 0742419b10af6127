//! Conversion and classification of IPv4 addresses, IPv4 subnet masks and
//! IPv6 addresses across their textual notations.
//!
//! - [`codec`] - Segment codec and the canonical subnet mask table
//! - [`models`] - [`Subnet`], [`Ipv4Address`], [`Ipv6Address`] and [`Port`]
//! - [`output`] - Text and JSON conversion reports
//! - [`config`] - Environment configuration
//! - [`cli`] - Command line wrapper

pub mod cli;
pub mod codec;
pub mod config;
pub mod models;
pub mod output;

pub use codec::MaskClass;
pub use models::{
    Ipv4Address, Ipv4Notation, Ipv6Address, Port, PortRange, Subnet, SubnetNotation, Validatable,
};
