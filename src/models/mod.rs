//! Address value types.
//!
//! - [`Subnet`] - IPv4 subnet mask in dot, CIDR or binary notation
//! - [`Ipv4Address`] - IPv4 address with an optional owned [`Subnet`]
//! - [`Ipv6Address`] - IPv6 address with "::" expansion
//! - [`Port`] - Port number with its IANA range
//!
//! All of them implement [`Validatable`].

mod ipv4;
mod ipv6;
mod port;
mod subnet;
mod validatable;

pub use ipv4::{Ipv4Address, Ipv4Notation};
pub use ipv6::Ipv6Address;
pub use port::{Port, PortRange};
pub use subnet::{Subnet, SubnetNotation};
pub use validatable::Validatable;
