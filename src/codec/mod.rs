//! Notation codecs shared by the address models.
//!
//! - [`segment`] - Conversion of single 8/16-bit segments between binary, decimal and hex text
//! - [`mask_table`] - The 33 canonical IPv4 subnet masks and the legacy class table

pub mod mask_table;
pub mod segment;

pub use mask_table::{class_for, mask_for, prefix_for, MaskClass, CLASS_MASKS, SUBNET_MASKS};
