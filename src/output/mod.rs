//! Rendering of conversion reports.
//!
//! - [`report`] - Collects every derived notation of a value
//! - [`terminal`] - Text output with colors
//! - [`json`] - JSON output

mod json;
mod report;
mod terminal;

pub use json::render_json;
pub use report::{Report, ReportField};
pub use terminal::{format_field, render_text};
