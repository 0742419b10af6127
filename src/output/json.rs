//! JSON output.

use super::Report;
use std::error::Error;

/// Render a report as pretty-printed JSON.
pub fn render_json(report: &Report) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(report).map_err(|e| format!("Error serializing report: {e}").into())
}
