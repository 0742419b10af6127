//! Terminal output utilities.

use super::Report;
use colored::Colorize;

/// Width of the field-name column.
const NAME_WIDTH: usize = 14;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render a report as one header line followed by one line per field.
pub fn render_text(report: &Report) -> String {
    let status = if report.valid {
        "valid".green()
    } else {
        "invalid".red()
    };
    let mut out = format!(
        "{} {} {}\n",
        report.kind.bold(),
        format_field(&report.input, 0),
        status
    );
    for field in &report.fields {
        out.push_str(&format!(
            "{} {}\n",
            format_field(field.name, NAME_WIDTH),
            format_field(&field.value, 0)
        ));
    }
    out
}
