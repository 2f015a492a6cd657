//! Numeric formatting and lenient decimal parsing.

/// Formats a value with a fixed number of decimal places.
///
/// Non-finite values render as their standard textual forms ("NaN", "inf"),
/// so a bad upstream computation stays visible instead of masquerading as a
/// number.
pub fn format_number(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}")
}

/// Parses a decimal from user-entered text.
///
/// Accepts comma as a decimal separator and trims surrounding whitespace.
/// Empty input and the placeholder words "nan", "none" and "null" yield
/// `None`, as does any text that is not a number.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let cleaned = text.trim().replace(',', ".");
    match cleaned.to_lowercase().as_str() {
        "" | "nan" | "none" | "null" => None,
        _ => cleaned.parse::<f64>().ok(),
    }
}
