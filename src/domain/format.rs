//! Display formatting for dashboard values.
//!
//! Grouping follows the `en` locale (`44,278`). Fixed-point output rounds the
//! exact binary value, so results only diverge from half-up rounding on exact
//! binary ties.

use num_format::{Locale, ToFormattedString};

/// Integer with `,` thousands separators.
pub fn grouped(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Fixed number of fraction digits.
pub fn to_fixed(value: f64, digits: usize) -> String {
    format!("{:.*}", digits, value)
}

/// Floor of a non-negative fabricated value.
pub fn floor_u64(value: f64) -> u64 {
    value.floor().max(0.0) as u64
}

/// Percentage with an explicit `+` for positive values: `+12.34%`.
pub fn signed_percent(value: f64) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{}%", sign, to_fixed(value, 2))
}

/// `$<grouped>.<cc>` with a zero-padded two digit fraction.
pub fn dollars_with_cents(whole: u64, cents: u64) -> String {
    format!("${}.{:02}", grouped(whole), cents)
}

/// `$` followed by the grouped integer.
pub fn dollars(whole: u64) -> String {
    format!("${}", grouped(whole))
}

/// Spot price: six decimals below one dollar, two otherwise.
pub fn usd_price(usd: f64) -> String {
    let digits = if usd < 1.0 { 6 } else { 2 };
    format!("${}", to_fixed(usd, digits))
}

/// Large amounts in millions with one decimal: `$82345.1M`.
pub fn usd_millions(usd: f64) -> String {
    format!("${}M", to_fixed(usd / 1_000_000.0, 1))
}

/// Length in UTF-16 code units, the unit the hasher and address rules count in.
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// UTF-16 code units `start..end`; a split surrogate pair decodes to U+FFFD.
pub fn utf16_slice(text: &str, start: usize, end: usize) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    let end = end.min(units.len());
    let start = start.min(end);
    String::from_utf16_lossy(&units[start..end])
}

/// `first6...last6` for inputs longer than 20 UTF-16 units.
pub fn shorten_address(address: &str) -> Option<String> {
    let len = utf16_len(address);
    if len <= 20 {
        return None;
    }
    Some(format!(
        "{}...{}",
        utf16_slice(address, 0, 6),
        utf16_slice(address, len - 6, len)
    ))
}
