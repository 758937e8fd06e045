//! Display formatting and parsing for calculator values.
//!
//! Amounts and terms render with 0 decimals, currency results with 2;
//! thousands are grouped with commas. A missing value renders as an empty
//! string rather than erroring, and parsing never panics.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a value with thousands grouping and a fixed number of decimals.
/// `None` (non-numeric or out-of-range upstream) renders empty.
pub fn format_number(value: Option<Decimal>, decimals: u32) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{:.*}", decimals as usize, rounded.abs());

    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Parse user-entered text: grouping commas are stripped, then the remainder
/// must be digits with at most one decimal point. Anything else is `None`.
pub fn parse_formatted(input: &str) -> Option<Decimal> {
    let cleaned = input.replace(',', "");
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}
