//! Bounded numeric input fields with commit-on-blur semantics.
//!
//! Models the calculator's interactive amount/rate/term fields: a keystroke
//! updates only the raw text (committing eagerly when the text already
//! parses in range), and blur either reformats the committed value or
//! reverts the text to the last valid state. Validity is checked against
//! [`FieldLimits`], never thrown.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::format::{format_number, parse_formatted};
use crate::types::Rate;

// ---------------------------------------------------------------------------
// Limits and reference defaults
// ---------------------------------------------------------------------------

/// Validation bounds and display precision for one input field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FieldLimits {
    pub min: Decimal,
    pub max: Decimal,
    /// Spinner increment; informational for consumers rendering controls.
    pub step: Decimal,
    /// Decimal places shown when the committed value is formatted.
    pub decimals: u32,
}

/// Loan amount: 1,000 to 1,000,000 currency units.
pub const LOAN_AMOUNT_LIMITS: FieldLimits = FieldLimits {
    min: dec!(1000),
    max: dec!(1_000_000),
    step: dec!(1000),
    decimals: 0,
};

/// Loan term: 1 to 360 months.
pub const LOAN_TERM_LIMITS: FieldLimits = FieldLimits {
    min: dec!(1),
    max: dec!(360),
    step: dec!(1),
    decimals: 0,
};

/// Certificate amount: same band as loan amounts.
pub const CERTIFICATE_AMOUNT_LIMITS: FieldLimits = FieldLimits {
    min: dec!(1000),
    max: dec!(1_000_000),
    step: dec!(1000),
    decimals: 0,
};

/// Certificate term: 1 to 3,650 days.
pub const CERTIFICATE_TERM_LIMITS: FieldLimits = FieldLimits {
    min: dec!(1),
    max: dec!(3650),
    step: dec!(1),
    decimals: 0,
};

/// Annual interest rate in percent, two decimals.
pub const INTEREST_RATE_LIMITS: FieldLimits = FieldLimits {
    min: dec!(0.01),
    max: dec!(100),
    step: dec!(0.01),
    decimals: 2,
};

/// Reference annual rate for loan quotes. The shared interactive rate field
/// starts here.
pub const DEFAULT_LOAN_RATE: Rate = dec!(23);

/// Reference annual rate for certificate quotes.
pub const DEFAULT_CERTIFICATE_RATE: Rate = dec!(18.75);

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Lifecycle of a field between focus events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldState {
    Idle,
    /// Raw text is being edited; it may not match the committed value.
    Editing,
    /// Blur accepted the text and reformatted it.
    Committed,
    /// Blur rejected the text and restored the last committed value.
    Reverted,
}

/// A numeric input field holding both the raw text under edit and the last
/// committed (valid, in-range) value.
#[derive(Debug, Clone)]
pub struct BoundedField {
    limits: FieldLimits,
    committed: Decimal,
    text: String,
    state: FieldState,
}

impl BoundedField {
    /// Initial values are configured defaults and are not range-checked.
    pub fn new(limits: FieldLimits, initial: Decimal) -> Self {
        Self {
            limits,
            committed: initial,
            text: format_number(Some(initial), limits.decimals),
            state: FieldState::Idle,
        }
    }

    /// Apply one change event's raw text. Characters outside `[0-9.]` are
    /// dropped. The committed value moves eagerly when the cleaned text
    /// parses and sits inside the limits; otherwise only the text changes.
    pub fn input(&mut self, raw: &str) {
        self.text = raw
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        self.state = FieldState::Editing;

        if let Some(parsed) = parse_formatted(&self.text) {
            if self.in_range(parsed) {
                self.committed = parsed;
            }
        }
    }

    /// Validate on blur. Unparseable or out-of-range text reverts to the
    /// last committed value; valid text is committed and reformatted.
    pub fn blur(&mut self) -> FieldState {
        self.state = match parse_formatted(&self.text) {
            Some(parsed) if self.in_range(parsed) => {
                self.committed = parsed;
                FieldState::Committed
            }
            _ => FieldState::Reverted,
        };
        self.text = format_number(Some(self.committed), self.limits.decimals);
        self.state
    }

    /// Acknowledge the blur outcome and return to `Idle`.
    pub fn settle(&mut self) {
        self.state = FieldState::Idle;
    }

    /// Restore a configured value, e.g. when the hosting dialog closes.
    pub fn reset(&mut self, value: Decimal) {
        self.committed = value;
        self.text = format_number(Some(value), self.limits.decimals);
        self.state = FieldState::Idle;
    }

    pub fn value(&self) -> Decimal {
        self.committed
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn limits(&self) -> FieldLimits {
        self.limits
    }

    fn in_range(&self, value: Decimal) -> bool {
        value >= self.limits.min && value <= self.limits.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn rate_field() -> BoundedField {
        BoundedField::new(INTEREST_RATE_LIMITS, DEFAULT_LOAN_RATE)
    }

    #[test]
    fn test_starts_idle_with_formatted_default() {
        let field = rate_field();
        assert_eq!(field.state(), FieldState::Idle);
        assert_eq!(field.text(), "23.00");
        assert_eq!(field.value(), dec!(23));
    }

    #[test]
    fn test_keystroke_strips_and_commits_in_range() {
        let mut field = rate_field();
        field.input("18.x75");
        assert_eq!(field.state(), FieldState::Editing);
        assert_eq!(field.text(), "18.75");
        assert_eq!(field.value(), dec!(18.75));
    }

    #[test]
    fn test_keystroke_out_of_range_keeps_committed() {
        let mut field = rate_field();
        field.input("500");
        assert_eq!(field.text(), "500");
        // committed value untouched until something valid arrives
        assert_eq!(field.value(), dec!(23));
    }

    #[test]
    fn test_blur_commits_and_reformats() {
        let mut field = BoundedField::new(LOAN_AMOUNT_LIMITS, dec!(100000));
        field.input("250000");
        assert_eq!(field.blur(), FieldState::Committed);
        assert_eq!(field.value(), dec!(250000));
        assert_eq!(field.text(), "250,000");
    }

    #[test]
    fn test_blur_reverts_out_of_range() {
        let mut field = BoundedField::new(LOAN_AMOUNT_LIMITS, dec!(100000));
        field.input("500");
        assert_eq!(field.blur(), FieldState::Reverted);
        assert_eq!(field.value(), dec!(100000));
        assert_eq!(field.text(), "100,000");
    }

    #[test]
    fn test_blur_reverts_unparseable() {
        let mut field = rate_field();
        field.input("12.3.4");
        assert_eq!(field.blur(), FieldState::Reverted);
        assert_eq!(field.text(), "23.00");
    }

    #[test]
    fn test_settle_returns_to_idle() {
        let mut field = rate_field();
        field.input("19");
        field.blur();
        field.settle();
        assert_eq!(field.state(), FieldState::Idle);
    }

    #[test]
    fn test_reset_restores_default() {
        let mut field = rate_field();
        field.input("45");
        field.blur();
        field.reset(DEFAULT_LOAN_RATE);
        assert_eq!(field.value(), dec!(23));
        assert_eq!(field.text(), "23.00");
        assert_eq!(field.state(), FieldState::Idle);
    }
}
