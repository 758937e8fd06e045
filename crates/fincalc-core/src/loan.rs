//! Fixed-rate loan amortization: level payment queries and full
//! period-by-period schedules.
//!
//! Standard annuity mathematics with monthly compounding. All math uses
//! `rust_decimal::Decimal`; intermediate values are never rounded, so the
//! running balance amortizes exactly to zero at term end.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinCalcError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::FinCalcResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const PERCENT_DIVISOR: Decimal = dec!(100);
const MONTHS_PER_YEAR: Decimal = dec!(12);

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// Input for a fixed-rate amortizing loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed.
    pub principal: Money,
    /// Nominal annual rate as a percentage (23 = 23%).
    pub annual_rate_pct: Rate,
    /// Term in months.
    pub term_months: u32,
}

/// One month of the amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanPeriod {
    /// 1-based month number.
    pub month: u32,
    /// Level payment, identical for every month of the loan.
    pub payment: Money,
    /// Interest portion of the payment.
    pub interest: Money,
    /// Principal-reduction portion of the payment.
    pub principal_paid: Money,
    /// Balance after this payment, floored at zero for display. The
    /// unfloored balance keeps driving the next month's interest.
    pub balance: Money,
}

/// Output of a schedule build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanScheduleOutput {
    pub monthly_payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
    pub schedule: Vec<LoanPeriod>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Level monthly payment for the loan, without building the schedule.
///
/// A zero rate has no level-payment solution: the annuity denominator
/// degenerates and the call returns `DivisionByZero`. Callers that need a
/// finite payment must validate `annual_rate_pct > 0` upstream.
pub fn monthly_payment(input: &LoanInput) -> FinCalcResult<Money> {
    validate(input)?;
    payment_at(input.principal, monthly_rate(input), input.term_months)
}

/// Build the full amortization schedule with summary totals.
pub fn build_loan_schedule(
    input: &LoanInput,
) -> FinCalcResult<ComputationOutput<LoanScheduleOutput>> {
    let start = Instant::now();
    validate(input)?;

    let rate = monthly_rate(input);
    let payment = payment_at(input.principal, rate, input.term_months)?;

    let mut balance = input.principal;
    let mut total_interest = Decimal::ZERO;
    let mut schedule = Vec::with_capacity(input.term_months as usize);

    for month in 1..=input.term_months {
        let interest = balance * rate;
        let principal_paid = payment - interest;
        // The running balance stays unclamped; only the emitted figure is
        // floored at zero.
        balance -= principal_paid;
        total_interest += interest;

        schedule.push(LoanPeriod {
            month,
            payment,
            interest,
            principal_paid,
            balance: balance.max(Decimal::ZERO),
        });
    }

    let result = LoanScheduleOutput {
        monthly_payment: payment,
        total_paid: payment * Decimal::from(input.term_months),
        total_interest,
        schedule,
    };

    Ok(with_metadata(
        "Level-payment amortization (annuity), monthly compounding",
        input,
        Vec::new(),
        start.elapsed().as_micros() as u64,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

fn monthly_rate(input: &LoanInput) -> Rate {
    input.annual_rate_pct / PERCENT_DIVISOR / MONTHS_PER_YEAR
}

fn payment_at(principal: Money, rate: Rate, term_months: u32) -> FinCalcResult<Money> {
    let one_plus_r = Decimal::ONE + rate;
    let factor = one_plus_r
        .checked_powi(term_months as i64)
        .ok_or_else(|| FinCalcError::InvalidInput {
            field: "term_months".into(),
            reason: "(1 + rate)^term overflows decimal precision".into(),
        })?;

    let annuity = Decimal::ONE - Decimal::ONE / factor;
    if annuity.is_zero() {
        return Err(FinCalcError::DivisionByZero {
            context: "loan annuity factor".into(),
        });
    }

    Ok(principal * rate / annuity)
}

fn validate(input: &LoanInput) -> FinCalcResult<()> {
    if input.principal <= Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if input.annual_rate_pct < Decimal::ZERO {
        return Err(FinCalcError::InvalidInput {
            field: "annual_rate_pct".into(),
            reason: "Annual rate cannot be negative".into(),
        });
    }
    if input.term_months == 0 {
        return Err(FinCalcError::InvalidInput {
            field: "term_months".into(),
            reason: "Term must be at least 1 month".into(),
        });
    }
    Ok(())
}
