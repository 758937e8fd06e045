//! Deposit certificate interest accrual on a 360-day year.
//!
//! Simple daily interest, tabulated in 30-day buckets for display. The
//! quoted total always comes from [`total_interest`]; the per-bucket
//! "accumulated" column is a separate, historical figure (see
//! [`bucket_scaled_interest`]).

use rust_decimal::Decimal;
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
const DAYS_PER_YEAR: Decimal = dec!(360);
/// Display bucket width in days.
const DAYS_PER_BUCKET: u32 = 30;

// ---------------------------------------------------------------------------
// Input / Output Types
// ---------------------------------------------------------------------------

/// Input for a fixed-term deposit certificate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateInput {
    /// Amount deposited.
    pub principal: Money,
    /// Nominal annual rate as a percentage (18.75 = 18.75%).
    pub annual_rate_pct: Rate,
    /// Term in days.
    pub term_days: u32,
}

/// One 30-day bucket of the accrual schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificatePeriod {
    /// 1-based bucket number.
    pub month: u32,
    /// Days covered by this bucket; the last bucket may be partial.
    pub days_in_period: u32,
    /// Interest accrued within this bucket only.
    pub interest: Money,
    /// The tabulated "accumulated" figure: this bucket's interest scaled by
    /// its index. Not a running sum of prior buckets.
    pub accumulated_interest: Money,
}

/// Output of a schedule build.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateScheduleOutput {
    /// Quoted interest earned over the full term (360-day simple interest).
    pub total_interest: Money,
    /// Term expressed in approximate months (days / 30, one decimal).
    pub months_equivalent: Decimal,
    pub schedule: Vec<CertificatePeriod>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Total simple interest earned over the term: `principal · rate · days / 36000`.
///
/// This is the authoritative quoted figure. It is computed directly from the
/// term, never by summing schedule buckets.
pub fn total_interest(input: &CertificateInput) -> FinCalcResult<Money> {
    validate(input)?;
    Ok(input.principal * input.annual_rate_pct * Decimal::from(input.term_days)
        / (DAYS_PER_YEAR * PERCENT_DIVISOR))
}

/// The "accumulated interest" figure tabulated for one bucket: the bucket's
/// own interest multiplied by its 1-based index.
///
/// This has always been the displayed column and is kept behind its own
/// operation so the schedule loop and the quoted total stay independent.
pub fn bucket_scaled_interest(interest: Money, month: u32) -> Money {
    interest * Decimal::from(month)
}

/// Build the bucketed accrual schedule with summary figures.
pub fn build_certificate_schedule(
    input: &CertificateInput,
) -> FinCalcResult<ComputationOutput<CertificateScheduleOutput>> {
    let start = Instant::now();
    validate(input)?;

    let daily_rate = input.annual_rate_pct / PERCENT_DIVISOR / DAYS_PER_YEAR;
    let bucket_count = input.term_days.div_ceil(DAYS_PER_BUCKET);
    let mut schedule = Vec::with_capacity(bucket_count as usize);

    for month in 1..=bucket_count {
        let elapsed = (month - 1) * DAYS_PER_BUCKET;
        let days_in_period = DAYS_PER_BUCKET.min(input.term_days - elapsed);
        let interest = input.principal * daily_rate * Decimal::from(days_in_period);

        schedule.push(CertificatePeriod {
            month,
            days_in_period,
            interest,
            accumulated_interest: bucket_scaled_interest(interest, month),
        });
    }

    let result = CertificateScheduleOutput {
        total_interest: total_interest(input)?,
        months_equivalent: (Decimal::from(input.term_days) / Decimal::from(DAYS_PER_BUCKET))
            .round_dp(1),
        schedule,
    };

    Ok(with_metadata(
        "Simple daily interest, 360-day year, 30-day display buckets",
        input,
        Vec::new(),
        start.elapsed().as_micros() as u64,
        result,
    ))
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

fn validate(input: &CertificateInput) -> FinCalcResult<()> {
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
    if input.term_days == 0 {
        return Err(FinCalcError::InvalidInput {
            field: "term_days".into(),
            reason: "Term must be at least 1 day".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ninety_day_certificate() -> CertificateInput {
        CertificateInput {
            principal: dec!(100000),
            annual_rate_pct: dec!(18.75),
            term_days: 90,
        }
    }

    #[test]
    fn test_bucket_layout_even_term() {
        let output = build_certificate_schedule(&ninety_day_certificate()).unwrap();
        let schedule = &output.result.schedule;
        assert_eq!(schedule.len(), 3);
        assert!(schedule.iter().all(|p| p.days_in_period == 30));
    }

    #[test]
    fn test_bucket_layout_partial_last() {
        let input = CertificateInput {
            term_days: 100,
            ..ninety_day_certificate()
        };
        let output = build_certificate_schedule(&input).unwrap();
        let schedule = &output.result.schedule;
        assert_eq!(schedule.len(), 4);
        assert_eq!(schedule[3].days_in_period, 10);
        assert_eq!(output.result.months_equivalent, dec!(3.3));
    }

    #[test]
    fn test_accumulated_is_index_scaled() {
        let output = build_certificate_schedule(&ninety_day_certificate()).unwrap();
        for period in &output.result.schedule {
            assert_eq!(
                period.accumulated_interest,
                period.interest * Decimal::from(period.month)
            );
        }
    }

    #[test]
    fn test_total_interest_quoted_figure() {
        // 100000 * 18.75 * 90 / 36000 = 4687.50
        let total = total_interest(&ninety_day_certificate()).unwrap();
        assert_eq!(total, dec!(4687.5));
    }

    #[test]
    fn test_zero_rate_accrues_nothing() {
        let input = CertificateInput {
            annual_rate_pct: Decimal::ZERO,
            ..ninety_day_certificate()
        };
        assert_eq!(total_interest(&input).unwrap(), Decimal::ZERO);
        let output = build_certificate_schedule(&input).unwrap();
        assert!(output.result.schedule.iter().all(|p| p.interest.is_zero()));
    }

    #[test]
    fn test_rejects_zero_term() {
        let input = CertificateInput {
            term_days: 0,
            ..ninety_day_certificate()
        };
        assert!(matches!(
            build_certificate_schedule(&input),
            Err(FinCalcError::InvalidInput { .. })
        ));
    }
}
