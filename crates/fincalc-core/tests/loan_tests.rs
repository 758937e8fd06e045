use fincalc_core::loan::{self, LoanInput};
use fincalc_core::FinCalcError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Loan amortization tests
// ===========================================================================

fn reference_loan() -> LoanInput {
    // The product page's worked example: 100,000 at the 23% reference rate
    // over one year
    LoanInput {
        principal: dec!(100000),
        annual_rate_pct: dec!(23),
        term_months: 12,
    }
}

fn assert_close(actual: Decimal, expected: Decimal, tol: Decimal, msg: &str) {
    assert!(
        (actual - expected).abs() < tol,
        "{}: {} vs {}",
        msg,
        actual,
        expected
    );
}

#[test]
fn test_reference_payment() {
    let payment = loan::monthly_payment(&reference_loan()).unwrap();
    assert_close(payment, dec!(9407.6321), dec!(0.001), "monthly payment");
}

#[test]
fn test_schedule_length_matches_term() {
    for term in [1u32, 6, 12, 48, 360] {
        let input = LoanInput {
            term_months: term,
            ..reference_loan()
        };
        let output = loan::build_loan_schedule(&input).unwrap();
        assert_eq!(output.result.schedule.len(), term as usize);
    }
}

#[test]
fn test_balances_non_increasing() {
    let output = loan::build_loan_schedule(&reference_loan()).unwrap();
    let schedule = &output.result.schedule;
    for pair in schedule.windows(2) {
        assert!(
            pair[1].balance <= pair[0].balance,
            "balance rose from {} to {} at month {}",
            pair[0].balance,
            pair[1].balance,
            pair[1].month
        );
    }
    assert!(schedule.last().unwrap().balance >= Decimal::ZERO);
}

#[test]
fn test_principal_fully_amortized() {
    let output = loan::build_loan_schedule(&reference_loan()).unwrap();
    let paid: Decimal = output
        .result
        .schedule
        .iter()
        .map(|p| p.principal_paid)
        .sum();
    assert_close(
        paid,
        dec!(100000),
        dec!(0.000001),
        "sum of principal portions",
    );
}

#[test]
fn test_payment_constant_across_periods() {
    let output = loan::build_loan_schedule(&reference_loan()).unwrap();
    let payment = output.result.monthly_payment;
    assert!(output.result.schedule.iter().all(|p| p.payment == payment));
}

#[test]
fn test_summary_query_matches_schedule() {
    let input = reference_loan();
    let summary = loan::monthly_payment(&input).unwrap();
    let output = loan::build_loan_schedule(&input).unwrap();
    assert_eq!(summary, output.result.monthly_payment);
}

#[test]
fn test_totals_reconcile() {
    let output = loan::build_loan_schedule(&reference_loan()).unwrap();
    let r = &output.result;
    assert_eq!(r.total_paid, r.monthly_payment * dec!(12));
    assert_close(
        r.total_paid - r.total_interest,
        dec!(100000),
        dec!(0.000001),
        "payments minus interest",
    );
}

#[test]
fn test_long_mortgage_case() {
    // 500,000 at 18% over 30 years
    let input = LoanInput {
        principal: dec!(500000),
        annual_rate_pct: dec!(18),
        term_months: 360,
    };
    let output = loan::build_loan_schedule(&input).unwrap();
    let r = &output.result;
    assert_close(r.monthly_payment, dec!(7535.43), dec!(0.01), "360m payment");
    assert_eq!(r.schedule.len(), 360);
    let last = r.schedule.last().unwrap().balance;
    assert!(last >= Decimal::ZERO && last < dec!(0.0001));
}

#[test]
fn test_envelope_metadata() {
    let output = loan::build_loan_schedule(&reference_loan()).unwrap();
    assert!(output.methodology.contains("amortization"));
    assert!(output.warnings.is_empty());
    assert!(!output.metadata.version.is_empty());
    assert_eq!(output.metadata.precision, "rust_decimal_128bit");
}

#[test]
fn test_zero_rate_surfaces_division_by_zero() {
    let input = LoanInput {
        annual_rate_pct: Decimal::ZERO,
        ..reference_loan()
    };
    assert!(matches!(
        loan::monthly_payment(&input),
        Err(FinCalcError::DivisionByZero { .. })
    ));
}

#[test]
fn test_invalid_inputs_rejected() {
    let negative_principal = LoanInput {
        principal: dec!(-1),
        ..reference_loan()
    };
    let negative_rate = LoanInput {
        annual_rate_pct: dec!(-5),
        ..reference_loan()
    };
    for input in [negative_principal, negative_rate] {
        assert!(matches!(
            loan::build_loan_schedule(&input),
            Err(FinCalcError::InvalidInput { .. })
        ));
    }
}
