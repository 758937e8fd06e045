use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::field::DEFAULT_LOAN_RATE;
use fincalc_core::loan::{self, LoanInput};

use crate::input;

/// Arguments for the full amortization schedule
#[derive(Args)]
pub struct LoanScheduleArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual rate in percent (defaults to the 23% reference rate)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the monthly payment quote
#[derive(Args)]
pub struct LoanPaymentArgs {
    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual rate in percent (defaults to the 23% reference rate)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in months
    #[arg(long)]
    pub term_months: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_schedule(args: LoanScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input = resolve_input(&args.input, args.principal, args.rate, args.term_months)?;
    let result = loan::build_loan_schedule(&loan_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_payment(args: LoanPaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan_input = resolve_input(&args.input, args.principal, args.rate, args.term_months)?;
    let payment = loan::monthly_payment(&loan_input)?;
    Ok(serde_json::json!({ "result": { "monthly_payment": payment } }))
}

/// Input precedence: JSON file, then piped stdin, then individual flags.
fn resolve_input(
    path: &Option<String>,
    principal: Option<Decimal>,
    rate: Option<Decimal>,
    term_months: Option<u32>,
) -> Result<LoanInput, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let principal = principal.ok_or("--principal required (or pass --input / stdin JSON)")?;
    let term_months = term_months.ok_or("--term-months required (or pass --input / stdin JSON)")?;

    Ok(LoanInput {
        principal,
        annual_rate_pct: rate.unwrap_or(DEFAULT_LOAN_RATE),
        term_months,
    })
}
