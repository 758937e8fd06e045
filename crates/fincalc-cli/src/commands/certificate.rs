use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fincalc_core::certificate::{self, CertificateInput};
use fincalc_core::field::DEFAULT_CERTIFICATE_RATE;

use crate::input;

/// Arguments for the bucketed accrual schedule
#[derive(Args)]
pub struct CertificateScheduleArgs {
    /// Amount deposited
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual rate in percent (defaults to the 18.75% reference rate)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in days
    #[arg(long)]
    pub term_days: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the total interest quote
#[derive(Args)]
pub struct CertificateInterestArgs {
    /// Amount deposited
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual rate in percent (defaults to the 18.75% reference rate)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in days
    #[arg(long)]
    pub term_days: Option<u32>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_schedule(args: CertificateScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let cert_input = resolve_input(&args.input, args.principal, args.rate, args.term_days)?;
    let result = certificate::build_certificate_schedule(&cert_input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_interest(args: CertificateInterestArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let cert_input = resolve_input(&args.input, args.principal, args.rate, args.term_days)?;
    let interest = certificate::total_interest(&cert_input)?;
    Ok(serde_json::json!({ "result": { "total_interest": interest } }))
}

/// Input precedence: JSON file, then piped stdin, then individual flags.
fn resolve_input(
    path: &Option<String>,
    principal: Option<Decimal>,
    rate: Option<Decimal>,
    term_days: Option<u32>,
) -> Result<CertificateInput, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return input::file::read_json(path);
    }
    if let Some(data) = input::stdin::read_stdin()? {
        return Ok(serde_json::from_value(data)?);
    }

    let principal = principal.ok_or("--principal required (or pass --input / stdin JSON)")?;
    let term_days = term_days.ok_or("--term-days required (or pass --input / stdin JSON)")?;

    Ok(CertificateInput {
        principal,
        annual_rate_pct: rate.unwrap_or(DEFAULT_CERTIFICATE_RATE),
        term_days,
    })
}
