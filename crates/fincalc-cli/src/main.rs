mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::certificate::{CertificateInterestArgs, CertificateScheduleArgs};
use commands::loan::{LoanPaymentArgs, LoanScheduleArgs};

/// Savings-and-loan product calculations
#[derive(Parser)]
#[command(
    name = "fincalc",
    version,
    about = "Savings-and-loan product calculations",
    long_about = "A CLI for loan and deposit certificate calculations with decimal \
                  precision. Computes level-payment amortization schedules, monthly \
                  payment quotes, 360-day certificate accrual schedules, and total \
                  certificate interest."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Full loan amortization schedule
    LoanSchedule(LoanScheduleArgs),
    /// Level monthly payment for a fixed-rate loan
    LoanPayment(LoanPaymentArgs),
    /// Certificate accrual schedule in 30-day buckets
    CertificateSchedule(CertificateScheduleArgs),
    /// Total simple interest earned by a certificate (360-day year)
    CertificateInterest(CertificateInterestArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::LoanSchedule(args) => commands::loan::run_schedule(args),
        Commands::LoanPayment(args) => commands::loan::run_payment(args),
        Commands::CertificateSchedule(args) => commands::certificate::run_schedule(args),
        Commands::CertificateInterest(args) => commands::certificate::run_interest(args),
        Commands::Version => {
            println!("fincalc {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
