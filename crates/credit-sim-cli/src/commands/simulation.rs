use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use credit_sim_core::rates::RateSource;
use credit_sim_core::simulation::{SimulationInput, Simulator};

use crate::input::{self, RequestError};

/// Loan description shared by `simulate` and `schedule`
#[derive(Args)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long, alias = "loan-amount", allow_hyphen_values = true)]
    pub principal: Option<Decimal>,

    /// Number of monthly installments
    #[arg(long, alias = "term")]
    pub term_months: Option<u32>,

    /// Borrower birth date (YYYY-MM-DD); selects the age-bracket rate
    #[arg(long, conflicts_with = "annual_rate")]
    pub birth_date: Option<NaiveDate>,

    /// Explicit annual rate as a decimal (0.035 = 3.5%); bypasses the age table
    #[arg(long, alias = "rate", allow_hyphen_values = true)]
    pub annual_rate: Option<Decimal>,

    /// Measure borrower age as of this date instead of today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

/// Arguments for a single loan simulation
#[derive(Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

/// Arguments for an amortization schedule
#[derive(Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

/// Arguments for a batch of simulations
#[derive(Args)]
pub struct BatchArgs {
    /// Path to a JSON array of loans
    #[arg(long)]
    pub input: Option<String>,

    /// Report per-item failures instead of aborting on the first one
    #[arg(long)]
    pub keep_going: bool,

    /// Measure borrower ages as of this date instead of today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = read_loan(&args.loan)?;
    let result = simulator(args.loan.as_of).analyze(&loan)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan = read_loan(&args.loan)?;
    let result = simulator(args.loan.as_of).analyze_schedule(&loan)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_batch(args: BatchArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loans: Vec<SimulationInput> = input::read_request(args.input.as_deref())?
        .ok_or_else(|| {
            RequestError("--input <file.json> or stdin required for batch simulation".into())
        })?;

    let sim = simulator(args.as_of);
    if args.keep_going {
        Ok(serde_json::to_value(sim.analyze_batch_isolated(&loans))?)
    } else {
        Ok(serde_json::to_value(sim.analyze_batch(&loans)?)?)
    }
}

fn simulator(as_of: Option<NaiveDate>) -> Simulator {
    as_of.map(Simulator::as_of).unwrap_or_default()
}

fn read_loan(args: &LoanArgs) -> Result<SimulationInput, Box<dyn std::error::Error>> {
    if let Some(loan) = input::read_request(args.input.as_deref())? {
        return Ok(loan);
    }

    let principal = args
        .principal
        .ok_or_else(|| RequestError("--principal is required (or provide --input)".into()))?;
    let term_months = args
        .term_months
        .ok_or_else(|| RequestError("--term-months is required (or provide --input)".into()))?;
    let rate_source = match (args.birth_date, args.annual_rate) {
        (Some(birth_date), None) => RateSource::BirthDate(birth_date),
        (None, Some(rate)) => RateSource::AnnualRate(rate),
        _ => {
            return Err(RequestError(
                "exactly one of --birth-date or --annual-rate is required".into(),
            )
            .into())
        }
    };

    Ok(SimulationInput {
        principal,
        term_months,
        rate_source,
    })
}
