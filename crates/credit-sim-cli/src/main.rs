mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::simulation::{BatchArgs, ScheduleArgs, SimulateArgs};
use credit_sim_core::CreditSimError;
use input::RequestError;

/// Loan simulations with decimal precision
#[derive(Parser)]
#[command(
    name = "csim",
    version,
    about = "Loan simulations with decimal precision",
    long_about = "A CLI for simulating fixed-rate loans. Resolves the annual rate from the \
                  borrower's age bracket (or an explicit override), then computes the level \
                  monthly installment, total interest and total amount payable, rounded \
                  half-up to cents."
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
    /// Simulate a single loan
    Simulate(SimulateArgs),
    /// Period-by-period amortization schedule for a single loan
    Schedule(ScheduleArgs),
    /// Simulate a JSON array of loans
    Batch(BatchArgs),
    /// Print the age-bracket rate table
    Rates,
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

/// Exit status for caller mistakes: bad flags, bad JSON, inputs the policy rejects.
const EXIT_CALLER_ERROR: i32 = 2;
/// Exit status when the engine itself could not complete.
const EXIT_FAILURE: i32 = 1;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Simulate(args) => commands::simulation::run_simulate(args),
        Commands::Schedule(args) => commands::simulation::run_schedule(args),
        Commands::Batch(args) => commands::simulation::run_batch(args),
        Commands::Rates => commands::rates::run_rates(),
        Commands::Version => {
            println!("csim {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(exit_code(e.as_ref()));
        }
    }
}

fn exit_code(e: &(dyn std::error::Error + 'static)) -> i32 {
    if let Some(sim_err) = e.downcast_ref::<CreditSimError>() {
        return if sim_err.is_caller_error() {
            EXIT_CALLER_ERROR
        } else {
            EXIT_FAILURE
        };
    }
    if e.is::<RequestError>() {
        EXIT_CALLER_ERROR
    } else {
        EXIT_FAILURE
    }
}
