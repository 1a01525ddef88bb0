mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::primitives::{CashFlowArgs, PmtArgs, RatesArgs};
use commands::simulate::SimulateArgs;

/// Commercial financing condition simulator
#[derive(Parser)]
#[command(
    name = "finsim",
    version,
    about = "Commercial financing condition simulator",
    long_about = "Derives a menu of mutually-exclusive payment/financing conditions \
                  (cash, staged profit, price table, leasing, custom) from a service's \
                  cost and desired margin, with a cash-flow projection per condition, \
                  using decimal precision throughout."
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
    /// Run the full financing simulation for one service
    Simulate(SimulateArgs),
    /// Fixed amortizing installment for a present value (annuity)
    Pmt(PmtArgs),
    /// Cash-flow projection for an arbitrary plan shape
    CashFlow(CashFlowArgs),
    /// Show the correction-index rate table in effect
    Rates(RatesArgs),
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
        Commands::Simulate(args) => commands::simulate::run_simulate(args),
        Commands::Pmt(args) => commands::primitives::run_pmt(args),
        Commands::CashFlow(args) => commands::primitives::run_cash_flow(args),
        Commands::Rates(args) => commands::primitives::run_rates(args),
        Commands::Version => {
            println!("finsim {}", env!("CARGO_PKG_VERSION"));
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
