use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use financing_core::rates::{CorrectionIndex, RateTable};
use financing_core::simulation;
use financing_core::types::SimInputs;

use crate::input;

/// Arguments for the full financing simulation
#[derive(Args)]
pub struct SimulateArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Unit cost of the service
    #[arg(long)]
    pub cost: Option<Decimal>,

    /// Desired profit margin in percent (below 100)
    #[arg(long)]
    pub margin: Option<Decimal>,

    /// Number of units
    #[arg(long, default_value_t = 1)]
    pub quantity: u32,

    /// Correction index: cdi, igpm, incc or fixed
    #[arg(long, default_value = "cdi")]
    pub index: String,

    /// Periodic rate in percent, used with --index fixed
    #[arg(long, default_value = "0")]
    pub rate: Decimal,

    /// At-sight discount in percent of gross profit
    #[arg(long, default_value = "0")]
    pub discount: Decimal,

    /// Leasing spread in percent per period
    #[arg(long, default_value = "0")]
    pub leasing_spread: Decimal,

    /// Requested entry for the custom plan
    #[arg(long, default_value = "0")]
    pub custom_entry: Decimal,

    /// Installment count for the custom plan
    #[arg(long, default_value_t = 12)]
    pub custom_installments: u32,

    /// Minimum custom entry as percent of total cost
    #[arg(long, default_value = "50")]
    pub entry_floor: Decimal,

    /// Override the CDI periodic rate (percent)
    #[arg(long)]
    pub cdi_rate: Option<Decimal>,

    /// Override the IGP-M periodic rate (percent)
    #[arg(long)]
    pub igpm_rate: Option<Decimal>,

    /// Override the INCC periodic rate (percent)
    #[arg(long)]
    pub incc_rate: Option<Decimal>,
}

fn parse_index(name: &str) -> Result<CorrectionIndex, Box<dyn std::error::Error>> {
    match name.to_ascii_lowercase().as_str() {
        "cdi" => Ok(CorrectionIndex::Cdi),
        "igpm" => Ok(CorrectionIndex::Igpm),
        "incc" => Ok(CorrectionIndex::Incc),
        "fixed" => Ok(CorrectionIndex::Fixed),
        other => Err(format!("Unknown correction index '{other}' (expected cdi, igpm, incc or fixed)").into()),
    }
}

fn rate_table(args: &SimulateArgs) -> RateTable {
    let mut table = RateTable::default();
    if let Some(cdi) = args.cdi_rate {
        table.cdi = cdi;
    }
    if let Some(igpm) = args.igpm_rate {
        table.igpm = igpm;
    }
    if let Some(incc) = args.incc_rate {
        table.incc = incc;
    }
    table
}

pub fn run_simulate(args: SimulateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let table = rate_table(&args);

    let sim_inputs: SimInputs = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let cost = args.cost.ok_or("--cost is required (or provide --input)")?;
        let margin = args
            .margin
            .ok_or("--margin is required (or provide --input)")?;

        SimInputs {
            operational_cost: cost,
            profit_margin: margin,
            quantity: args.quantity,
            correction_index: parse_index(&args.index)?,
            custom_rate: args.rate,
            at_sight_discount: args.discount,
            leasing_spread: args.leasing_spread,
            custom_entry: args.custom_entry,
            custom_installments: args.custom_installments,
            entry_floor_pct: args.entry_floor,
        }
    };

    let result = simulation::simulate(&sim_inputs, &table)?;
    Ok(serde_json::to_value(result)?)
}
