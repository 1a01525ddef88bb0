use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use financing_core::annuity::pmt;
use financing_core::cash_flow::{build_cash_flow, total_inflow};
use financing_core::rates::RateTable;

/// Arguments for the standalone annuity calculator
#[derive(Args)]
pub struct PmtArgs {
    /// Periodic rate in percent (e.g. 0.87)
    #[arg(long)]
    pub rate: Decimal,

    /// Number of periods
    #[arg(long)]
    pub periods: u32,

    /// Present value to amortize
    #[arg(long, allow_hyphen_values = true)]
    pub present_value: Decimal,
}

pub fn run_pmt(args: PmtArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let installment = pmt(args.rate, args.periods, args.present_value);
    Ok(json!({
        "result": {
            "installment": installment,
            "total_paid": installment * Decimal::from(args.periods),
        }
    }))
}

/// Arguments for the standalone cash-flow builder
#[derive(Args)]
pub struct CashFlowArgs {
    /// Amount received at period 0
    #[arg(long, default_value = "0")]
    pub entry: Decimal,

    /// Amount received per period after period 0
    #[arg(long, default_value = "0")]
    pub installment: Decimal,

    /// Number of installment periods
    #[arg(long)]
    pub periods: u32,

    /// Cost fronted by the business at period 0
    #[arg(long)]
    pub upfront_cost: Decimal,
}

pub fn run_cash_flow(args: CashFlowArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rows = build_cash_flow(args.entry, args.installment, args.periods, args.upfront_cost);
    let total = total_inflow(&rows);
    let final_balance = rows.last().map(|r| r.cumulative);
    Ok(json!({
        "result": {
            "rows": rows,
            "total_inflow": total,
            "final_balance": final_balance,
        }
    }))
}

/// Arguments for printing the rate table
#[derive(Args)]
pub struct RatesArgs {
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

pub fn run_rates(args: RatesArgs) -> Result<Value, Box<dyn std::error::Error>> {
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
    Ok(json!({ "result": table }))
}
