//! Debt Payoff CLI - compare snowball and avalanche payoff plans
//!
//! Reads debt records as JSON and prints simulation results as JSON.
//!
//! # Quick Start
//!
//! ```bash
//! # Compare both methods with 5000 extra a month
//! debt-payoff compare --debts debts.json --extra 5000
//!
//! # One method, with the full month-by-month ledger
//! debt-payoff simulate --debts debts.json --extra 5000 --policy avalanche --ledger
//!
//! # Totals only
//! debt-payoff summary --debts debts.json
//! ```
//!
//! Set `RUST_LOG=debug` to see per-run diagnostics on stderr.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use debt_payoff_core_rs::{
    AmortizationSimulator, ComparatorConfig, Policy, PolicyComparator, PortfolioSummary,
    SimulationConfig, DEFAULT_PERIOD_CAP,
};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod input;

/// Debt payoff planner
#[derive(Parser)]
#[command(name = "debt-payoff")]
#[command(version)]
#[command(about = "Simulate snowball and avalanche debt payoff plans", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one payoff policy
    Simulate {
        #[command(flatten)]
        input: InputArgs,

        /// Payoff policy: snowball or avalanche
        #[arg(long, short)]
        policy: Policy,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Simulate both policies and compare them
    Compare {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        run: RunArgs,

        /// Run both simulations concurrently
        #[arg(long)]
        parallel: bool,
    },

    /// Print portfolio totals without simulating
    Summary {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// JSON file with an array of debt records ("-" for stdin)
    #[arg(long, short)]
    debts: PathBuf,

    /// Extra monthly payment on top of all minimums
    #[arg(long, short, env = "DEBT_PAYOFF_EXTRA", default_value = "0")]
    extra: Decimal,
}

#[derive(Args)]
struct RunArgs {
    /// Maximum number of months to simulate
    #[arg(long, env = "DEBT_PAYOFF_CAP", default_value_t = DEFAULT_PERIOD_CAP)]
    cap: u32,

    /// Include the month-by-month ledger in the output
    #[arg(long)]
    ledger: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = run(cli.command)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to render output")?
    );
    Ok(())
}

fn run(command: Commands) -> Result<Value> {
    match command {
        Commands::Simulate { input, policy, run } => {
            let debts = input::load_debts(&input.debts)?;
            let simulator = AmortizationSimulator::new(SimulationConfig { period_cap: run.cap })?;
            let result = simulator
                .simulate(&debts, input.extra, policy)
                .with_context(|| format!("Simulation failed for {}", policy.method_name()))?;

            let fingerprint = result.fingerprint()?;
            let mut value = serde_json::to_value(&result)?;
            if !run.ledger {
                strip_ledgers(&mut value);
            }
            Ok(json!({
                "method": policy.method_name(),
                "result": value,
                "fingerprint": fingerprint,
            }))
        }

        Commands::Compare {
            input,
            run,
            parallel,
        } => {
            let debts = input::load_debts(&input.debts)?;
            let comparator = PolicyComparator::new(ComparatorConfig {
                simulation: SimulationConfig { period_cap: run.cap },
                parallel,
            })?;
            let comparison = comparator
                .compare(&debts, input.extra)
                .context("Comparison failed")?;

            let fingerprints = json!({
                "snowball": comparison.snowball.fingerprint()?,
                "avalanche": comparison.avalanche.fingerprint()?,
            });
            let mut value = serde_json::to_value(&comparison)?;
            if !run.ledger {
                strip_ledgers(&mut value);
            }
            if let Value::Object(map) = &mut value {
                map.insert("fingerprints".to_string(), fingerprints);
            }
            Ok(value)
        }

        Commands::Summary { input } => {
            let debts = input::load_debts(&input.debts)?;
            let summary = PortfolioSummary::from_debts(&debts, input.extra)?;
            Ok(serde_json::to_value(summary)?)
        }
    }
}

/// Remove every "ledger" field, at any depth
fn strip_ledgers(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.remove("ledger");
            map.values_mut().for_each(strip_ledgers);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_ledgers),
        _ => {}
    }
}
