//! Strategy pattern demo: sorting and payment processing.
//!
//! Run with: cargo run --bin strategy_demo [-- demo.toml]

use anyhow::{Context, Result};
use behavioral_patterns::{demo, logging, Console, DemoConfig, MessageSink};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    logging::init();

    let path = env::args_os().nth(1).map(PathBuf::from);
    let config = DemoConfig::from_env_or_default(path).context("could not load demo script")?;
    let mut console = Console::new(config.console.color);

    console.heading("Strategy: sorting");
    let sorted = demo::run_sort(&config.sort, &mut console).context("sorting demo failed")?;
    console.emit(&format!("Sorted: {sorted:?}"));

    println!();
    console.heading("Strategy: payment processing");
    let receipts =
        demo::run_payment(&config.payment, &mut console).context("payment demo failed")?;
    let total: f64 = receipts.iter().map(|r| r.amount).sum();
    tracing::info!(charges = receipts.len(), total, "payments processed");

    Ok(())
}
