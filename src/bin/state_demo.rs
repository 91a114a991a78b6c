//! State pattern demo: vending machine and document approval workflow.
//!
//! Run with: cargo run --bin state_demo [-- demo.toml]

use anyhow::{Context, Result};
use behavioral_patterns::{demo, logging, Console, DemoConfig};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    logging::init();

    let path = env::args_os().nth(1).map(PathBuf::from);
    let config = DemoConfig::from_env_or_default(path).context("could not load demo script")?;
    let mut console = Console::new(config.console.color);

    console.heading("State: vending machine");
    let machine = demo::run_vending(&config.vending, &mut console);
    tracing::info!(final_state = %machine, "vending demo finished");

    println!();
    console.heading("State: document approval");
    let document = demo::run_approval(&config.approval, &mut console);
    tracing::info!(
        final_state = %document,
        terminal = document.is_terminal(),
        "approval demo finished"
    );

    Ok(())
}
