//! Scripted demo sequences shared by the binaries.
//!
//! Each runner wires one context to the caller's sink, replays a section of a
//! [`DemoConfig`](crate::DemoConfig) against it and returns what the context
//! ended up with.

use crate::config::{ApprovalConfig, PaymentConfig, SortConfig, VendingConfig};
use crate::console::MessageSink;
use crate::error::{ConfigError, PatternError};
use crate::state::{ApprovalState, Document, VendingMachine, VendingState};
use crate::strategy::{PaymentProcessor, Receipt, Sorter};

/// Sorts the configured input once per configured strategy, rebinding the
/// sorter before each run. Returns the sorted list.
pub fn run_sort<S: MessageSink>(
    config: &SortConfig,
    sink: &mut S,
) -> Result<Vec<i32>, PatternError> {
    let (first, rest) = config
        .strategies
        .split_first()
        .ok_or_else(|| ConfigError::invalid("sort", "at least one strategy is required"))?;

    let mut items = config.input.clone();
    let mut sorter = Sorter::new(first.into_strategy(), sink);
    sorter.sort(&mut items);

    for kind in rest {
        sorter.set_strategy(kind.into_strategy());
        sorter.sort(&mut items);
    }
    Ok(items)
}

/// Charges every configured amount through its payment method.
pub fn run_payment<S: MessageSink>(
    config: &PaymentConfig,
    sink: &mut S,
) -> Result<Vec<Receipt>, PatternError> {
    let first = config
        .charges
        .first()
        .ok_or_else(|| ConfigError::invalid("payment", "at least one charge is required"))?;

    let mut processor = PaymentProcessor::new(first.method.into_strategy(), sink);
    let mut receipts = Vec::with_capacity(config.charges.len());
    for (i, charge) in config.charges.iter().enumerate() {
        if i > 0 {
            processor.set_payment_strategy(charge.method.into_strategy());
        }
        receipts.push(processor.process_payment(charge.amount)?);
    }
    Ok(receipts)
}

pub fn run_vending<S: MessageSink>(config: &VendingConfig, sink: &mut S) -> VendingState {
    let mut machine = VendingMachine::new(sink);
    for action in &config.actions {
        machine.perform(*action);
    }
    machine.state()
}

pub fn run_approval<S: MessageSink>(config: &ApprovalConfig, sink: &mut S) -> ApprovalState {
    let mut document = Document::new(sink);
    if config.print_status {
        document.print_status();
    }
    for action in &config.actions {
        document.perform(*action);
        if config.print_status {
            document.print_status();
        }
    }
    document.state()
}
