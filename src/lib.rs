//! # Behavioral Patterns: Strategy and State
//!
//! This crate contains runnable examples of the two behavioral patterns that
//! swap behaviour at runtime.
//!
//! ## Patterns Covered
//!
//! 1. **Strategy** - A context delegates one operation to whichever algorithm
//!    is currently bound (sorting, payment processing)
//! 2. **State** - A context delegates every operation to its current state,
//!    which may replace that state (vending machine, document approval)
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin strategy_demo
//! cargo run --bin state_demo
//!
//! # Drive a demo from a TOML script instead of the built-in sequence
//! cargo run --bin state_demo -- demo.toml
//! PATTERNS_CONFIG=demo.toml cargo run --bin strategy_demo
//!
//! # See every bind and transition
//! RUST_LOG=behavioral_patterns=debug cargo run --bin state_demo
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Error enum for the library
//! - `serde` + `toml` - Demo scripts
//! - `colored` - Console headings
//! - `tracing` - Structured events for binds and transitions

pub mod config;
pub mod console;
pub mod demo;
pub mod error;
pub mod logging;
pub mod state;
pub mod strategy;

pub use config::DemoConfig;
pub use console::{Console, MessageSink, Transcript};
pub use error::{ConfigError, PatternError};
