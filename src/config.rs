use crate::error::ConfigError;
use crate::state::{ApprovalAction, VendingAction};
use crate::strategy::{PaymentKind, SortKind};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming a demo script when no path is passed.
pub const CONFIG_ENV: &str = "PATTERNS_CONFIG";

/// A demo script. Every section is optional; the defaults replay the
/// classic textbook sequences.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub console: ConsoleConfig,
    pub sort: SortConfig,
    pub payment: PaymentConfig,
    pub vending: VendingConfig,
    pub approval: ApprovalConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    pub color: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortConfig {
    pub input: Vec<i32>,
    /// Bound in order; the first one is the sorter's initial strategy.
    pub strategies: Vec<SortKind>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            input: vec![5, 2, 8, 1, 7],
            strategies: vec![SortKind::Bubble, SortKind::Quick],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Charge {
    pub method: PaymentKind,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaymentConfig {
    pub charges: Vec<Charge>,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            charges: vec![
                Charge {
                    method: PaymentKind::CreditCard,
                    amount: 50.0,
                },
                Charge {
                    method: PaymentKind::PayPal,
                    amount: 30.0,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VendingConfig {
    pub actions: Vec<VendingAction>,
}

impl Default for VendingConfig {
    fn default() -> Self {
        Self {
            actions: vec![
                VendingAction::InsertCoin,
                VendingAction::DispenseItem,
                VendingAction::EjectCoin,
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApprovalConfig {
    pub actions: Vec<ApprovalAction>,
    /// Print "Document is <state>" before the script and after every action.
    pub print_status: bool,
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self {
            actions: vec![
                ApprovalAction::Submit,
                ApprovalAction::Approve,
                ApprovalAction::Reject,
            ],
            print_status: true,
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading demo script");
        Self::from_toml_str(&content)
    }

    /// Loads `path` if given, else the file named by `PATTERNS_CONFIG`, else
    /// falls back to the defaults.
    pub fn from_env_or_default(path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
        match path {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Both strategy contexts need something to bind at construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sort.strategies.is_empty() {
            return Err(ConfigError::invalid("sort", "at least one strategy is required"));
        }
        if self.payment.charges.is_empty() {
            return Err(ConfigError::invalid("payment", "at least one charge is required"));
        }
        Ok(())
    }
}
