use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the pattern library.
///
/// Rejected state transitions are not errors: the state handlers answer them
/// with a message and leave the context untouched.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("unknown {kind} strategy: '{name}'")]
    UnknownStrategy { kind: &'static str, name: String },

    #[error("unknown {kind} action: '{name}'")]
    UnknownAction { kind: &'static str, name: String },

    #[error("payment amount must be a finite number, got {0}")]
    InvalidAmount(f64),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PatternError {
    pub fn unknown_strategy(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownStrategy {
            kind,
            name: name.into(),
        }
    }

    pub fn unknown_action(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownAction {
            kind,
            name: name.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read demo script {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse demo script: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid [{section}] section: {reason}")]
    Invalid { section: &'static str, reason: String },
}

impl ConfigError {
    pub fn invalid(section: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            section,
            reason: reason.into(),
        }
    }
}

/// Tag names are matched case-insensitively, ignoring `_`/`-`/space.
pub(crate) fn normalize_tag(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tag() {
        assert_eq!(normalize_tag(" Credit-Card "), "creditcard");
        assert_eq!(normalize_tag("QUICK_sort"), "quicksort");
        assert_eq!(normalize_tag("pay pal"), "paypal");
    }

    #[test]
    fn test_error_messages() {
        let err = PatternError::unknown_strategy("sort", "heap");
        assert_eq!(err.to_string(), "unknown sort strategy: 'heap'");

        let err = PatternError::unknown_action("vending", "kick");
        assert_eq!(err.to_string(), "unknown vending action: 'kick'");

        let err = PatternError::InvalidAmount(f64::NAN);
        assert_eq!(err.to_string(), "payment amount must be a finite number, got NaN");
    }

    #[test]
    fn test_config_error_converts() {
        let parse_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
        let err: PatternError = ConfigError::from(parse_err).into();
        assert!(matches!(err, PatternError::Config(ConfigError::Parse(_))));
        assert!(err.to_string().starts_with("failed to parse demo script"));
    }
}
