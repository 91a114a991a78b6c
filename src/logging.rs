use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset. Keeps stdout identical to the plain
/// demo transcript.
pub const DEFAULT_FILTER: &str = "behavioral_patterns=warn";

/// Installs a stderr subscriber filtered by `RUST_LOG`. Safe to call twice;
/// the second call is a no-op.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init();
}
