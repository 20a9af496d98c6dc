use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable read for the log filter when `--log-level` is absent.
pub const LOG_ENV_VAR: &str = "PO_SUMMARY_LOG";

/// Install the stderr logger. Warnings are shown by default so per-file
/// failures reach the operator; stdout carries only the summary.
pub fn setup_logger(level: Option<&str>) {
    let env_filter = match level {
        Some(directives) => EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .parse_lossy(directives),
        None => EnvFilter::builder()
            .with_default_directive(LevelFilter::WARN.into())
            .with_env_var(LOG_ENV_VAR)
            .from_env_lossy(),
    };

    let fmt = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    // A subscriber may already be set when embedded in tests.
    let _ = tracing_subscriber::registry()
        .with(fmt)
        .with(env_filter)
        .try_init();
}
