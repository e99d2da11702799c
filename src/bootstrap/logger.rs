//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, after the environment snapshot is captured.
//! Filter directives come from the snapshot, not the live process env.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::{ADMIN_LOG_LEVEL, Environment};
use crate::error::AppError;

const RUST_LOG: &str = "RUST_LOG";
const DEFAULT_LEVEL: &str = "info";

/// Initialise the global tracing subscriber, writing to stderr.
///
/// Directive precedence: `ADMIN_LOG_LEVEL` (a single level), then
/// `RUST_LOG` (full directive syntax), then `info`. A value that does not
/// parse is skipped, so a bad filter never blocks startup.
pub fn init<E: Environment + ?Sized>(env: &E) -> Result<(), AppError> {
    let directives = filter_directives(env);
    let filter = EnvFilter::try_new(&directives)
        .map_err(|e| AppError::Logger(format!("invalid filter '{directives}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))?;

    Ok(())
}

fn filter_directives<E: Environment + ?Sized>(env: &E) -> String {
    let non_empty = |key: &str| env.var(key).filter(|v| !v.is_empty());
    if let Some(level) = non_empty(ADMIN_LOG_LEVEL).filter(|l| parse_level(l).is_ok()) {
        return level.to_ascii_lowercase();
    }
    if let Some(directives) = non_empty(RUST_LOG).filter(|d| EnvFilter::try_new(d).is_ok()) {
        return directives.to_string();
    }
    DEFAULT_LEVEL.to_string()
}

/// Parse a log level string into a [`LevelFilter`], returning an error on
/// unrecognised values.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}
