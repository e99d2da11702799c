//! Application-wide error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    /// A security-sensitive key resolved to its placeholder fallback.
    #[error("insecure config: {key} is unset or empty, refusing to start with the placeholder secret")]
    InsecureSecret { key: String },

    #[error("logger error: {0}")]
    Logger(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
