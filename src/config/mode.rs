//! Deployment mode, read from `APP_ENV`.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

use super::env::{Environment, resolve};

pub const APP_ENV: &str = "APP_ENV";

/// Whether the process runs as a development instance or a production one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeployMode {
    #[default]
    Development,
    Production,
}

impl DeployMode {
    /// Read the mode from `APP_ENV`, defaulting to development when unset
    /// or empty.
    pub fn from_env<E: Environment + ?Sized>(env: &E) -> Result<Self, AppError> {
        resolve(env, APP_ENV, "development").parse()
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

impl FromStr for DeployMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(AppError::Config(format!(
                "unknown {APP_ENV} value '{s}' (expected development or production)"
            ))),
        }
    }
}

impl fmt::Display for DeployMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => f.write_str("development"),
            Self::Production => f.write_str("production"),
        }
    }
}
