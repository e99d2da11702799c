//! Admin configuration resolution.
//!
//! Values come from an explicit [`EnvSnapshot`] captured once at startup,
//! falling back to compiled-in defaults.
//!
//! # Module layout
//!
//! - **env**: `EnvSnapshot`, the `Environment` trait and `resolve`.
//! - **types**: Public record types (`ResolvedConfig`, `AuthSecret`,
//!   `MountPath`).
//! - **builder**: `ConfigBuilder`, which assembles `ResolvedConfig`.
//! - **mode**: `DeployMode` from `APP_ENV`.

mod builder;
mod env;
mod mode;
mod types;

pub use builder::{ADMIN_JWT_SECRET, ConfigBuilder};
pub use env::{EnvSnapshot, Environment, Resolution, ValueSource, resolve, resolve_with_source};
pub use mode::{APP_ENV, DeployMode};
pub use types::*;

/// Log level override, read by the binary before the subscriber starts.
pub const ADMIN_LOG_LEVEL: &str = "ADMIN_LOG_LEVEL";
