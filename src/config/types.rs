//! Public configuration types handed to the admin bootstrapper.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::AppError;

use super::env::ValueSource;

/// Placeholder used for the token secret when the operator supplies none.
/// Never safe to run with outside development.
pub const PLACEHOLDER_SECRET: &str = "<encoded-string>";

/// Mount path of the admin interface.
pub const DEFAULT_MOUNT_PATH: &str = "/dashboard";

const REDACTED: &str = "[redacted]";

/// Token signing secret. `Debug` and `Serialize` print a redaction marker;
/// the raw value is only available through [`AuthSecret::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct AuthSecret(String);

impl AuthSecret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// `true` if the value is the compiled-in placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.0 == PLACEHOLDER_SECRET
    }
}

impl fmt::Debug for AuthSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthSecret({REDACTED})")
    }
}

impl Serialize for AuthSecret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTED)
    }
}

/// Slash-prefixed path the admin interface is mounted under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MountPath(String);

impl MountPath {
    /// Validate and wrap a mount path.
    ///
    /// Must start with a single `/` and contain no whitespace. Absolute URLs
    /// and protocol-relative `//host` forms are rejected.
    pub fn new(path: impl Into<String>) -> Result<Self, AppError> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(AppError::Config(format!(
                "mount path must start with '/': {path:?}"
            )));
        }
        if path.starts_with("//") {
            return Err(AppError::Config(format!(
                "mount path must be relative, not protocol-relative: {path:?}"
            )));
        }
        if path.chars().any(char::is_whitespace) {
            return Err(AppError::Config(format!(
                "mount path must not contain whitespace: {path:?}"
            )));
        }
        Ok(Self(path))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MountPath {
    fn default() -> Self {
        Self(DEFAULT_MOUNT_PATH.to_string())
    }
}

impl fmt::Display for MountPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for MountPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Authentication settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthConfig {
    pub secret: AuthSecret,
    /// How `secret` was resolved.
    pub secret_source: ValueSource,
}

/// Fully-resolved admin configuration.
///
/// Serializes as `{ "auth": { "secret": "[redacted]", "secret_source": .. }, "url": .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    pub auth: AuthConfig,
    pub url: MountPath,
}

impl ResolvedConfig {
    /// `true` when the secret is not operator-supplied.
    pub fn secret_is_degraded(&self) -> bool {
        self.auth.secret_source == ValueSource::Fallback || self.auth.secret.is_placeholder()
    }
}
