//! Assembles [`ResolvedConfig`] from an environment.

use tracing::debug;

use super::env::{Environment, resolve_with_source};
use super::types::{AuthConfig, AuthSecret, MountPath, PLACEHOLDER_SECRET, ResolvedConfig};

/// Variable holding the admin token signing secret.
pub const ADMIN_JWT_SECRET: &str = "ADMIN_JWT_SECRET";

/// Builds the admin config from an explicit environment.
///
/// The mount path is not read from the environment; hosts that mount the
/// interface elsewhere set it with [`ConfigBuilder::mount_path`].
pub struct ConfigBuilder<'a, E: Environment + ?Sized> {
    env: &'a E,
    mount_path: MountPath,
}

impl<'a, E: Environment + ?Sized> ConfigBuilder<'a, E> {
    pub fn new(env: &'a E) -> Self {
        Self {
            env,
            mount_path: MountPath::default(),
        }
    }

    pub fn mount_path(mut self, path: MountPath) -> Self {
        self.mount_path = path;
        self
    }

    /// Resolve every field. Same environment in, same config out.
    pub fn build(&self) -> ResolvedConfig {
        let secret = resolve_with_source(self.env, ADMIN_JWT_SECRET, PLACEHOLDER_SECRET);
        debug!(key = ADMIN_JWT_SECRET, source = ?secret.source, "resolved admin secret");

        ResolvedConfig {
            auth: AuthConfig {
                secret: AuthSecret::new(secret.value),
                secret_source: secret.source,
            },
            url: self.mount_path.clone(),
        }
    }
}
