//! Bootstrap layer: runs before the admin interface starts.
//!
//! - **logger**: tracing-subscriber initialisation.
//! - [`start`]: resolve the deploy mode, build the admin config and refuse
//!   to continue with a placeholder secret in production.

pub mod logger;

use tracing::{info, warn};

use crate::config::{ADMIN_JWT_SECRET, ConfigBuilder, DeployMode, Environment, ResolvedConfig};
use crate::error::AppError;

/// Resolve everything the admin interface needs from `env`.
pub fn start<E: Environment + ?Sized>(env: &E) -> Result<(ResolvedConfig, DeployMode), AppError> {
    let mode = DeployMode::from_env(env)?;
    let config = ConfigBuilder::new(env).build();
    verify(&config, mode)?;

    info!(
        mode = %mode,
        url = %config.url,
        secret_source = ?config.auth.secret_source,
        "admin config resolved"
    );
    Ok((config, mode))
}

/// Check security-sensitive fields before the interface is started.
///
/// A placeholder secret is fatal in production and a warning in development.
pub fn verify(config: &ResolvedConfig, mode: DeployMode) -> Result<(), AppError> {
    if !config.secret_is_degraded() {
        return Ok(());
    }
    if mode.is_production() {
        return Err(AppError::InsecureSecret {
            key: ADMIN_JWT_SECRET.to_string(),
        });
    }
    warn!(
        key = ADMIN_JWT_SECRET,
        "admin secret not set; using placeholder (development only)"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{APP_ENV, EnvSnapshot};

    #[test]
    fn production_rejects_placeholder() {
        let env = EnvSnapshot::from_pairs([(APP_ENV, "production")]);
        let err = start(&env).unwrap_err();
        assert!(matches!(err, AppError::InsecureSecret { ref key } if key == ADMIN_JWT_SECRET));
    }

    #[test]
    fn production_rejects_empty_secret() {
        let env = EnvSnapshot::from_pairs([(APP_ENV, "production"), (ADMIN_JWT_SECRET, "")]);
        assert!(start(&env).is_err());
    }

    #[test]
    fn production_rejects_literal_placeholder() {
        let env = EnvSnapshot::from_pairs([
            (APP_ENV, "production"),
            (ADMIN_JWT_SECRET, "<encoded-string>"),
        ]);
        assert!(start(&env).is_err());
    }

    #[test]
    fn production_accepts_real_secret() {
        let env = EnvSnapshot::from_pairs([(APP_ENV, "production"), (ADMIN_JWT_SECRET, "s3cr3t")]);
        let (cfg, mode) = start(&env).unwrap();
        assert_eq!(mode, DeployMode::Production);
        assert_eq!(cfg.auth.secret.expose(), "s3cr3t");
    }

    #[test]
    fn development_tolerates_placeholder() {
        let (cfg, mode) = start(&EnvSnapshot::default()).unwrap();
        assert_eq!(mode, DeployMode::Development);
        assert!(cfg.secret_is_degraded());
        assert_eq!(cfg.url, "/dashboard");
    }

    #[test]
    fn bad_mode_fails_before_build() {
        let env = EnvSnapshot::from_pairs([(APP_ENV, "qa")]);
        assert!(matches!(start(&env), Err(AppError::Config(_))));
    }
}
