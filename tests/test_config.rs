//! End-to-end resolution through the public API: snapshot -> builder -> bootstrap.

use std::io::Write;

use admin_config::bootstrap;
use admin_config::config::{
    ADMIN_JWT_SECRET, APP_ENV, ConfigBuilder, EnvSnapshot, Environment, PLACEHOLDER_SECRET,
    ValueSource, resolve,
};
use admin_config::error::AppError;
use tempfile::NamedTempFile;

#[test]
fn secret_set_in_env() {
    let env = EnvSnapshot::from_pairs([(ADMIN_JWT_SECRET, "s3cr3t")]);
    assert_eq!(ConfigBuilder::new(&env).build().auth.secret.expose(), "s3cr3t");
}

#[test]
fn secret_missing_from_env() {
    let env = EnvSnapshot::default();
    assert_eq!(
        ConfigBuilder::new(&env).build().auth.secret.expose(),
        "<encoded-string>"
    );
}

#[test]
fn secret_empty_in_env_falls_back() {
    let env = EnvSnapshot::from_pairs([(ADMIN_JWT_SECRET, "")]);
    let cfg = ConfigBuilder::new(&env).build();
    assert_eq!(cfg.auth.secret.expose(), PLACEHOLDER_SECRET);
    assert_eq!(cfg.auth.secret_source, ValueSource::Fallback);
}

#[test]
fn url_is_dashboard() {
    for env in [
        EnvSnapshot::default(),
        EnvSnapshot::from_pairs([(ADMIN_JWT_SECRET, "s3cr3t"), ("ADMIN_URL", "/other")]),
    ] {
        assert_eq!(ConfigBuilder::new(&env).build().url.as_str(), "/dashboard");
    }
}

#[test]
fn resolve_matches_lookup_rule() {
    let env = EnvSnapshot::from_pairs([("SET", "value"), ("EMPTY", "")]);
    for (key, fallback, expected) in [
        ("SET", "fb", "value"),
        ("EMPTY", "fb", "fb"),
        ("MISSING", "fb", "fb"),
        ("MISSING", "", ""),
    ] {
        assert_eq!(resolve(&env, key, fallback), expected, "key {key}");
    }
}

#[test]
fn dotenv_file_sits_under_process_env() {
    let mut f = NamedTempFile::new().unwrap();
    writeln!(f, "ADMIN_CONFIG_IT_ONLY=from-file").unwrap();
    writeln!(f, "PATH=from-file").unwrap();

    let env = EnvSnapshot::load(Some(f.path())).unwrap();
    assert_eq!(env.var("ADMIN_CONFIG_IT_ONLY"), Some("from-file"));
    if let Ok(path) = std::env::var("PATH") {
        assert_eq!(env.var("PATH"), Some(path.as_str()));
    }
}

#[test]
fn malformed_dotenv_file_errors() {
    let mut f = NamedTempFile::new().unwrap();
    writeln!(f, "NOT A VALID LINE").unwrap();
    assert!(matches!(EnvSnapshot::load(Some(f.path())), Err(AppError::Config(_))));
}

#[test]
fn production_without_secret_refuses_to_start() {
    let env = EnvSnapshot::from_pairs([(APP_ENV, "production")]);
    let err = bootstrap::start(&env).unwrap_err();
    assert!(err.to_string().contains(ADMIN_JWT_SECRET));
}

#[test]
fn redacted_json_never_contains_secret() {
    let env = EnvSnapshot::from_pairs([(ADMIN_JWT_SECRET, "s3cr3t")]);
    let json = serde_json::to_string(&ConfigBuilder::new(&env).build()).unwrap();
    assert!(!json.contains("s3cr3t"));
    assert!(json.contains("\"url\":\"/dashboard\""));
}
