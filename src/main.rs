//! admin-config: resolves the admin interface configuration and prints it.
//!
//! Startup sequence:
//!   1. Capture the environment (process env over an optional `.env`)
//!   2. Init logger from the captured environment
//!   3. Resolve deploy mode and admin config, reject placeholder secrets
//!      in production
//!   4. Print the redacted config as JSON and exit
//!
//! ```text
//! admin-config [--env-file <path>]
//! ```

use std::path::PathBuf;

use admin_config::{bootstrap, config::EnvSnapshot, error::AppError};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let Some(env_file) = parse_args()? else {
        return Ok(());
    };

    let env = EnvSnapshot::load(env_file.as_deref())?;
    bootstrap::logger::init(&env)?;

    let (config, _mode) = bootstrap::start(&env)?;

    let json = serde_json::to_string_pretty(&config)
        .map_err(|e| AppError::Config(format!("cannot serialize config: {e}")))?;
    println!("{json}");

    Ok(())
}

/// `Ok(None)` when `--help` was printed; otherwise the optional env file.
fn parse_args() -> Result<Option<Option<PathBuf>>, AppError> {
    let mut env_file = None;
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--env-file" => {
                let path = iter
                    .next()
                    .ok_or_else(|| AppError::Config("--env-file requires a path".into()))?;
                env_file = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                println!("usage: admin-config [--env-file <path>]");
                return Ok(None);
            }
            other => return Err(AppError::Config(format!("unknown argument: {other}"))),
        }
    }
    Ok(Some(env_file))
}
