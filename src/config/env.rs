//! Environment snapshot and key resolution.
//!
//! The snapshot is captured once at startup and handed to callers explicitly;
//! nothing in this module reads the process environment after that point.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::AppError;

/// Read-only view of environment variables.
///
/// Implemented by [`EnvSnapshot`]; hosts with another configuration source
/// can implement it to feed [`resolve`] and the config builder directly.
pub trait Environment: Send + Sync {
    /// Value for `key`, or `None` if the variable is not set.
    fn var(&self, key: &str) -> Option<&str>;
}

/// Immutable, case-sensitive map of variable name -> value.
///
/// Keeps the distinction between an absent key and an empty value; the
/// resolver is what treats empty as unset.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment. Entries whose name or value
    /// is not valid UTF-8 are skipped.
    pub fn from_process() -> Self {
        let vars = env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Build a snapshot from explicit pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Capture the process environment layered over a dotenv file.
    ///
    /// `dotenv_path = None` looks for `.env` in the current directory and its
    /// parents and tolerates its absence. An explicit path must exist.
    pub fn load(dotenv_path: Option<&Path>) -> Result<Self, AppError> {
        let process = Self::from_process();
        let (found, shown) = match dotenv_path {
            Some(p) => (dotenvy::from_path_iter(p), p.display().to_string()),
            None => (dotenvy::from_filename_iter(".env"), ".env".to_string()),
        };
        match found.map_err(DotenvError::from).and_then(Self::from_dotenv) {
            Ok(file) => Ok(file.overlay(process)),
            Err(DotenvError::NotFound) if dotenv_path.is_none() => Ok(process),
            Err(e) => Err(e.into_app_error(&shown)),
        }
    }

    /// Collect a dotenv file without touching the process environment.
    fn from_dotenv(iter: dotenvy::Iter<File>) -> Result<Self, DotenvError> {
        let mut vars = HashMap::new();
        for item in iter {
            let (k, v) = item.map_err(DotenvError::from)?;
            vars.insert(k, v);
        }
        Ok(Self { vars })
    }

    /// Return a snapshot where entries of `top` replace entries of `self`.
    pub fn overlay(mut self, top: EnvSnapshot) -> Self {
        self.vars.extend(top.vars);
        self
    }

    /// Number of captured variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

// Values may be secrets; only names are printed.
impl fmt::Debug for EnvSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.vars.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("EnvSnapshot").field("keys", &keys).finish()
    }
}

impl Environment for EnvSnapshot {
    fn var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

#[derive(Debug)]
enum DotenvError {
    NotFound,
    Io(io::Error),
    Parse(String),
}

impl DotenvError {
    fn into_app_error(self, path: &str) -> AppError {
        match self {
            Self::NotFound => AppError::Config(format!("env file not found: {path}")),
            Self::Io(e) => AppError::Io(e),
            Self::Parse(msg) => AppError::Config(format!("cannot read env file {path}: {msg}")),
        }
    }
}

impl From<dotenvy::Error> for DotenvError {
    fn from(e: dotenvy::Error) -> Self {
        if e.not_found() {
            return Self::NotFound;
        }
        match e {
            dotenvy::Error::Io(io_err) => Self::Io(io_err),
            other => Self::Parse(other.to_string()),
        }
    }
}

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    /// Operator-supplied, non-empty environment value.
    Env,
    /// Compiled-in default.
    Fallback,
}

/// A resolved value together with its source.
///
/// No `Debug`: `value` may hold a secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Resolution {
    pub value: String,
    pub source: ValueSource,
}

impl Resolution {
    pub fn used_fallback(&self) -> bool {
        self.source == ValueSource::Fallback
    }
}

/// Resolve `key` from `env`, falling back to `fallback`.
///
/// A set, non-empty value is returned verbatim. Unset and empty both yield
/// `fallback` unchanged.
pub fn resolve<E: Environment + ?Sized>(env: &E, key: &str, fallback: &str) -> String {
    resolve_with_source(env, key, fallback).value
}

/// Like [`resolve`], but also reports whether the fallback was used.
pub fn resolve_with_source<E: Environment + ?Sized>(
    env: &E,
    key: &str,
    fallback: &str,
) -> Resolution {
    match env.var(key) {
        Some(v) if !v.is_empty() => Resolution {
            value: v.to_string(),
            source: ValueSource::Env,
        },
        _ => Resolution {
            value: fallback.to_string(),
            source: ValueSource::Fallback,
        },
    }
}
