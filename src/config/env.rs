//! Environment snapshot and port resolution.
//!
//! # Responsibilities
//! - Capture process environment once, at startup
//! - Resolve the `PORT` override as a pure function of the snapshot
//!
//! # Design Decisions
//! - Resolution never touches `std::env` directly, so tests supply
//!   snapshots without process-level environment mutation
//! - Unset and empty behave identically (fall through to the default),
//!   matching `${PORT:-8000}` shell semantics
//! - Any other non-numeric or out-of-range value is a hard error, not a
//!   silent fallback

use std::collections::HashMap;

use crate::config::loader::ConfigError;
use crate::config::schema::PORT_VAR;

/// Immutable snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// A snapshot with no variables set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from explicit pairs. Intended for tests.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a variable by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

/// Resolve the port override from the snapshot.
///
/// Returns `Ok(None)` when `PORT` is unset or empty (caller falls back to
/// its default), `Ok(Some(port))` for a valid value, and an error for
/// anything that does not parse as a port number.
pub fn resolve_port(env: &EnvSnapshot) -> Result<Option<u16>, ConfigError> {
    match env.get(PORT_VAR) {
        None => Ok(None),
        Some("") => Ok(None),
        Some(value) => value
            .parse::<u16>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidPort {
                value: value.to_string(),
            }),
    }
}
