//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → loader.rs (optional TOML file, parse & deserialize)
//!     → env.rs (PORT override from an environment snapshot)
//!     → CLI override (--port)
//!     → validation.rs (semantic checks)
//!     → LauncherConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; the launcher process is replaced,
//!   never reconfigured
//! - All fields have defaults so the launcher runs with no file at all
//! - Environment access goes through an explicit snapshot, never ad hoc
//!   `std::env::var` inside resolution logic

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

use std::path::Path;

pub use env::EnvSnapshot;
pub use loader::ConfigError;
pub use schema::LauncherConfig;
pub use schema::ServerConfig;

/// Resolve the full launcher configuration.
///
/// Layering order, lowest to highest precedence: built-in defaults, TOML
/// config file, `PORT` environment variable, `--port` CLI flag. Validation
/// runs last, over the final merged config.
pub fn resolve(
    config_path: Option<&Path>,
    cli_port: Option<u16>,
    env: &EnvSnapshot,
) -> Result<LauncherConfig, ConfigError> {
    let mut config = match config_path {
        Some(path) => loader::load_config(path)?,
        None => LauncherConfig::default(),
    };

    if let Some(port) = env::resolve_port(env)? {
        config.server.port = port;
    }
    if let Some(port) = cli_port {
        config.server.port = port;
    }

    validation::validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let env = EnvSnapshot::empty();
        let config = resolve(None, None, &env).unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.host, "0.0.0.0");
    }

    #[test]
    fn env_overrides_defaults() {
        let env = EnvSnapshot::from_pairs([("PORT", "3000")]);
        let config = resolve(None, None, &env).unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn cli_overrides_env() {
        let env = EnvSnapshot::from_pairs([("PORT", "3000")]);
        let config = resolve(None, Some(9100), &env).unwrap();
        assert_eq!(config.server.port, 9100);
    }

    #[test]
    fn invalid_env_port_is_fatal_even_with_cli_override() {
        let env = EnvSnapshot::from_pairs([("PORT", "not-a-port")]);
        let err = resolve(None, Some(9100), &env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }
}
