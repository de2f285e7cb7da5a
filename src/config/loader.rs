//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::LauncherConfig;
use crate::config::validation::{self, ValidationError};

/// Error type for configuration resolution.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid PORT value {value:?}: expected an integer in 0-65535")]
    InvalidPort { value: String },

    #[error("configuration validation failed: {}", validation::join_errors(.0))]
    Validation(Vec<ValidationError>),
}

/// Load launcher configuration from a TOML file.
///
/// Parsing only; semantic validation runs after environment and CLI
/// overrides are applied, in [`crate::config::resolve`].
pub fn load_config(path: &Path) -> Result<LauncherConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: LauncherConfig = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("/nonexistent/vchat-launcher.toml");
        let err = load_config(path).unwrap_err();
        match err {
            ConfigError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("vchat-loader-test-{}.toml", std::process::id()));
        fs::write(&path, "[server\nport = 9000").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        let _ = fs::remove_file(&path);
    }
}
