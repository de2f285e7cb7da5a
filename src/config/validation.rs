//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind host is a real IP address
//! - Check the server command and its log level are usable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LauncherConfig → Result<(), Vec<ValidationError>>
//! - Runs once, after all override layers are merged

use std::net::IpAddr;

use thiserror::Error;

use crate::config::schema::LauncherConfig;

/// Log levels accepted by the server process.
const LOG_LEVELS: &[&str] = &["critical", "error", "warning", "info", "debug", "trace"];

/// A single semantic configuration error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("server.host {0:?} is not a valid IP address")]
    InvalidHost(String),

    #[error("server.program must not be empty")]
    EmptyProgram,

    #[error("server.app must not be empty")]
    EmptyApp,

    #[error("server.log_level {0:?} is not one of critical, error, warning, info, debug, trace")]
    InvalidLogLevel(String),
}

/// Validate a merged configuration, collecting every error.
pub fn validate_config(config: &LauncherConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let server = &config.server;

    if server.host.parse::<IpAddr>().is_err() {
        errors.push(ValidationError::InvalidHost(server.host.clone()));
    }
    if server.program.trim().is_empty() {
        errors.push(ValidationError::EmptyProgram);
    }
    if server.app.trim().is_empty() {
        errors.push(ValidationError::EmptyApp);
    }
    if !LOG_LEVELS.contains(&server.log_level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(server.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Render a list of validation errors as a single comma-separated string.
pub fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
