//! Configuration schema definitions.
//!
//! All types derive Serde traits so a partial TOML file deserializes against
//! the built-in defaults.

use serde::{Deserialize, Serialize};

/// Environment variable consulted for the port override.
pub const PORT_VAR: &str = "PORT";

/// Port used when no file, environment, or CLI value is supplied.
pub const DEFAULT_PORT: u16 = 8000;

/// Root configuration for the launcher.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LauncherConfig {
    /// The server process to launch and its bind parameters.
    pub server: ServerConfig,
}

/// Server process configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Program to execute.
    pub program: String,

    /// Application target passed as the program's first argument
    /// (e.g., "server:app").
    pub app: String,

    /// Address the server binds to.
    pub host: String,

    /// Port the server binds to.
    pub port: u16,

    /// Log verbosity passed to the server.
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            program: "uvicorn".to_string(),
            app: "server:app".to_string(),
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_level: "info".to_string(),
        }
    }
}
