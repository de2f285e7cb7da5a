//! Server process command construction.

use tokio::process::Command;

use crate::config::schema::ServerConfig;

/// Build the server invocation from the resolved configuration.
///
/// Equivalent command line:
/// `<program> <app> --host <host> --port <port> --log-level <level>`
pub fn server_command(server: &ServerConfig) -> Command {
    let mut command = Command::new(&server.program);
    command
        .arg(&server.app)
        .arg("--host")
        .arg(&server.host)
        .arg("--port")
        .arg(server.port.to_string())
        .arg("--log-level")
        .arg(&server.log_level);
    command
}

/// Render the invocation as a single display string for logs and `--check`.
pub fn render_command(server: &ServerConfig) -> String {
    format!(
        "{} {} --host {} --port {} --log-level {}",
        server.program, server.app, server.host, server.port, server.log_level
    )
}
