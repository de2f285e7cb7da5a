//! Server process supervision.
//!
//! # Responsibilities
//! - Spawn the server process
//! - Wait for it to exit and surface its exit code
//! - Stop the server when a shutdown signal arrives
//!
//! # Design Decisions
//! - Fail fast: a spawn error is fatal, no retry
//! - The launcher's exit code mirrors the server's; a signal-terminated
//!   server maps to 128 + signal number, shell-style

use std::process::ExitStatus;

use thiserror::Error;
use tokio::process::Command;
use tokio::sync::broadcast;

/// Error type for server launch and supervision.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to start server process {program:?}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("failed waiting for server process: {0}")]
    Wait(std::io::Error),
}

/// Spawn the server and wait until it exits or shutdown is signalled.
///
/// On shutdown the child is killed and reaped before returning, so the
/// launcher never leaves an orphaned server behind. Returns the exit code
/// to propagate.
pub async fn run_server(
    mut command: Command,
    mut shutdown: broadcast::Receiver<()>,
) -> Result<i32, LaunchError> {
    let program = command.as_std().get_program().to_string_lossy().into_owned();
    command.kill_on_drop(true);

    let mut child = command.spawn().map_err(|source| LaunchError::Spawn {
        program: program.clone(),
        source,
    })?;

    tracing::info!(program = %program, pid = ?child.id(), "Server process started");

    tokio::select! {
        status = child.wait() => {
            let status = status.map_err(LaunchError::Wait)?;
            let code = exit_code(status);
            tracing::info!(code, "Server process exited");
            Ok(code)
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown requested, stopping server process");
            if let Err(error) = child.start_kill() {
                tracing::warn!(%error, "Failed to signal server process");
            }
            let status = child.wait().await.map_err(LaunchError::Wait)?;
            Ok(exit_code(status))
        }
    }
}

/// Map an exit status to a propagatable code.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;

    fn sh(script: &str) -> Command {
        let mut command = Command::new("/bin/sh");
        command.arg("-c").arg(script);
        command
    }

    #[tokio::test]
    async fn propagates_child_exit_code() {
        let shutdown = Shutdown::new();
        let code = run_server(sh("exit 7"), shutdown.subscribe()).await.unwrap();
        assert_eq!(code, 7);
    }

    #[tokio::test]
    async fn zero_exit_is_zero() {
        let shutdown = Shutdown::new();
        let code = run_server(sh("true"), shutdown.subscribe()).await.unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn spawn_failure_names_the_program() {
        let shutdown = Shutdown::new();
        let err = run_server(
            Command::new("/nonexistent/uvicorn"),
            shutdown.subscribe(),
        )
        .await
        .unwrap_err();
        match err {
            LaunchError::Spawn { program, .. } => {
                assert_eq!(program, "/nonexistent/uvicorn");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn shutdown_stops_a_long_running_server() {
        let shutdown = Shutdown::new();
        let receiver = shutdown.subscribe();
        let task = tokio::spawn(run_server(sh("sleep 30"), receiver));

        tokio::time::sleep(std::time::Duration::from_millis(100)).await;
        shutdown.trigger();

        let code = tokio::time::timeout(std::time::Duration::from_secs(5), task)
            .await
            .expect("supervisor did not stop after shutdown")
            .unwrap()
            .unwrap();
        // SIGKILL on unix maps to 128 + 9.
        assert_ne!(code, 0);
    }
}
