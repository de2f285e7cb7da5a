//! Shared utilities for launcher integration tests.

use std::path::PathBuf;
use std::process::Command;
use std::sync::atomic::{AtomicU32, Ordering};

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Path to the compiled launcher binary.
pub fn launcher_bin() -> &'static str {
    env!("CARGO_BIN_EXE_vchat-launcher")
}

fn unique_path(suffix: &str) -> PathBuf {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    std::env::temp_dir().join(format!(
        "vchat-launcher-test-{}-{}{}",
        std::process::id(),
        n,
        suffix
    ))
}

/// Write a throwaway TOML config file and return its path.
pub fn write_config(contents: &str) -> PathBuf {
    let path = unique_path(".toml");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Write an executable shell script standing in for the server process.
#[cfg(unix)]
pub fn write_fake_server(script_body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = unique_path(".sh");
    std::fs::write(&path, format!("#!/bin/sh\n{script_body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A config that launches the given fake server program.
#[cfg(unix)]
pub fn config_for_fake_server(script_body: &str) -> PathBuf {
    let server = write_fake_server(script_body);
    write_config(&format!(
        "[server]\nprogram = \"{}\"\n",
        server.display()
    ))
}

/// A launcher invocation with a clean PORT slate.
pub fn launcher_command(config: &std::path::Path) -> Command {
    let mut command = Command::new(launcher_bin());
    command.arg("--config").arg(config).env_remove("PORT");
    command
}
