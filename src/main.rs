//! Video Chat Application bootstrap launcher.
//!
//! # Architecture Overview
//! ```text
//!   ┌──────────────────────────────────────────────────────┐
//!   │                  vchat-launcher                      │
//!   │                                                      │
//!   │  defaults ─▶ TOML file ─▶ PORT env ─▶ --port         │
//!   │                   │                                  │
//!   │                   ▼                                  │
//!   │             validation                               │
//!   │                   │                                  │
//!   │                   ▼                                  │
//!   │   stdout banner (2 lines) ─▶ spawn server process    │
//!   │                                    │                 │
//!   │   SIGINT/SIGTERM ──▶ shutdown ─────┤                 │
//!   │                                    ▼                 │
//!   │                        exit with server's code       │
//!   └──────────────────────────────────────────────────────┘
//! ```
//!
//! The launched server (`uvicorn server:app` by default) owns the process
//! lifetime; the launcher mirrors its exit status.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use vchat_launcher::config::{self, EnvSnapshot};
use vchat_launcher::launch::{announce, render_command, run_server, server_command};
use vchat_launcher::lifecycle::{signals, Shutdown};
use vchat_launcher::observability;

#[derive(Parser)]
#[command(name = "vchat-launcher")]
#[command(about = "Bootstrap launcher for the Video Chat Application server", long_about = None)]
struct Cli {
    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listening port (takes precedence over PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Resolve and validate configuration, print it, and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    observability::logging::init();

    let env = EnvSnapshot::from_process();
    let config = match config::resolve(cli.config.as_deref(), cli.port, &env) {
        Ok(config) => config,
        Err(error) => {
            tracing::error!(%error, "Configuration error");
            eprintln!("vchat-launcher: {error}");
            return ExitCode::from(2);
        }
    };

    if cli.check {
        match toml::to_string(&config) {
            Ok(rendered) => print!("{rendered}"),
            Err(error) => {
                eprintln!("vchat-launcher: {error}");
                return ExitCode::FAILURE;
            }
        }
        println!("# command: {}", render_command(&config.server));
        return ExitCode::SUCCESS;
    }

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        program = %config.server.program,
        "Configuration resolved"
    );

    // The banner must be on the wire before the server starts writing.
    let mut stdout = io::stdout();
    if let Err(error) = announce(&mut stdout, config.server.port) {
        tracing::error!(%error, "Failed to write startup banner");
        return ExitCode::FAILURE;
    }

    let shutdown = Shutdown::new();
    signals::spawn_listener(shutdown.clone());

    let command = server_command(&config.server);
    match run_server(command, shutdown.subscribe()).await {
        Ok(code) => ExitCode::from(code.clamp(0, 255) as u8),
        Err(error) => {
            tracing::error!(%error, "Server launch failed");
            eprintln!("vchat-launcher: {error}");
            ExitCode::FAILURE
        }
    }
}
