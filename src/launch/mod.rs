//! Server launch subsystem.
//!
//! # Data Flow
//! ```text
//! Resolved config
//!     → banner.rs (two announcement lines on stdout)
//!     → command.rs (build the server process invocation)
//!     → supervisor.rs (spawn, wait, propagate exit status)
//! ```
//!
//! # Design Decisions
//! - The banner is a stdout contract, printed before the spawn attempt
//! - The launcher performs no retry; any launch failure is fatal
//! - Once RUNNING, the server process owns the lifetime; the supervisor
//!   only mirrors its exit status

pub mod banner;
pub mod command;
pub mod supervisor;

pub use banner::announce;
pub use command::{render_command, server_command};
pub use supervisor::{run_server, LaunchError};
