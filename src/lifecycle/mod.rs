//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Resolve config → Validate → Announce → Spawn server
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown trigger → supervisor stops the server
//! ```
//!
//! # Design Decisions
//! - Two states only: INITIALIZING until the server spawns, then RUNNING
//!   with the server process owning the lifetime
//! - A termination signal must never leave an orphaned server process

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
