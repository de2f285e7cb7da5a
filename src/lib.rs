//! Video Chat Application bootstrap launcher library.
//!
//! Resolves a listening port from configuration, announces startup on
//! stdout, and supervises a single server process bound to the resolved
//! address.

pub mod config;
pub mod launch;
pub mod lifecycle;
pub mod observability;

pub use config::schema::LauncherConfig;
pub use config::EnvSnapshot;
pub use lifecycle::Shutdown;
