#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod protocol;
pub mod server;
pub mod services;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::ServerConfig;
pub use domain::{Card, MatchState, Play};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode, ValidationKind};
pub use services::{Command, Table, TableConfig};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
