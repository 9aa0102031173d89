#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod errors;
pub mod telemetry;


// Re-exports for public API
pub use config::{GameConfig, OutputFormat, PlayerSpec};
pub use domain::{Game, GameOptions, GameOutcome};
pub use error::AppError;
pub use errors::domain::DomainError;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
