#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod engine;
pub mod entities;
pub mod error;
pub mod infra;
pub mod models;
pub mod telemetry;


// Re-exports for public API
pub use db_infra::config::db::{DbConfig, DbKind, RuntimeEnv};
pub use engine::DbStorage;
pub use error::StorageError;
pub use models::{ModelClass, Record};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
