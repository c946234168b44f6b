//! Shared database configuration and schema bootstrap.
//! Used by the storage engine and the migration CLI.

pub mod config;
pub mod error;
pub mod infra;

pub use config::db;
pub use error::DbInfraError;
pub use infra::db::core::{
    build_pool, drop_schema, ensure_schema, orchestrate_migration, orchestrate_migration_internal,
    sanitize_db_url,
};
