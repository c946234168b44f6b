pub mod core;

pub use core::{build_pool, drop_schema, ensure_schema, orchestrate_migration, orchestrate_migration_internal, sanitize_db_url};
