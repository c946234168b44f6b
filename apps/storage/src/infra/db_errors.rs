//! SeaORM -> StorageError translation helpers.
//!
//! Everything that talks to the database returns `sea_orm::DbErr`; the
//! `From<DbErr> for StorageError` impl funnels it through `map_db_err` so the
//! classification lives in one place.

use tracing::{error, warn};

use crate::error::StorageError;

/// MySQL server error number from sqlx's `"<number> (<sqlstate>): <message>"` form.
fn mysql_error_number(msg: &str) -> Option<u32> {
    let marker = "error returned from database: ";
    let rest = &msg[msg.find(marker)? + marker.len()..];
    let (number, tail) = rest.split_once(' ')?;
    if !tail.starts_with('(') {
        return None;
    }
    number.parse().ok()
}

/// SQLite extended result code from sqlx's `"(code: <n>) <message>"` form.
fn sqlite_error_code(msg: &str) -> Option<u32> {
    let marker = "(code: ";
    let rest = &msg[msg.find(marker)? + marker.len()..];
    rest[..rest.find(')')?].parse().ok()
}

/// Extract table.column from SQLite "UNIQUE constraint failed: table.column" error messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    let marker = "UNIQUE constraint failed: ";
    let start = error_msg.find(marker)? + marker.len();
    error_msg[start..].split_whitespace().next()
}

/// Translate a `DbErr` into a `StorageError`.
pub fn map_db_err(e: sea_orm::DbErr) -> StorageError {
    let error_msg = e.to_string();

    match &e {
        sea_orm::DbErr::RecordNotFound(detail) => {
            return StorageError::db(format!("record not found: {detail}"));
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(raw_error = %error_msg, "Database unavailable");
            return StorageError::unavailable("Database unavailable");
        }
        _ => {}
    }

    let mysql = mysql_error_number(&error_msg);
    let sqlite = sqlite_error_code(&error_msg);

    // MySQL ER_DUP_ENTRY; SQLite CONSTRAINT_UNIQUE / CONSTRAINT_PRIMARYKEY.
    // SQLite's own constraint phrases cover drivers that omit the code.
    if matches!(mysql, Some(1062))
        || matches!(sqlite, Some(2067 | 1555))
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(raw_error = %error_msg, "Unique constraint violation");
        if let Some(table_column) = extract_sqlite_table_column(&error_msg) {
            return StorageError::conflict(format!("duplicate value for {table_column}"));
        }
        return StorageError::conflict("Unique constraint violation");
    }

    // MySQL row referenced / no parent; SQLite CONSTRAINT_FOREIGNKEY.
    if matches!(mysql, Some(1216 | 1217 | 1451 | 1452))
        || matches!(sqlite, Some(787))
        || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(raw_error = %error_msg, "Foreign key constraint violation");
        return StorageError::constraint("Foreign key constraint violation");
    }

    // MySQL ER_BAD_NULL_ERROR; SQLite CONSTRAINT_NOTNULL.
    if matches!(mysql, Some(1048))
        || matches!(sqlite, Some(1299))
        || error_msg.contains("NOT NULL constraint failed")
    {
        warn!(raw_error = %error_msg, "Not-null constraint violation");
        return StorageError::constraint("Required column is missing");
    }

    // MySQL lock wait timeout / deadlock; SQLite BUSY / LOCKED.
    if matches!(mysql, Some(1205 | 1213))
        || matches!(sqlite, Some(5 | 6 | 261 | 262 | 517))
        || error_msg.contains("database is locked")
    {
        warn!(raw_error = %error_msg, "Database busy");
        return StorageError::unavailable("Database busy");
    }

    error!(raw_error = %error_msg, "Unhandled database error");
    StorageError::db(error_msg)
}
