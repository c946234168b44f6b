use db_infra::DbInfraError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Storage not loaded: call reload() before using the session")]
    NotLoaded,
    #[error("Unknown class: {0}")]
    UnknownClass(String),
    #[error("Conflict: {detail}")]
    Conflict { detail: String },
    #[error("Constraint violation: {detail}")]
    Constraint { detail: String },
    #[error("Database unavailable: {detail}")]
    Unavailable { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
}

impl StorageError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn conflict(detail: impl Into<String>) -> Self {
        Self::Conflict {
            detail: detail.into(),
        }
    }

    pub fn constraint(detail: impl Into<String>) -> Self {
        Self::Constraint {
            detail: detail.into(),
        }
    }

    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self::Unavailable {
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::Config { .. } => "CONFIG_ERROR",
            StorageError::NotLoaded => "NOT_LOADED",
            StorageError::UnknownClass(_) => "UNKNOWN_CLASS",
            StorageError::Conflict { .. } => "CONFLICT",
            StorageError::Constraint { .. } => "CONSTRAINT_VIOLATION",
            StorageError::Unavailable { .. } => "DB_UNAVAILABLE",
            StorageError::Db { .. } => "DB_ERROR",
        }
    }
}

impl From<DbInfraError> for StorageError {
    fn from(e: DbInfraError) -> Self {
        match e {
            DbInfraError::Config { message } => StorageError::config(message),
        }
    }
}

impl From<sea_orm::DbErr> for StorageError {
    fn from(e: sea_orm::DbErr) -> Self {
        crate::infra::db_errors::map_db_err(e)
    }
}
