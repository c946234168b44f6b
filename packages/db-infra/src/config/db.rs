//! Database configuration read from the process environment.
//!
//! The MySQL connection is described by the `HBNB_MYSQL_*` variables and
//! `HBNB_ENV` selects the runtime environment. `HBNB_STORAGE_DB` switches the
//! backend to SQLite for local work and tests.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use sea_orm::DatabaseBackend;

use crate::error::DbInfraError;

pub const ENV_MYSQL_USER: &str = "HBNB_MYSQL_USER";
pub const ENV_MYSQL_PWD: &str = "HBNB_MYSQL_PWD";
pub const ENV_MYSQL_HOST: &str = "HBNB_MYSQL_HOST";
pub const ENV_MYSQL_DB: &str = "HBNB_MYSQL_DB";
pub const ENV_RUNTIME: &str = "HBNB_ENV";
pub const ENV_STORAGE_DB: &str = "HBNB_STORAGE_DB";
pub const ENV_SQLITE_PATH: &str = "HBNB_SQLITE_PATH";
pub const ENV_CONNECT_TIMEOUT_MS: &str = "HBNB_CONNECT_TIMEOUT_MS";

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_SQLITE_PATH: &str = "hbnb.sqlite";
const DEFAULT_ACQUIRE_TIMEOUT_MS: u64 = 2000;

/// RFC 3986 unreserved characters stay literal in the URL userinfo.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Runtime environment. `test` wipes the schema when storage is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    Test,
}

impl RuntimeEnv {
    /// Only the exact value `test` selects the test environment.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("test") => RuntimeEnv::Test,
            _ => RuntimeEnv::Prod,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    MySql,
    SqliteFile,
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = DbInfraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql" => Ok(DbKind::MySql),
            "sqlite-file" => Ok(DbKind::SqliteFile),
            "sqlite-memory" => Ok(DbKind::SqliteMemory),
            other => Err(DbInfraError::config(format!(
                "unknown {ENV_STORAGE_DB} value '{other}' (expected mysql | sqlite-file | sqlite-memory)"
            ))),
        }
    }
}

impl fmt::Display for DbKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DbKind::MySql => "mysql",
            DbKind::SqliteFile => "sqlite-file",
            DbKind::SqliteMemory => "sqlite-memory",
        };
        f.write_str(s)
    }
}

impl From<DbKind> for DatabaseBackend {
    fn from(kind: DbKind) -> Self {
        match kind {
            DbKind::MySql => DatabaseBackend::MySql,
            DbKind::SqliteFile | DbKind::SqliteMemory => DatabaseBackend::Sqlite,
        }
    }
}

/// MySQL credentials and location.
#[derive(Clone, PartialEq, Eq)]
pub struct MySqlSettings {
    pub user: String,
    pub password: String,
    pub host: String,
    pub database: String,
}

impl fmt::Debug for MySqlSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MySqlSettings")
            .field("user", &self.user)
            .field("password", &"***")
            .field("host", &self.host)
            .field("database", &self.database)
            .finish()
    }
}

/// Pool sizing and timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolSettings {
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl PoolSettings {
    fn for_kind(kind: DbKind, acquire_timeout: Duration) -> Self {
        let (min_connections, max_connections) = match kind {
            DbKind::MySql => {
                let max = (num_cpus::get() as u32).saturating_mul(2).clamp(2, 16);
                (1, max)
            }
            DbKind::SqliteFile => (1, 4),
            // Every connection to `sqlite::memory:` is its own database.
            DbKind::SqliteMemory => (1, 1),
        };
        Self {
            min_connections,
            max_connections,
            acquire_timeout,
        }
    }
}

/// Everything needed to open the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct DbConfig {
    pub env: RuntimeEnv,
    pub kind: DbKind,
    pub mysql: Option<MySqlSettings>,
    pub sqlite_path: PathBuf,
    pub pool: PoolSettings,
}

impl DbConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, DbInfraError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DbInfraError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = RuntimeEnv::parse(lookup(ENV_RUNTIME).as_deref());
        let kind = match lookup(ENV_STORAGE_DB) {
            Some(value) => value.parse()?,
            None => DbKind::MySql,
        };
        let acquire_timeout = match lookup(ENV_CONNECT_TIMEOUT_MS) {
            Some(raw) => raw.parse::<u64>().map(Duration::from_millis).map_err(|_| {
                DbInfraError::config(format!(
                    "{ENV_CONNECT_TIMEOUT_MS} must be a number of milliseconds, got '{raw}'"
                ))
            })?,
            None => Duration::from_millis(DEFAULT_ACQUIRE_TIMEOUT_MS),
        };

        let mysql = if kind == DbKind::MySql {
            Some(MySqlSettings {
                user: must_var(&lookup, ENV_MYSQL_USER)?,
                password: lookup(ENV_MYSQL_PWD).unwrap_or_default(),
                host: lookup(ENV_MYSQL_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
                database: must_var(&lookup, ENV_MYSQL_DB)?,
            })
        } else {
            None
        };

        let sqlite_path = lookup(ENV_SQLITE_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SQLITE_PATH));

        Ok(Self {
            env,
            kind,
            mysql,
            sqlite_path,
            pool: PoolSettings::for_kind(kind, acquire_timeout),
        })
    }

    pub fn mysql(settings: MySqlSettings, env: RuntimeEnv) -> Self {
        Self {
            env,
            kind: DbKind::MySql,
            mysql: Some(settings),
            sqlite_path: PathBuf::from(DEFAULT_SQLITE_PATH),
            pool: PoolSettings::for_kind(
                DbKind::MySql,
                Duration::from_millis(DEFAULT_ACQUIRE_TIMEOUT_MS),
            ),
        }
    }

    pub fn sqlite_file(path: impl Into<PathBuf>, env: RuntimeEnv) -> Self {
        Self {
            env,
            kind: DbKind::SqliteFile,
            mysql: None,
            sqlite_path: path.into(),
            pool: PoolSettings::for_kind(
                DbKind::SqliteFile,
                Duration::from_millis(DEFAULT_ACQUIRE_TIMEOUT_MS),
            ),
        }
    }

    pub fn sqlite_memory(env: RuntimeEnv) -> Self {
        Self {
            env,
            kind: DbKind::SqliteMemory,
            mysql: None,
            sqlite_path: PathBuf::from(":memory:"),
            pool: PoolSettings::for_kind(
                DbKind::SqliteMemory,
                Duration::from_millis(DEFAULT_ACQUIRE_TIMEOUT_MS),
            ),
        }
    }

    /// Connection URL for the configured backend.
    pub fn connection_url(&self) -> Result<String, DbInfraError> {
        match self.kind {
            DbKind::MySql => {
                let m = self.mysql.as_ref().ok_or_else(|| {
                    DbInfraError::config("MySQL backend selected without MySQL settings")
                })?;
                let user = utf8_percent_encode(&m.user, USERINFO);
                let password = utf8_percent_encode(&m.password, USERINFO);
                Ok(format!(
                    "mysql://{user}:{password}@{host}/{db}",
                    host = m.host,
                    db = m.database
                ))
            }
            DbKind::SqliteFile => Ok(format!(
                "sqlite://{}?mode=rwc",
                self.sqlite_path.to_string_lossy()
            )),
            DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
        }
    }
}

fn must_var<F>(lookup: &F, name: &str) -> Result<String, DbInfraError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DbInfraError::config(format!("Required environment variable '{name}' is not set")))
}
