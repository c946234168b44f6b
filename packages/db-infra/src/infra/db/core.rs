use std::future::Future;
use std::time::{Duration, Instant};

use migration::{migrate, MigrationCommand, Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};
use tracing::{info, trace, warn};

use crate::config::db::{DbConfig, DbKind};
use crate::error::DbInfraError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

fn get_db_engine(db_kind: DbKind) -> &'static str {
    match db_kind {
        DbKind::MySql => "mysql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, DbInfraError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DbInfraError>>,
{
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(
                        "connection_retry=success attempts={} interval_ms={}",
                        attempt, interval_ms
                    );
                }
                return Ok(result);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < max_attempts {
                    warn!(
                        "connection_retry=failed attempt={} max_attempts={} interval_ms={}",
                        attempt, max_attempts, interval_ms
                    );
                    tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| {
        DbInfraError::config("no error recorded after max attempts (this should not happen)")
    }))
}

/// Open the engine (a connection pool) described by `config`.
///
/// Connections are checked for liveness before they are handed out. MySQL
/// connects are retried a few times so a database container that is still
/// starting does not fail the whole process.
pub async fn build_pool(config: &DbConfig) -> Result<DatabaseConnection, DbInfraError> {
    let url = config.connection_url()?;

    let mut opt = ConnectOptions::new(url.clone());
    opt.min_connections(config.pool.min_connections)
        .max_connections(config.pool.max_connections)
        .acquire_timeout(config.pool.acquire_timeout)
        .test_before_acquire(true)
        .sqlx_logging(false);

    info!(
        engine = get_db_engine(config.kind),
        url = %sanitize_db_url(&url),
        max_connections = config.pool.max_connections,
        "db=connect"
    );

    let pool = if matches!(config.kind, DbKind::MySql) {
        retry_connection(
            || {
                let opt_clone = opt.clone();
                async move {
                    Database::connect(opt_clone).await.map_err(|e| {
                        DbInfraError::config(format!("failed to connect to MySQL: {e}"))
                    })
                }
            },
            CONNECT_ATTEMPTS,
            CONNECT_INTERVAL_MS,
        )
        .await?
    } else {
        Database::connect(opt)
            .await
            .map_err(|e| DbInfraError::config(format!("failed to connect to database: {e}")))?
    };

    if matches!(config.kind, DbKind::SqliteFile) {
        setup_sqlite_file_prerequisites(&pool).await?;
    }

    Ok(pool)
}

/// Sanitize database URL by masking password in connection strings.
/// Used for logging.
pub fn sanitize_db_url(url: &str) -> String {
    if url.contains('@') && url.contains(':') {
        let parts: Vec<&str> = url.split('@').collect();
        if parts.len() == 2 {
            let auth_part = parts[0];
            let host_part = parts[1];

            if let Some(colon_pos) = auth_part.rfind(':') {
                let scheme_user = &auth_part[..colon_pos];
                // `mysql://user` keeps its scheme colon; only mask when a password follows the user.
                if scheme_user.contains("://") {
                    return format!("{scheme_user}:***@{host_part}");
                }
            }
        }
    }
    url.to_string()
}

async fn fast_path_schema_check(conn: &DatabaseConnection) -> Result<bool, DbInfraError> {
    let expected_count = Migrator::migrations().len();

    let expected_last = Migrator::migrations()
        .last()
        .map(|m| m.name().to_string())
        .unwrap_or_default();

    let (current_count, current_last) = match Migrator::get_applied_migrations(conn).await {
        Ok(migrations) => {
            let count = migrations.len();
            let last = migrations.last().map(|m| m.name().to_string());
            (count, last)
        }
        Err(DbErr::Exec(_)) => {
            trace!(fastpath = "miss", reason = "migration_table_missing");
            return Ok(false);
        }
        Err(e) => {
            return Err(DbInfraError::config(format!(
                "failed to get applied migrations: {e}"
            )));
        }
    };

    let is_up_to_date = current_count == expected_count
        && (!expected_last.is_empty() && current_last.as_deref() == Some(&expected_last));

    trace!(
        fastpath = if is_up_to_date { "hit" } else { "miss" },
        current_count = current_count,
        expected_count = expected_count,
        current_last = %current_last.as_deref().unwrap_or(""),
        expected_last = %expected_last
    );

    Ok(is_up_to_date)
}

/// Connect with `config` and run `command` against it (CLI entry point).
pub async fn orchestrate_migration(
    config: &DbConfig,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    let pool = build_pool(config).await?;
    let result = orchestrate_migration_internal(&pool, config.kind, command).await;
    if let Err(e) = pool.close().await {
        warn!(error = %e, "failed to close migration pool");
    }
    result
}

/// Run `command` on an already open engine and verify the applied count afterwards.
///
/// `Up` short-circuits when every migration is already applied, so calling it
/// on every `reload` costs one metadata query.
pub async fn orchestrate_migration_internal(
    pool: &DatabaseConnection,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    let start = Instant::now();
    info!(
        "migrate=start db_kind={} engine={} command={:?}",
        db_kind,
        get_db_engine(db_kind),
        command
    );

    if matches!(command, MigrationCommand::Up) && fast_path_schema_check(pool).await? {
        info!("migrate=skipped up_to_date=true");
        return Ok(());
    }

    migrate(pool, command)
        .await
        .map_err(|e| DbInfraError::config(format!("migration execution failed: {e}")))?;

    let expected_count = Migrator::migrations().len();
    let applied_count = migration::count_applied_migrations(pool)
        .await
        .map_err(|e| DbInfraError::config(format!("failed to count applied migrations: {e}")))?;

    match command {
        MigrationCommand::Reset => {
            if applied_count != 0 {
                return Err(DbInfraError::config(format!(
                    "Migration verification failed: reset should leave 0 migrations applied, but {applied_count} were found (db_kind={db_kind})"
                )));
            }
        }
        MigrationCommand::Up | MigrationCommand::Fresh | MigrationCommand::Refresh => {
            if applied_count != expected_count {
                return Err(DbInfraError::config(format!(
                    "Migration verification failed: expected {expected_count} migrations, but {applied_count} were applied (db_kind={db_kind})"
                )));
            }
        }
        MigrationCommand::Down | MigrationCommand::Status => {}
    }

    info!(
        migrate = "done",
        expected_count = expected_count,
        applied_count = applied_count,
        elapsed_ms = start.elapsed().as_millis() as u64
    );
    Ok(())
}

/// Bring the schema to the current version and recreate any managed table
/// missing from the database, whatever the migration ledger records.
pub async fn ensure_schema(pool: &DatabaseConnection, db_kind: DbKind) -> Result<(), DbInfraError> {
    orchestrate_migration_internal(pool, db_kind, MigrationCommand::Up).await?;

    let missing = migration::missing_tables(pool)
        .await
        .map_err(|e| DbInfraError::config(format!("failed to inspect tables: {e}")))?;
    if !missing.is_empty() {
        warn!(missing = ?missing, "schema=repair");
        migration::create_tables(pool)
            .await
            .map_err(|e| DbInfraError::config(format!("failed to create tables: {e}")))?;
    }
    Ok(())
}

/// Drop every managed table, then clear the migration ledger.
pub async fn drop_schema(pool: &DatabaseConnection, db_kind: DbKind) -> Result<(), DbInfraError> {
    migration::drop_tables(pool)
        .await
        .map_err(|e| DbInfraError::config(format!("failed to drop tables: {e}")))?;
    info!(db_kind = %db_kind, "schema=dropped");
    orchestrate_migration_internal(pool, db_kind, MigrationCommand::Reset).await
}

async fn setup_sqlite_file_prerequisites(pool: &DatabaseConnection) -> Result<(), DbInfraError> {
    use sea_orm::DatabaseBackend;

    for pragma in ["PRAGMA journal_mode = WAL;", "PRAGMA synchronous = NORMAL;"] {
        pool.execute(Statement::from_string(DatabaseBackend::Sqlite, pragma))
            .await
            .map_err(|e| DbInfraError::config(format!("failed to apply '{pragma}': {e}")))?;
    }

    Ok(())
}
