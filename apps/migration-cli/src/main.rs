use clap::{Parser, ValueEnum};
use db_infra::config::db::{DbConfig, RuntimeEnv, ENV_RUNTIME, ENV_STORAGE_DB};
use db_infra::orchestrate_migration;
use hbnb_storage::{DbStorage, ModelClass};
use migration::MigrationCommand;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Env {
    Prod,
    Test,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Db {
    Mysql,
    SqliteFile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Plain,
    Json,
}

#[derive(Parser)]
#[command(name = "hbnb-migrate")]
#[command(about = "HBnB database schema tool")]
struct Args {
    /// up | down | fresh | reset | refresh | status | count
    command: String,

    /// Runtime environment (overrides HBNB_ENV)
    #[arg(short, long, value_enum)]
    env: Option<Env>,

    /// Database backend (overrides HBNB_STORAGE_DB)
    #[arg(
        short,
        long,
        value_enum,
        help = "Database type: mysql, sqlite-file"
    )]
    db: Option<Db>,

    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Migrate(MigrationCommand),
    /// Print stored record counts per class.
    Count,
}

fn parse_action(command: &str) -> Option<Action> {
    let action = match command {
        "up" => Action::Migrate(MigrationCommand::Up),
        "down" => Action::Migrate(MigrationCommand::Down),
        "fresh" => Action::Migrate(MigrationCommand::Fresh),
        "reset" => Action::Migrate(MigrationCommand::Reset),
        "refresh" => Action::Migrate(MigrationCommand::Refresh),
        "status" => Action::Migrate(MigrationCommand::Status),
        "count" => Action::Count,
        _ => return None,
    };
    Some(action)
}

/// `count` builds a storage, and storage in the test environment starts by
/// dropping every table.
fn check_action(action: &Action, config: &DbConfig) -> Result<(), String> {
    if *action == Action::Count && config.env == RuntimeEnv::Test {
        return Err(
            "count is not available with --env test: opening storage there drops every table"
                .to_string(),
        );
    }
    Ok(())
}

/// Environment lookup with the command-line overrides layered on top.
fn config_for<F>(args: &Args, lookup: F) -> Result<DbConfig, db_infra::DbInfraError>
where
    F: Fn(&str) -> Option<String>,
{
    let env = args.env.map(|e| match e {
        Env::Prod => "prod",
        Env::Test => "test",
    });
    let db = args.db.map(|d| match d {
        Db::Mysql => "mysql",
        Db::SqliteFile => "sqlite-file",
    });

    DbConfig::from_lookup(|name| match name {
        ENV_RUNTIME if env.is_some() => env.map(str::to_string),
        ENV_STORAGE_DB if db.is_some() => db.map(str::to_string),
        other => lookup(other),
    })
}

fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Json => hbnb_storage::telemetry::init_tracing(),
        LogFormat::Plain => tracing_subscriber::fmt()
            .with_writer(std::io::stdout)
            .without_time()
            .with_target(false)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_line_number(false)
            .with_file(false)
            .with_env_filter("migration_cli=info,migration=info,db_infra=info,hbnb_storage=info,sqlx=warn")
            .init(),
    }
}

async fn print_counts(config: &DbConfig) -> Result<(), hbnb_storage::StorageError> {
    let mut storage = DbStorage::connect(config).await?;
    storage.reload().await?;
    for class in ModelClass::ALL {
        println!("{class}: {}", storage.count(Some(class)).await?);
    }
    storage.dispose().await
}

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.to_string().contains("invalid value") && e.to_string().contains("--db") {
                eprintln!("Unsupported database type provided.");
                eprintln!();
                eprintln!("In-memory SQLite is not available here: the database would be");
                eprintln!("destroyed as soon as the command exits.");
                eprintln!();
                eprintln!("Supported database types:");
                eprintln!("  mysql       - MySQL database from HBNB_MYSQL_*");
                eprintln!("  sqlite-file - SQLite file at HBNB_SQLITE_PATH");
                std::process::exit(2);
            }
            e.exit();
        }
    };

    init_logging(args.log_format);

    let Some(action) = parse_action(&args.command) else {
        eprintln!(
            "Unknown command: {}. Use: up | down | fresh | reset | refresh | status | count",
            args.command
        );
        std::process::exit(2);
    };

    let config = match config_for(&args, |name| std::env::var(name).ok()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    if let Err(message) = check_action(&action, &config) {
        eprintln!("{message}");
        std::process::exit(2);
    }

    tracing::info!(command = %args.command, db_kind = %config.kind, env = ?config.env, "cli=start");

    let result = match action {
        Action::Migrate(command) => orchestrate_migration(&config, command)
            .await
            .map_err(|e| format!("Migration failed: {e}")),
        Action::Count => print_counts(&config)
            .await
            .map_err(|e| format!("Count failed: {e}")),
    };

    match result {
        Ok(()) => tracing::info!(command = %args.command, "cli=done"),
        Err(message) => {
            tracing::error!(command = %args.command, error = %message, "cli=failed");
            eprintln!("{message}");
            std::process::exit(1);
        }
    }
}
