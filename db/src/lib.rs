pub mod filters;
pub mod models;
pub mod repositories;
pub mod test_utils;

use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use std::path::Path;
use util::config;

/// Turns the configured `DATABASE_PATH` into a connection URL.
///
/// DSNs are passed through untouched; plain paths are treated as SQLite files
/// opened in read-write-create mode.
pub fn database_url(path_or_url: &str) -> String {
    if path_or_url.starts_with("sqlite:")
        || path_or_url.starts_with("postgres://")
        || path_or_url.starts_with("mysql://")
    {
        return path_or_url.to_string();
    }

    // SQLite won't create intermediate dirs.
    if let Some(parent) = Path::new(path_or_url).parent() {
        if let Err(err) = std::fs::create_dir_all(parent) {
            tracing::warn!(dir = %parent.display(), error = %err, "Could not create database directory");
        }
    }
    format!("sqlite://{path_or_url}?mode=rwc")
}

/// Connects to the configured database and applies pending migrations.
pub async fn connect() -> Result<DatabaseConnection, DbErr> {
    connect_to(&database_url(&config::database_path())).await
}

pub async fn connect_to(url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(url.to_owned());
    options.sqlx_logging(false);
    // Every pooled connection to `:memory:` would otherwise get its own database.
    if url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    let db = Database::connect(options).await?;
    Migrator::up(&db, None).await?;
    tracing::info!(url, "Database connected and migrated");
    Ok(db)
}
