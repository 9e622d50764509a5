use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind, DbProfile};
use crate::error::AppError;
use crate::state::app_state::AppState;

fn engine_name(kind: DbKind) -> &'static str {
    match kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteMemory => "sqlite",
    }
}

/// Opens a pool for `profile`/`kind`. Does NOT run migrations.
///
/// In-memory SQLite is pinned to a single connection: every new connection
/// would otherwise see its own empty database.
pub async fn connect_db(profile: DbProfile, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile, kind)?;

    let mut opts = ConnectOptions::new(url);
    opts.connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    match kind {
        DbKind::SqliteMemory => {
            opts.min_connections(1)
                .max_connections(1)
                .idle_timeout(Duration::from_secs(24 * 60 * 60));
        }
        DbKind::Postgres => {
            opts.max_connections(10);
        }
    }

    let conn = Database::connect(opts).await?;
    info!(engine = engine_name(kind), ?profile, "database connected");
    Ok(conn)
}

/// Connects and brings the schema up to date.
pub async fn bootstrap_db(profile: DbProfile, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, kind).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migration failed: {e}")))?;
    Ok(conn)
}

/// Returns the pooled connection or a 503-mapped error when the state has none.
pub fn require_db(state: &AppState) -> Result<&DatabaseConnection, AppError> {
    state
        .db()
        .ok_or_else(|| AppError::db_unavailable("database not configured"))
}
