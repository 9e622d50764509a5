use backend::config::db::{DbKind, DbProfile};
use backend::infra::db::bootstrap_db;
use sea_orm::DatabaseConnection;

mod catalogue;

async fn fresh_db() -> DatabaseConnection {
    bootstrap_db(DbProfile::Test, DbKind::SqliteMemory)
        .await
        .expect("in-memory database should migrate")
}
