use std::sync::Arc;

use backend::auth::KeySetSource;
use backend::config::db::{DbKind, DbProfile};
use backend::error::AppError;
use backend::infra::state::build_state;
use backend::state::app_state::AppState;

use super::auth::{test_guard, test_guard_with_keys};

/// Migrated in-memory SQLite plus a guard backed by the fixture key set.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state(test_guard())
        .with_db(DbProfile::Test, DbKind::SqliteMemory)
        .build()
        .await
}

/// Same as [`build_test_state`] with a caller-supplied key source.
pub async fn build_test_state_with_keys(
    keys: Arc<dyn KeySetSource>,
) -> Result<AppState, AppError> {
    build_state(test_guard_with_keys(keys))
        .with_db(DbProfile::Test, DbKind::SqliteMemory)
        .build()
        .await
}

/// Guard only; protected routes reject before touching storage.
pub async fn build_state_without_db() -> Result<AppState, AppError> {
    build_state(test_guard()).build().await
}
