use sea_orm::DatabaseConnection;

use crate::auth::AuthGuard;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Token guard shared by every protected route
    guard: AuthGuard,
}

impl AppState {
    pub fn new(db: DatabaseConnection, guard: AuthGuard) -> Self {
        Self {
            db: Some(db),
            guard,
        }
    }

    /// State with no database; only the unprotected routes and the guard work.
    pub fn without_db(guard: AuthGuard) -> Self {
        Self { db: None, guard }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn guard(&self) -> &AuthGuard {
        &self.guard
    }
}
