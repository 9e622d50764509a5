use crate::auth::AuthGuard;
use crate::config::db::{DbKind, DbProfile};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    guard: AuthGuard,
    db: Option<(DbProfile, DbKind)>,
}

impl StateBuilder {
    pub fn new(guard: AuthGuard) -> Self {
        Self { guard, db: None }
    }

    pub fn with_db(mut self, profile: DbProfile, kind: DbKind) -> Self {
        self.db = Some((profile, kind));
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db {
            Some((profile, kind)) => {
                // single entrypoint: connect + migrate
                let conn = bootstrap_db(profile, kind).await?;
                Ok(AppState::new(conn, self.guard))
            }
            None => Ok(AppState::without_db(self.guard)),
        }
    }
}

pub fn build_state(guard: AuthGuard) -> StateBuilder {
    StateBuilder::new(guard)
}
