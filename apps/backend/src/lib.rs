#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;
pub mod utils;

// Re-exports for public API
pub use auth::{AuthError, AuthGuard, Claims};
pub use config::auth::AuthConfig;
pub use config::db::{db_url, DbKind, DbProfile};
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::VerifiedClaims;
pub use infra::db::connect_db;
pub use infra::state::build_state;
pub use middleware::{RequestTrace, RequirePermission, StructuredLogger};
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
