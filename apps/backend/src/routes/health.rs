use actix_web::{web, HttpResponse};
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;

use crate::error::AppError;
use crate::infra::db::require_db;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct Health {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
}

/// Liveness plus a round trip to the database.
///
/// A missing or unreachable database answers 503 through `AppError`, so
/// load balancers see the same body shape as every other failure.
async fn health(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&state)?;
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1");
    db.query_one(ping)
        .await
        .map_err(|e| AppError::db_unavailable(format!("health ping failed: {e}")))?;

    Ok(HttpResponse::Ok().json(Health {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db: "ok",
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
