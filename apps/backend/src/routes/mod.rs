use actix_web::web;
use serde::Serialize;

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod actors;
pub mod genres;
pub mod health;
pub mod index;
pub mod interpretations;
pub mod movies;

/// Success bodies of the write endpoints: `{"success": true, "<key>": id}`.
#[derive(Debug, Serialize)]
pub(crate) struct Added {
    pub success: bool,
    pub added: i32,
}

#[derive(Debug, Serialize)]
pub(crate) struct Updated {
    pub success: bool,
    pub updated: i32,
}

#[derive(Debug, Serialize)]
pub(crate) struct Deleted {
    pub success: bool,
    pub deleted: i32,
}

/// Registers every route with its permission wrapper.
///
/// Shared by `main.rs` and the integration tests so both serve the same
/// surface. Malformed query strings are 400 and unusable path ids are 404,
/// both rendered as JSON error bodies.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::bad_request(ErrorCode::BadRequest, err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::not_found(ErrorCode::NotFound, err.to_string()).into()
    }));

    index::configure_routes(cfg);
    health::configure_routes(cfg);
    movies::configure_routes(cfg);
    interpretations::configure_routes(cfg);
    genres::configure_routes(cfg);
    actors::configure_routes(cfg);
}
