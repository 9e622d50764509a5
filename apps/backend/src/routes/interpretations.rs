//! Movie cast: which actor plays which character.

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::actors::{actor_not_found, ActorBody};
use super::{Added, Deleted};
use crate::adapters::interpretations_sea::{self, InterpretationCreate};
use crate::adapters::{actors_sea, movies_sea};
use crate::entities::{actors, interpretations};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::VerifiedClaims;
use crate::infra::db::require_db;
use crate::middleware::RequirePermission;
use crate::state::app_state::AppState;
use crate::utils::text::{check_len, require_field};

const CHARACTER_MAX: usize = 120;

#[derive(Debug, Serialize)]
pub struct InterpretationBody {
    pub id: i32,
    pub movie_id: i32,
    pub actor_id: i32,
    pub character: String,
    pub actor: Option<ActorBody>,
}

impl From<(interpretations::Model, Option<actors::Model>)> for InterpretationBody {
    fn from((interpretation, actor): (interpretations::Model, Option<actors::Model>)) -> Self {
        Self {
            id: interpretation.id,
            movie_id: interpretation.movie_id,
            actor_id: interpretation.actor_id,
            character: interpretation.character,
            actor: actor.map(ActorBody::from),
        }
    }
}

#[derive(Debug, Serialize)]
struct CastResponse {
    success: bool,
    interpretation: Vec<InterpretationBody>,
}

#[derive(Debug, Deserialize)]
pub struct CastQuery {
    pub actor_id: Option<i32>,
    pub character: Option<String>,
}

fn movie_not_found(movie_id: i32) -> AppError {
    AppError::not_found(
        ErrorCode::MovieNotFound,
        format!("Movie {movie_id} not found."),
    )
}

async fn list_cast(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let movie_id = path.into_inner();
    let db = require_db(&app_state)?;
    if movies_sea::find_movie_by_id(db, movie_id).await?.is_none() {
        return Err(movie_not_found(movie_id));
    }

    let cast = interpretations_sea::list_cast(db, movie_id)
        .await?
        .into_iter()
        .map(InterpretationBody::from)
        .collect();

    Ok(HttpResponse::Ok().json(CastResponse {
        success: true,
        interpretation: cast,
    }))
}

async fn add_cast(
    path: web::Path<i32>,
    query: web::Query<CastQuery>,
    claims: VerifiedClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let movie_id = path.into_inner();
    let query = query.into_inner();
    let actor_id = query.actor_id.ok_or_else(|| {
        AppError::bad_request(
            ErrorCode::MissingField,
            "Missing required field 'actor_id'.",
        )
    })?;
    let character = require_field("character", query.character)?;
    check_len("character", &character, CHARACTER_MAX)?;

    let db = require_db(&app_state)?;
    if movies_sea::find_movie_by_id(db, movie_id).await?.is_none() {
        return Err(movie_not_found(movie_id));
    }
    if actors_sea::find_actor_by_id(db, actor_id).await?.is_none() {
        return Err(actor_not_found(actor_id));
    }

    let interpretation = interpretations_sea::create_interpretation(
        db,
        InterpretationCreate {
            movie_id,
            actor_id,
            character,
        },
    )
    .await?;

    info!(
        sub = claims.0.sub.as_deref().unwrap_or("-"),
        movie_id,
        actor_id,
        interpretation_id = interpretation.id,
        "cast entry added"
    );
    Ok(HttpResponse::Ok().json(Added {
        success: true,
        added: interpretation.id,
    }))
}

async fn delete_interpretation(
    path: web::Path<i32>,
    claims: VerifiedClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let interpretation_id = path.into_inner();
    let db = require_db(&app_state)?;
    if !interpretations_sea::delete_interpretation(db, interpretation_id).await? {
        return Err(AppError::not_found(
            ErrorCode::InterpretationNotFound,
            format!("Interpretation {interpretation_id} not found."),
        ));
    }

    info!(
        sub = claims.0.sub.as_deref().unwrap_or("-"),
        interpretation_id, "cast entry deleted"
    );
    Ok(HttpResponse::Ok().json(Deleted {
        success: true,
        deleted: interpretation_id,
    }))
}

// Editing a cast is an edit of the movie, hence `patch:movies`.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(r"/movies/{id:\d+}/cast")
            .wrap(RequirePermission::new("get:movies"))
            .route(web::get().to(list_cast)),
    )
    .service(
        web::resource(r"/movies/{id:\d+}/cast/add")
            .wrap(RequirePermission::new("patch:movies"))
            .route(web::post().to(add_cast)),
    )
    .service(
        web::resource("/interpretations/delete/{id}")
            .wrap(RequirePermission::new("patch:movies"))
            .route(web::delete().to(delete_interpretation)),
    );
}
