use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Added, Deleted, Updated};
use crate::adapters::actors_sea::{self, ActorCreate, ActorUpdate};
use crate::entities::actors;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::VerifiedClaims;
use crate::infra::db::require_db;
use crate::middleware::RequirePermission;
use crate::state::app_state::AppState;
use crate::utils::dates::{date_or_today, format_date, parse_date};
use crate::utils::text::{capitalize_words, check_len, non_blank, require_field};

const NAME_MAX: usize = 120;
const GENDER_MAX: usize = 10;

#[derive(Debug, Serialize)]
pub struct ActorBody {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub dob: String,
    pub gender: Option<String>,
}

impl From<actors::Model> for ActorBody {
    fn from(actor: actors::Model) -> Self {
        Self {
            id: actor.id,
            name: actor.name,
            surname: actor.surname,
            dob: format_date(actor.dob),
            gender: actor.gender,
        }
    }
}

#[derive(Debug, Serialize)]
struct ActorResponse<T> {
    success: bool,
    actor: T,
}

#[derive(Debug, Deserialize)]
pub struct ActorQuery {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
}

pub(crate) fn actor_not_found(actor_id: i32) -> AppError {
    AppError::not_found(
        ErrorCode::ActorNotFound,
        format!("Actor {actor_id} not found."),
    )
}

fn normalized_name(field: &str, raw: String) -> Result<String, AppError> {
    let name = capitalize_words(&raw);
    check_len(field, &name, NAME_MAX)?;
    Ok(name)
}

fn checked_gender(raw: String) -> Result<String, AppError> {
    check_len("gender", &raw, GENDER_MAX)?;
    Ok(raw)
}

async fn list_actors(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let actors: Vec<ActorBody> = actors_sea::list_actors(db)
        .await?
        .into_iter()
        .map(ActorBody::from)
        .collect();

    Ok(HttpResponse::Ok().json(ActorResponse {
        success: true,
        actor: actors,
    }))
}

async fn get_actor(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let actor_id = path.into_inner();
    let db = require_db(&app_state)?;
    let actor = actors_sea::find_actor_by_id(db, actor_id)
        .await?
        .ok_or_else(|| actor_not_found(actor_id))?;

    Ok(HttpResponse::Ok().json(ActorResponse {
        success: true,
        actor: ActorBody::from(actor),
    }))
}

async fn add_actor(
    query: web::Query<ActorQuery>,
    claims: VerifiedClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let name = normalized_name("name", require_field("name", query.name)?)?;
    let surname = normalized_name("surname", require_field("surname", query.surname)?)?;
    let dob = date_or_today("dob", non_blank(query.dob).as_deref())?;
    let gender = non_blank(query.gender).map(checked_gender).transpose()?;

    let db = require_db(&app_state)?;
    let actor = actors_sea::create_actor(
        db,
        ActorCreate {
            name,
            surname,
            dob,
            gender,
        },
    )
    .await?;

    info!(sub = claims.0.sub.as_deref().unwrap_or("-"), actor_id = actor.id, "actor added");
    Ok(HttpResponse::Ok().json(Added {
        success: true,
        added: actor.id,
    }))
}

async fn update_actor(
    path: web::Path<i32>,
    query: web::Query<ActorQuery>,
    claims: VerifiedClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let actor_id = path.into_inner();
    let query = query.into_inner();

    let update = ActorUpdate {
        name: non_blank(query.name)
            .map(|raw| normalized_name("name", raw))
            .transpose()?,
        surname: non_blank(query.surname)
            .map(|raw| normalized_name("surname", raw))
            .transpose()?,
        dob: non_blank(query.dob)
            .map(|raw| parse_date("dob", &raw))
            .transpose()?,
        gender: non_blank(query.gender).map(checked_gender).transpose()?,
    };

    let db = require_db(&app_state)?;
    let actor = actors_sea::update_actor(db, actor_id, update)
        .await?
        .ok_or_else(|| actor_not_found(actor_id))?;

    info!(sub = claims.0.sub.as_deref().unwrap_or("-"), actor_id = actor.id, "actor updated");
    Ok(HttpResponse::Ok().json(Updated {
        success: true,
        updated: actor.id,
    }))
}

async fn delete_actor(
    path: web::Path<i32>,
    claims: VerifiedClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let actor_id = path.into_inner();
    let db = require_db(&app_state)?;
    if !actors_sea::delete_actor(db, actor_id).await? {
        return Err(actor_not_found(actor_id));
    }

    info!(sub = claims.0.sub.as_deref().unwrap_or("-"), actor_id, "actor deleted");
    Ok(HttpResponse::Ok().json(Deleted {
        success: true,
        deleted: actor_id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/actors")
            .wrap(RequirePermission::new("get:actors"))
            .route(web::get().to(list_actors)),
    )
    .service(
        web::resource("/actors/add")
            .wrap(RequirePermission::new("post:actors"))
            .route(web::post().to(add_actor)),
    )
    .service(
        web::resource("/actors/update/{id}")
            .wrap(RequirePermission::new("patch:actors"))
            .route(web::patch().to(update_actor)),
    )
    .service(
        web::resource("/actors/delete/{id}")
            .wrap(RequirePermission::new("delete:actors"))
            .route(web::delete().to(delete_actor)),
    )
    .service(
        web::resource(r"/actors/{id:\d+}")
            .wrap(RequirePermission::new("get:actors"))
            .route(web::get().to(get_actor)),
    );
}
