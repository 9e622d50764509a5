use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::adapters::genres_sea;
use crate::entities::genres;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::infra::db::require_db;
use crate::middleware::RequirePermission;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct GenreBody {
    pub id: i32,
    pub name: String,
}

impl From<genres::Model> for GenreBody {
    fn from(genre: genres::Model) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenreResponse<T> {
    success: bool,
    genre: T,
}

async fn list_genres(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let genres: Vec<GenreBody> = genres_sea::list_genres(db)
        .await?
        .into_iter()
        .map(GenreBody::from)
        .collect();

    Ok(HttpResponse::Ok().json(GenreResponse {
        success: true,
        genre: genres,
    }))
}

async fn get_genre(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let genre_id = path.into_inner();
    let db = require_db(&app_state)?;
    let genre = genres_sea::find_genre_by_id(db, genre_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(
                ErrorCode::GenreNotFound,
                format!("Genre {genre_id} not found."),
            )
        })?;

    Ok(HttpResponse::Ok().json(GenreResponse {
        success: true,
        genre: GenreBody::from(genre),
    }))
}

// Genres are catalogue data; reading them needs the movie read permission.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/genres")
            .wrap(RequirePermission::new("get:movies"))
            .route(web::get().to(list_genres)),
    )
    .service(
        web::resource(r"/genres/{id:\d+}")
            .wrap(RequirePermission::new("get:movies"))
            .route(web::get().to(get_genre)),
    );
}
