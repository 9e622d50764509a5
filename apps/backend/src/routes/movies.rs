use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Added, Deleted, Updated};
use crate::adapters::movies_sea::{self, MovieCreate, MovieUpdate};
use crate::entities::{genres, movies};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::VerifiedClaims;
use crate::infra::db::require_db;
use crate::middleware::RequirePermission;
use crate::state::app_state::AppState;
use crate::utils::dates::{date_or_today, format_date, parse_date};
use crate::utils::text::{capitalize_words, check_len, non_blank, require_field};

const TITLE_MAX: usize = 120;

#[derive(Debug, Serialize)]
pub struct MovieBody {
    pub id: i32,
    pub title: String,
    pub release_date: String,
    pub genres: Vec<String>,
}

impl From<(movies::Model, Vec<genres::Model>)> for MovieBody {
    fn from((movie, genres): (movies::Model, Vec<genres::Model>)) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            release_date: format_date(movie.release_date),
            genres: genres.into_iter().map(|g| g.name).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct MovieResponse<T> {
    success: bool,
    movie: T,
}

#[derive(Debug, Deserialize)]
pub struct MovieQuery {
    pub title: Option<String>,
    pub release_date: Option<String>,
}

fn movie_not_found(movie_id: i32) -> AppError {
    AppError::not_found(
        ErrorCode::MovieNotFound,
        format!("Movie {movie_id} not found."),
    )
}

fn normalized_title(raw: String) -> Result<String, AppError> {
    let title = capitalize_words(&raw);
    check_len("title", &title, TITLE_MAX)?;
    Ok(title)
}

async fn list_movies(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let movies: Vec<MovieBody> = movies_sea::list_movies_with_genres(db)
        .await?
        .into_iter()
        .map(MovieBody::from)
        .collect();

    Ok(HttpResponse::Ok().json(MovieResponse {
        success: true,
        movie: movies,
    }))
}

async fn get_movie(
    path: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let movie_id = path.into_inner();
    let db = require_db(&app_state)?;
    let movie = movies_sea::find_movie_with_genres(db, movie_id)
        .await?
        .ok_or_else(|| movie_not_found(movie_id))?;

    Ok(HttpResponse::Ok().json(MovieResponse {
        success: true,
        movie: MovieBody::from(movie),
    }))
}

async fn add_movie(
    query: web::Query<MovieQuery>,
    claims: VerifiedClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let title = normalized_title(require_field("title", query.title)?)?;
    let release_date = date_or_today("release_date", non_blank(query.release_date).as_deref())?;

    let db = require_db(&app_state)?;
    let movie = movies_sea::create_movie(db, MovieCreate::new(title, release_date)).await?;

    info!(sub = claims.0.sub.as_deref().unwrap_or("-"), movie_id = movie.id, "movie added");
    Ok(HttpResponse::Ok().json(Added {
        success: true,
        added: movie.id,
    }))
}

async fn update_movie(
    path: web::Path<i32>,
    query: web::Query<MovieQuery>,
    claims: VerifiedClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let movie_id = path.into_inner();
    let query = query.into_inner();

    let update = MovieUpdate {
        title: non_blank(query.title).map(normalized_title).transpose()?,
        release_date: non_blank(query.release_date)
            .map(|raw| parse_date("release_date", &raw))
            .transpose()?,
    };

    let db = require_db(&app_state)?;
    let movie = movies_sea::update_movie(db, movie_id, update)
        .await?
        .ok_or_else(|| movie_not_found(movie_id))?;

    info!(sub = claims.0.sub.as_deref().unwrap_or("-"), movie_id = movie.id, "movie updated");
    Ok(HttpResponse::Ok().json(Updated {
        success: true,
        updated: movie.id,
    }))
}

async fn delete_movie(
    path: web::Path<i32>,
    claims: VerifiedClaims,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let movie_id = path.into_inner();
    let db = require_db(&app_state)?;
    if !movies_sea::delete_movie(db, movie_id).await? {
        return Err(movie_not_found(movie_id));
    }

    info!(sub = claims.0.sub.as_deref().unwrap_or("-"), movie_id, "movie deleted");
    Ok(HttpResponse::Ok().json(Deleted {
        success: true,
        deleted: movie_id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/movies")
            .wrap(RequirePermission::new("get:movies"))
            .route(web::get().to(list_movies)),
    )
    .service(
        web::resource("/movies/add")
            .wrap(RequirePermission::new("post:movies"))
            .route(web::post().to(add_movie)),
    )
    .service(
        web::resource("/movies/update/{id}")
            .wrap(RequirePermission::new("patch:movies"))
            .route(web::patch().to(update_movie)),
    )
    .service(
        web::resource("/movies/delete/{id}")
            .wrap(RequirePermission::new("delete:movies"))
            .route(web::delete().to(delete_movie)),
    )
    .service(
        web::resource(r"/movies/{id:\d+}")
            .wrap(RequirePermission::new("get:movies"))
            .route(web::get().to(get_movie)),
    );
}
