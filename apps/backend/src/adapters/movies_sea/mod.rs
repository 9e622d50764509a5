//! SeaORM adapter for movies.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet, QueryOrder, Set,
};

use crate::entities::{genres, movies};

pub mod dto;

pub use dto::{MovieCreate, MovieUpdate};

pub async fn list_movies<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<movies::Model>, sea_orm::DbErr> {
    movies::Entity::find()
        .order_by_asc(movies::Column::Id)
        .all(conn)
        .await
}

/// All movies paired with their genres, ordered by movie id.
pub async fn list_movies_with_genres<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<(movies::Model, Vec<genres::Model>)>, sea_orm::DbErr> {
    movies::Entity::find()
        .order_by_asc(movies::Column::Id)
        .find_with_related(genres::Entity)
        .order_by_asc(genres::Column::Id)
        .all(conn)
        .await
}

pub async fn find_movie_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    movie_id: i32,
) -> Result<Option<movies::Model>, sea_orm::DbErr> {
    movies::Entity::find_by_id(movie_id).one(conn).await
}

pub async fn find_movie_with_genres<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    movie_id: i32,
) -> Result<Option<(movies::Model, Vec<genres::Model>)>, sea_orm::DbErr> {
    let mut rows = movies::Entity::find_by_id(movie_id)
        .find_with_related(genres::Entity)
        .order_by_asc(genres::Column::Id)
        .all(conn)
        .await?;
    Ok(rows.pop())
}

pub async fn create_movie<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MovieCreate,
) -> Result<movies::Model, sea_orm::DbErr> {
    let movie = movies::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        release_date: Set(dto.release_date),
    };
    movie.insert(conn).await
}

/// Applies `dto` to the movie. Returns `None` when no such movie exists.
pub async fn update_movie<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    movie_id: i32,
    dto: MovieUpdate,
) -> Result<Option<movies::Model>, sea_orm::DbErr> {
    let Some(existing) = find_movie_by_id(conn, movie_id).await? else {
        return Ok(None);
    };
    if dto.is_empty() {
        return Ok(Some(existing));
    }

    let mut active = existing.into_active_model();
    if let Some(title) = dto.title {
        active.title = Set(title);
    }
    if let Some(release_date) = dto.release_date {
        active.release_date = Set(release_date);
    }
    active.update(conn).await.map(Some)
}

/// Deletes the movie; links and interpretations go with it. Returns whether a row was removed.
pub async fn delete_movie<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    movie_id: i32,
) -> Result<bool, sea_orm::DbErr> {
    let res = movies::Entity::delete_by_id(movie_id).exec(conn).await?;
    Ok(res.rows_affected > 0)
}
