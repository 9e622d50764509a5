//! SeaORM adapter for genres (read-only through the API).

use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use crate::entities::{genres, movie_genres};

pub async fn list_genres<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<genres::Model>, sea_orm::DbErr> {
    genres::Entity::find()
        .order_by_asc(genres::Column::Id)
        .all(conn)
        .await
}

pub async fn find_genre_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    genre_id: i32,
) -> Result<Option<genres::Model>, sea_orm::DbErr> {
    genres::Entity::find_by_id(genre_id).one(conn).await
}

/// Returns the genre called `name`, inserting it first if absent.
pub async fn ensure_genre<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<genres::Model, sea_orm::DbErr> {
    let genre = genres::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
    };
    genres::Entity::insert(genre)
        .on_conflict(
            OnConflict::column(genres::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;

    genres::Entity::find()
        .filter(genres::Column::Name.eq(name))
        .one(conn)
        .await?
        .ok_or_else(|| sea_orm::DbErr::RecordNotFound("genres.name not found".to_string()))
}

/// Tags a movie with a genre; tagging twice is a no-op.
pub async fn link_movie_genre<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    movie_id: i32,
    genre_id: i32,
) -> Result<(), sea_orm::DbErr> {
    let link = movie_genres::ActiveModel {
        movie_id: Set(movie_id),
        genre_id: Set(genre_id),
    };
    movie_genres::Entity::insert(link)
        .on_conflict(
            OnConflict::columns([movie_genres::Column::MovieId, movie_genres::Column::GenreId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    Ok(())
}
