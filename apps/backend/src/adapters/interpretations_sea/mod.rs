//! SeaORM adapter for interpretations (cast entries).

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::{actors, interpretations};

pub mod dto;

pub use dto::InterpretationCreate;

/// Cast of a movie with each entry's actor, ordered by interpretation id.
pub async fn list_cast<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    movie_id: i32,
) -> Result<Vec<(interpretations::Model, Option<actors::Model>)>, sea_orm::DbErr> {
    interpretations::Entity::find()
        .filter(interpretations::Column::MovieId.eq(movie_id))
        .order_by_asc(interpretations::Column::Id)
        .find_also_related(actors::Entity)
        .all(conn)
        .await
}

pub async fn find_interpretation_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    interpretation_id: i32,
) -> Result<Option<interpretations::Model>, sea_orm::DbErr> {
    interpretations::Entity::find_by_id(interpretation_id)
        .one(conn)
        .await
}

pub async fn create_interpretation<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: InterpretationCreate,
) -> Result<interpretations::Model, sea_orm::DbErr> {
    let interpretation = interpretations::ActiveModel {
        id: NotSet,
        movie_id: Set(dto.movie_id),
        actor_id: Set(dto.actor_id),
        character: Set(dto.character),
    };
    interpretation.insert(conn).await
}

pub async fn delete_interpretation<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    interpretation_id: i32,
) -> Result<bool, sea_orm::DbErr> {
    let res = interpretations::Entity::delete_by_id(interpretation_id)
        .exec(conn)
        .await?;
    Ok(res.rows_affected > 0)
}
