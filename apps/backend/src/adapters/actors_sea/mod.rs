//! SeaORM adapter for actors.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, NotSet, QueryOrder, Set,
};

use crate::entities::actors;

pub mod dto;

pub use dto::{ActorCreate, ActorUpdate};

pub async fn list_actors<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<actors::Model>, sea_orm::DbErr> {
    actors::Entity::find()
        .order_by_asc(actors::Column::Id)
        .all(conn)
        .await
}

pub async fn find_actor_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    actor_id: i32,
) -> Result<Option<actors::Model>, sea_orm::DbErr> {
    actors::Entity::find_by_id(actor_id).one(conn).await
}

pub async fn create_actor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ActorCreate,
) -> Result<actors::Model, sea_orm::DbErr> {
    let actor = actors::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        surname: Set(dto.surname),
        dob: Set(dto.dob),
        gender: Set(dto.gender),
    };
    actor.insert(conn).await
}

pub async fn update_actor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    actor_id: i32,
    dto: ActorUpdate,
) -> Result<Option<actors::Model>, sea_orm::DbErr> {
    let Some(existing) = find_actor_by_id(conn, actor_id).await? else {
        return Ok(None);
    };
    if dto.is_empty() {
        return Ok(Some(existing));
    }

    let mut active = existing.into_active_model();
    if let Some(name) = dto.name {
        active.name = Set(name);
    }
    if let Some(surname) = dto.surname {
        active.surname = Set(surname);
    }
    if let Some(dob) = dto.dob {
        active.dob = Set(dob);
    }
    if let Some(gender) = dto.gender {
        active.gender = Set(Some(gender));
    }
    active.update(conn).await.map(Some)
}

pub async fn delete_actor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    actor_id: i32,
) -> Result<bool, sea_orm::DbErr> {
    let res = actors::Entity::delete_by_id(actor_id).exec(conn).await?;
    Ok(res.rows_affected > 0)
}
