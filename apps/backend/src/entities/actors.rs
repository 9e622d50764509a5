use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "actors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub dob: Date,
    pub gender: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::interpretations::Entity")]
    Interpretations,
}

impl Related<super::interpretations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Interpretations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
