use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: PrimitiveDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: PrimitiveDateTime,
    #[sea_orm(column_name = "state_id")]
    pub state_id: String,
    pub name: String,
}

impl Model {
    pub fn new(state_id: impl Into<String>, name: impl Into<String>) -> Self {
        let (id, now) = super::fresh_identity();
        Self {
            id,
            created_at: now,
            updated_at: now,
            state_id: state_id.into(),
            name: name.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::states::Entity",
        from = "Column::StateId",
        to = "super::states::Column::Id"
    )]
    State,
    #[sea_orm(has_many = "super::places::Entity")]
    Places,
}

impl Related<super::states::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::State.def()
    }
}

impl Related<super::places::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Places.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
