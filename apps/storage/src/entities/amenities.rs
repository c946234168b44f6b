use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "amenities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: PrimitiveDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: PrimitiveDateTime,
    pub name: String,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        let (id, now) = super::fresh_identity();
        Self {
            id,
            created_at: now,
            updated_at: now,
            name: name.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::place_amenity::Entity")]
    PlaceAmenity,
}

impl Related<super::place_amenity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlaceAmenity.def()
    }
}

impl Related<super::places::Entity> for Entity {
    fn to() -> RelationDef {
        super::place_amenity::Relation::Place.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::place_amenity::Relation::Amenity.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
