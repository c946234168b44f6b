use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "places")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_name = "created_at")]
    pub created_at: PrimitiveDateTime,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: PrimitiveDateTime,
    #[sea_orm(column_name = "city_id")]
    pub city_id: String,
    #[sea_orm(column_name = "user_id")]
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(column_name = "number_rooms")]
    pub number_rooms: i32,
    #[sea_orm(column_name = "number_bathrooms")]
    pub number_bathrooms: i32,
    #[sea_orm(column_name = "max_guest")]
    pub max_guest: i32,
    #[sea_orm(column_name = "price_by_night")]
    pub price_by_night: i32,
    pub latitude: Option<f32>,
    pub longitude: Option<f32>,
}

impl Model {
    pub fn new(
        city_id: impl Into<String>,
        user_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let (id, now) = super::fresh_identity();
        Self {
            id,
            created_at: now,
            updated_at: now,
            city_id: city_id.into(),
            user_id: user_id.into(),
            name: name.into(),
            description: None,
            number_rooms: 0,
            number_bathrooms: 0,
            max_guest: 0,
            price_by_night: 0,
            latitude: None,
            longitude: None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cities::Entity",
        from = "Column::CityId",
        to = "super::cities::Column::Id"
    )]
    City,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
    #[sea_orm(has_many = "super::place_amenity::Entity")]
    PlaceAmenity,
}

impl Related<super::cities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::place_amenity::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlaceAmenity.def()
    }
}

// Place <-> Amenity goes through the link table.
impl Related<super::amenities::Entity> for Entity {
    fn to() -> RelationDef {
        super::place_amenity::Relation::Amenity.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::place_amenity::Relation::Place.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
