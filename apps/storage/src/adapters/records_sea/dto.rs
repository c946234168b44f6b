//! Fully-`Set` active models for writing a record back.
//!
//! SeaORM's `From<Model>` produces `Unchanged` values, which an UPDATE skips.
//! Writing goes through these so every column is sent.

use sea_orm::Set;

use crate::entities::{amenities, cities, places, reviews, states, users};

pub fn state_active(m: &states::Model) -> states::ActiveModel {
    states::ActiveModel {
        id: Set(m.id.clone()),
        created_at: Set(m.created_at),
        updated_at: Set(m.updated_at),
        name: Set(m.name.clone()),
    }
}

pub fn city_active(m: &cities::Model) -> cities::ActiveModel {
    cities::ActiveModel {
        id: Set(m.id.clone()),
        created_at: Set(m.created_at),
        updated_at: Set(m.updated_at),
        state_id: Set(m.state_id.clone()),
        name: Set(m.name.clone()),
    }
}

pub fn user_active(m: &users::Model) -> users::ActiveModel {
    users::ActiveModel {
        id: Set(m.id.clone()),
        created_at: Set(m.created_at),
        updated_at: Set(m.updated_at),
        email: Set(m.email.clone()),
        password: Set(m.password.clone()),
        first_name: Set(m.first_name.clone()),
        last_name: Set(m.last_name.clone()),
    }
}

pub fn place_active(m: &places::Model) -> places::ActiveModel {
    places::ActiveModel {
        id: Set(m.id.clone()),
        created_at: Set(m.created_at),
        updated_at: Set(m.updated_at),
        city_id: Set(m.city_id.clone()),
        user_id: Set(m.user_id.clone()),
        name: Set(m.name.clone()),
        description: Set(m.description.clone()),
        number_rooms: Set(m.number_rooms),
        number_bathrooms: Set(m.number_bathrooms),
        max_guest: Set(m.max_guest),
        price_by_night: Set(m.price_by_night),
        latitude: Set(m.latitude),
        longitude: Set(m.longitude),
    }
}

pub fn review_active(m: &reviews::Model) -> reviews::ActiveModel {
    reviews::ActiveModel {
        id: Set(m.id.clone()),
        created_at: Set(m.created_at),
        updated_at: Set(m.updated_at),
        place_id: Set(m.place_id.clone()),
        user_id: Set(m.user_id.clone()),
        text: Set(m.text.clone()),
    }
}

pub fn amenity_active(m: &amenities::Model) -> amenities::ActiveModel {
    amenities::ActiveModel {
        id: Set(m.id.clone()),
        created_at: Set(m.created_at),
        updated_at: Set(m.updated_at),
        name: Set(m.name.clone()),
    }
}
