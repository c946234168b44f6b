//! Storage builders and seed data for integration tests.

use std::path::Path;

use hbnb_storage::entities::{amenities, cities, places, states, users};
use hbnb_storage::{DbConfig, DbStorage, RuntimeEnv};
use storage_test_support::unique_helpers::{unique_email, unique_str};

/// Fresh in-memory storage in the test environment, already reloaded.
pub async fn loaded_memory_storage() -> DbStorage {
    let mut storage = DbStorage::connect(&DbConfig::sqlite_memory(RuntimeEnv::Test))
        .await
        .expect("connect in-memory storage");
    storage.reload().await.expect("reload in-memory storage");
    storage
}

/// Storage on a SQLite file, already reloaded.
pub async fn loaded_file_storage(path: &Path, env: RuntimeEnv) -> DbStorage {
    let mut storage = DbStorage::connect(&DbConfig::sqlite_file(path, env))
        .await
        .expect("connect file storage");
    storage.reload().await.expect("reload file storage");
    storage
}

pub fn state() -> states::Model {
    states::Model::new(unique_str("state"))
}

pub fn user() -> users::Model {
    users::Model::new(unique_email("user"), "pwd").with_name("Betty", "Holberton")
}

pub fn amenity() -> amenities::Model {
    amenities::Model::new(unique_str("amenity"))
}

/// A state, a city in it, a user and a place owned by the user in that city.
pub struct PlaceGraph {
    pub state: states::Model,
    pub city: cities::Model,
    pub user: users::Model,
    pub place: places::Model,
}

/// Stage and commit a full `PlaceGraph`.
pub async fn seed_place(storage: &mut DbStorage) -> PlaceGraph {
    let state = state();
    let city = cities::Model::new(&state.id, unique_str("city"));
    let user = user();
    let mut place = places::Model::new(&city.id, &user.id, unique_str("place"));
    place.number_rooms = 3;
    place.price_by_night = 120;
    place.latitude = Some(37.75);

    storage.new(state.clone()).await.expect("stage state");
    storage.new(city.clone()).await.expect("stage city");
    storage.new(user.clone()).await.expect("stage user");
    storage.new(place.clone()).await.expect("stage place");
    storage.save().await.expect("commit place graph");

    PlaceGraph {
        state,
        city,
        user,
        place,
    }
}
