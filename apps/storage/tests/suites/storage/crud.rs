use hbnb_storage::entities::{reviews, states};
use hbnb_storage::{ModelClass, Record, StorageError};

use crate::support::factory::{self, loaded_memory_storage, seed_place};

#[tokio::test]
async fn test_saved_object_is_listed_under_its_key() {
    let mut storage = loaded_memory_storage().await;
    let state = factory::state();

    let key = storage.new(state.clone()).await.unwrap();
    storage.save().await.unwrap();

    assert_eq!(key, format!("State.{}", state.id));
    let objects = storage.all(Some(ModelClass::State)).await.unwrap();
    let stored = objects.get(&key).and_then(Record::as_state).unwrap();
    assert_eq!(stored.id, state.id);
    assert_eq!(stored.name, state.name);
}

#[tokio::test]
async fn test_delete_then_save_removes_object() {
    let mut storage = loaded_memory_storage().await;
    let record = Record::from(factory::amenity());

    storage.new(record.clone()).await.unwrap();
    storage.save().await.unwrap();
    storage.delete(Some(&record)).await.unwrap();
    storage.save().await.unwrap();

    let objects = storage.all(None).await.unwrap();
    assert!(!objects.contains_key(&record.key()));
    assert_eq!(storage.count(Some(ModelClass::Amenity)).await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_none_is_a_no_op() {
    let mut storage = loaded_memory_storage().await;
    storage.new(factory::state()).await.unwrap();
    storage.save().await.unwrap();

    storage.delete(None).await.unwrap();
    storage.save().await.unwrap();

    assert_eq!(storage.count(None).await.unwrap(), 1);
}

#[tokio::test]
async fn test_deleting_unknown_object_is_not_an_error() {
    let mut storage = loaded_memory_storage().await;
    let never_stored = Record::from(factory::state());

    storage.delete(Some(&never_stored)).await.unwrap();
    storage.save().await.unwrap();
}

#[tokio::test]
async fn test_all_without_class_spans_every_class() {
    let mut storage = loaded_memory_storage().await;
    let graph = seed_place(&mut storage).await;
    let review = reviews::Model::new(&graph.place.id, &graph.user.id, "Great stay");
    let amenity = factory::amenity();
    storage.new(review.clone()).await.unwrap();
    storage.new(amenity.clone()).await.unwrap();
    storage.save().await.unwrap();

    let objects = storage.all(None).await.unwrap();
    assert_eq!(objects.len(), 6);
    for key in [
        format!("State.{}", graph.state.id),
        format!("City.{}", graph.city.id),
        format!("User.{}", graph.user.id),
        format!("Place.{}", graph.place.id),
        format!("Review.{}", review.id),
        format!("Amenity.{}", amenity.id),
    ] {
        assert!(objects.contains_key(&key), "missing {key}");
    }
    for (key, record) in &objects {
        assert_eq!(key, &record.key());
    }
}

#[tokio::test]
async fn test_all_with_class_only_returns_that_class() {
    let mut storage = loaded_memory_storage().await;
    let graph = seed_place(&mut storage).await;

    let cities = storage.all(Some(ModelClass::City)).await.unwrap();
    assert_eq!(cities.len(), 1);
    assert!(cities.values().all(|r| r.class() == ModelClass::City));
    assert!(cities.contains_key(&format!("City.{}", graph.city.id)));

    let reviews = storage.all(Some(ModelClass::Review)).await.unwrap();
    assert!(reviews.is_empty());
}

#[tokio::test]
async fn test_all_by_name_matches_all_by_class() {
    let mut storage = loaded_memory_storage().await;
    seed_place(&mut storage).await;

    let by_name = storage.all_by_name(Some("User")).await.unwrap();
    let by_class = storage.all(Some(ModelClass::User)).await.unwrap();
    assert_eq!(
        by_name.keys().collect::<Vec<_>>(),
        by_class.keys().collect::<Vec<_>>()
    );

    let everything = storage.all_by_name(None).await.unwrap();
    assert_eq!(everything.len(), 4);
}

#[tokio::test]
async fn test_all_by_unknown_name_fails() {
    let mut storage = loaded_memory_storage().await;

    let err = storage.all_by_name(Some("BaseModel")).await.unwrap_err();
    assert!(matches!(err, StorageError::UnknownClass(ref name) if name == "BaseModel"));
    assert_eq!(err.code(), "UNKNOWN_CLASS");
}

#[tokio::test]
async fn test_new_with_stored_id_updates_in_place() {
    let mut storage = loaded_memory_storage().await;
    let mut state = states::Model::new("Californa");
    storage.new(state.clone()).await.unwrap();
    storage.save().await.unwrap();

    state.name = "California".to_string();
    storage.new(state.clone()).await.unwrap();
    storage.save().await.unwrap();

    assert_eq!(storage.count(Some(ModelClass::State)).await.unwrap(), 1);
    let stored = storage
        .get(ModelClass::State, &state.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.as_state().unwrap().name, "California");
}

#[tokio::test]
async fn test_get_returns_none_for_unknown_id() {
    let mut storage = loaded_memory_storage().await;
    let graph = seed_place(&mut storage).await;

    assert!(storage
        .get(ModelClass::Place, "missing")
        .await
        .unwrap()
        .is_none());

    let place = storage
        .get(ModelClass::Place, &graph.place.id)
        .await
        .unwrap()
        .unwrap();
    let place = place.as_place().unwrap();
    assert_eq!(place.number_rooms, 3);
    assert_eq!(place.price_by_night, 120);
    assert_eq!(place.latitude, Some(37.75));
    assert_eq!(place.description, None);
}

#[tokio::test]
async fn test_count_per_class_and_total() {
    let mut storage = loaded_memory_storage().await;
    assert_eq!(storage.count(None).await.unwrap(), 0);

    seed_place(&mut storage).await;
    storage.new(factory::state()).await.unwrap();
    storage.save().await.unwrap();

    assert_eq!(storage.count(Some(ModelClass::State)).await.unwrap(), 2);
    assert_eq!(storage.count(Some(ModelClass::Place)).await.unwrap(), 1);
    assert_eq!(storage.count(None).await.unwrap(), 5);
}
