use hbnb_storage::entities::{cities, reviews};
use hbnb_storage::{ModelClass, Record, StorageError};

use crate::support::factory::{self, loaded_memory_storage, seed_place};

#[tokio::test]
async fn test_city_with_unknown_state_violates_constraint() {
    let mut storage = loaded_memory_storage().await;
    let orphan = cities::Model::new("no-such-state", "Nowhere");

    let err = storage.new(orphan).await.unwrap_err();

    assert!(matches!(err, StorageError::Constraint { .. }), "got {err:?}");
    assert_eq!(err.code(), "CONSTRAINT_VIOLATION");
}

#[tokio::test]
async fn test_deleting_state_cascades_to_its_children() {
    let mut storage = loaded_memory_storage().await;
    let graph = seed_place(&mut storage).await;
    let review = reviews::Model::new(&graph.place.id, &graph.user.id, "Quiet street");
    storage.new(review).await.unwrap();
    storage.save().await.unwrap();

    storage
        .delete(Some(&Record::from(graph.state.clone())))
        .await
        .unwrap();
    storage.save().await.unwrap();

    assert_eq!(storage.count(Some(ModelClass::City)).await.unwrap(), 0);
    assert_eq!(storage.count(Some(ModelClass::Place)).await.unwrap(), 0);
    assert_eq!(storage.count(Some(ModelClass::Review)).await.unwrap(), 0);
    // The owner is not part of the state's tree.
    assert_eq!(storage.count(Some(ModelClass::User)).await.unwrap(), 1);
}

#[tokio::test]
async fn test_place_amenity_links() {
    let mut storage = loaded_memory_storage().await;
    let graph = seed_place(&mut storage).await;
    let wifi = factory::amenity();
    let pool = factory::amenity();
    storage.new(wifi.clone()).await.unwrap();
    storage.new(pool.clone()).await.unwrap();

    storage.link_amenity(&graph.place.id, &wifi.id).await.unwrap();
    storage.link_amenity(&graph.place.id, &pool.id).await.unwrap();
    // Linking twice keeps a single link.
    storage.link_amenity(&graph.place.id, &wifi.id).await.unwrap();
    storage.save().await.unwrap();

    let mut linked: Vec<String> = storage
        .place_amenities(&graph.place.id)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    linked.sort();
    let mut expected = vec![wifi.id.clone(), pool.id.clone()];
    expected.sort();
    assert_eq!(linked, expected);

    assert!(storage.unlink_amenity(&graph.place.id, &pool.id).await.unwrap());
    assert!(!storage.unlink_amenity(&graph.place.id, &pool.id).await.unwrap());
    storage.save().await.unwrap();

    let linked = storage.place_amenities(&graph.place.id).await.unwrap();
    assert_eq!(linked.len(), 1);
    assert_eq!(linked[0].id, wifi.id);
}

#[tokio::test]
async fn test_deleting_amenity_drops_its_links() {
    let mut storage = loaded_memory_storage().await;
    let graph = seed_place(&mut storage).await;
    let amenity = factory::amenity();
    storage.new(amenity.clone()).await.unwrap();
    storage.link_amenity(&graph.place.id, &amenity.id).await.unwrap();
    storage.save().await.unwrap();

    storage
        .delete(Some(&Record::from(amenity)))
        .await
        .unwrap();
    storage.save().await.unwrap();

    assert!(storage
        .place_amenities(&graph.place.id)
        .await
        .unwrap()
        .is_empty());
    assert_eq!(storage.count(Some(ModelClass::Place)).await.unwrap(), 1);
}
