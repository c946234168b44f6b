use hbnb_storage::entities::{cities, places, reviews, states, users};
use hbnb_storage::{ModelClass, Record};

#[test]
fn test_registry_order_and_names() {
    let names: Vec<&str> = ModelClass::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        ["State", "City", "User", "Place", "Review", "Amenity"]
    );
}

#[test]
fn test_each_class_maps_to_its_table() {
    let tables: Vec<&str> = ModelClass::ALL.iter().map(|c| c.table_name()).collect();
    assert_eq!(
        tables,
        ["states", "cities", "users", "places", "reviews", "amenities"]
    );
}

#[test]
fn test_record_class_follows_model_kind() {
    let state = states::Model::new("Nevada");
    let city = cities::Model::new(&state.id, "Reno");
    let user = users::Model::new("owner@hbnb.test", "pwd");
    let place = places::Model::new(&city.id, &user.id, "Loft");
    let review = reviews::Model::new(&place.id, &user.id, "Clean");

    let records = [
        Record::from(state),
        Record::from(city),
        Record::from(user),
        Record::from(place),
        Record::from(review),
    ];
    let classes: Vec<ModelClass> = records.iter().map(Record::class).collect();
    assert_eq!(classes, &ModelClass::ALL[..5]);

    for record in &records {
        assert_eq!(record.key(), format!("{}.{}", record.class(), record.id()));
    }
}

#[test]
fn test_new_records_start_with_matching_timestamps() {
    let user = users::Model::new("a@hbnb.test", "pwd");
    assert_eq!(user.created_at, user.updated_at);
    assert_eq!(Record::from(user.clone()).updated_at(), user.updated_at);
    assert!(user.first_name.is_none());
}
