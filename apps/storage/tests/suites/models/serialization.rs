use hbnb_storage::entities::{amenities, places};
use hbnb_storage::Record;
use serde_json::Value;

#[test]
fn test_record_json_carries_class_tag() {
    let amenity = amenities::Model::new("Wifi");
    let json = serde_json::to_value(Record::from(amenity.clone())).unwrap();

    assert_eq!(json["__class__"], Value::from("Amenity"));
    assert_eq!(json["id"], Value::from(amenity.id.as_str()));
    assert_eq!(json["name"], Value::from("Wifi"));
    assert!(json.get("created_at").is_some());
}

#[test]
fn test_record_json_restores_the_same_variant() {
    let mut place = places::Model::new("city-1", "user-1", "Cabin");
    place.max_guest = 4;
    place.longitude = Some(-122.5);

    let text = serde_json::to_string(&Record::from(place.clone())).unwrap();
    let back: Record = serde_json::from_str(&text).unwrap();

    assert_eq!(back.as_place(), Some(&place));
}

#[test]
fn test_unknown_class_tag_is_rejected() {
    let err = serde_json::from_str::<Record>(r#"{"__class__":"BaseModel","id":"x"}"#);
    assert!(err.is_err());
}
