pub mod amenities;
pub mod cities;
pub mod place_amenity;
pub mod places;
pub mod reviews;
pub mod states;
pub mod users;

pub use amenities::Entity as Amenities;
pub use amenities::Model as Amenity;
pub use cities::Entity as Cities;
pub use cities::Model as City;
pub use place_amenity::Entity as PlaceAmenities;
pub use place_amenity::Model as PlaceAmenity;
pub use places::Entity as Places;
pub use places::Model as Place;
pub use reviews::Entity as Reviews;
pub use reviews::Model as Review;
pub use states::Entity as States;
pub use states::Model as State;
pub use users::Entity as Users;
pub use users::Model as User;

use time::{OffsetDateTime, PrimitiveDateTime};

/// Fresh `(id, now)` pair for a record that has never been stored.
pub(crate) fn fresh_identity() -> (String, PrimitiveDateTime) {
    let now = OffsetDateTime::now_utc();
    (
        uuid::Uuid::new_v4().to_string(),
        PrimitiveDateTime::new(now.date(), now.time()),
    )
}
