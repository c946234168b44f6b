use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use super::class::ModelClass;
use crate::entities::{amenities, cities, places, reviews, states, users};

/// One stored object of any class.
///
/// Serializes with a `__class__` tag next to the model's own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__class__")]
pub enum Record {
    State(states::Model),
    City(cities::Model),
    User(users::Model),
    Place(places::Model),
    Review(reviews::Model),
    Amenity(amenities::Model),
}

impl Record {
    pub fn class(&self) -> ModelClass {
        match self {
            Record::State(_) => ModelClass::State,
            Record::City(_) => ModelClass::City,
            Record::User(_) => ModelClass::User,
            Record::Place(_) => ModelClass::Place,
            Record::Review(_) => ModelClass::Review,
            Record::Amenity(_) => ModelClass::Amenity,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Record::State(m) => &m.id,
            Record::City(m) => &m.id,
            Record::User(m) => &m.id,
            Record::Place(m) => &m.id,
            Record::Review(m) => &m.id,
            Record::Amenity(m) => &m.id,
        }
    }

    /// Storage key, `"<ClassName>.<id>"`.
    pub fn key(&self) -> String {
        self.class().key(self.id())
    }

    pub fn updated_at(&self) -> PrimitiveDateTime {
        match self {
            Record::State(m) => m.updated_at,
            Record::City(m) => m.updated_at,
            Record::User(m) => m.updated_at,
            Record::Place(m) => m.updated_at,
            Record::Review(m) => m.updated_at,
            Record::Amenity(m) => m.updated_at,
        }
    }

    pub fn as_state(&self) -> Option<&states::Model> {
        match self {
            Record::State(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_city(&self) -> Option<&cities::Model> {
        match self {
            Record::City(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_user(&self) -> Option<&users::Model> {
        match self {
            Record::User(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_place(&self) -> Option<&places::Model> {
        match self {
            Record::Place(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_review(&self) -> Option<&reviews::Model> {
        match self {
            Record::Review(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_amenity(&self) -> Option<&amenities::Model> {
        match self {
            Record::Amenity(m) => Some(m),
            _ => None,
        }
    }
}

impl From<states::Model> for Record {
    fn from(m: states::Model) -> Self {
        Record::State(m)
    }
}

impl From<cities::Model> for Record {
    fn from(m: cities::Model) -> Self {
        Record::City(m)
    }
}

impl From<users::Model> for Record {
    fn from(m: users::Model) -> Self {
        Record::User(m)
    }
}

impl From<places::Model> for Record {
    fn from(m: places::Model) -> Self {
        Record::Place(m)
    }
}

impl From<reviews::Model> for Record {
    fn from(m: reviews::Model) -> Self {
        Record::Review(m)
    }
}

impl From<amenities::Model> for Record {
    fn from(m: amenities::Model) -> Self {
        Record::Amenity(m)
    }
}
