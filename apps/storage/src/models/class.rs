use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::error::StorageError;

/// One of the six storable classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelClass {
    State,
    City,
    User,
    Place,
    Review,
    Amenity,
}

impl ModelClass {
    /// Every class, in the order `all()` queries them.
    pub const ALL: [ModelClass; 6] = [
        ModelClass::State,
        ModelClass::City,
        ModelClass::User,
        ModelClass::Place,
        ModelClass::Review,
        ModelClass::Amenity,
    ];

    /// Class name used as the prefix of storage keys.
    pub fn name(self) -> &'static str {
        match self {
            ModelClass::State => "State",
            ModelClass::City => "City",
            ModelClass::User => "User",
            ModelClass::Place => "Place",
            ModelClass::Review => "Review",
            ModelClass::Amenity => "Amenity",
        }
    }

    pub fn table_name(self) -> &'static str {
        match self {
            ModelClass::State => "states",
            ModelClass::City => "cities",
            ModelClass::User => "users",
            ModelClass::Place => "places",
            ModelClass::Review => "reviews",
            ModelClass::Amenity => "amenities",
        }
    }

    /// `"<ClassName>.<id>"`
    pub fn key(self, id: &str) -> String {
        format!("{}.{}", self.name(), id)
    }
}

impl Display for ModelClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl FromStr for ModelClass {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelClass::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| StorageError::UnknownClass(s.to_string()))
    }
}

impl TryFrom<&str> for ModelClass {
    type Error = StorageError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
