//! Test support shared by the storage crate's integration tests:
//! logging initialisation and unique-value helpers.

pub mod logging;
pub mod unique_helpers;
