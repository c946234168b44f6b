//! The fixed registry of storable classes and the record type that carries
//! one loaded row of any of them.

pub mod class;
pub mod record;

pub use class::ModelClass;
pub use record::Record;
