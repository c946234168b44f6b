//! SeaORM adapters: the only code that builds queries against the entities.

pub mod records_sea;
