pub mod db_storage;
pub mod session;

pub use db_storage::DbStorage;
pub use session::Session;
