//! Infrastructure layer - database error translation.

pub mod db_errors;
