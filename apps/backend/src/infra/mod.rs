//! Infrastructure layer - database connection, schema bootstrap, state building
//! and DB error translation.

pub mod db;
pub mod db_errors;
pub mod schema;
pub mod state;
