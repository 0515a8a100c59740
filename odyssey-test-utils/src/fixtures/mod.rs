//! Test fixture modules for database records.
//!
//! - `data` - inserts scientist, planet & mission rows into the test database
//! - `factory` - builds in-memory models without touching the database

pub mod data;
pub mod factory;
