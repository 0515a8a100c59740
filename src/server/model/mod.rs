//! Server application models and type definitions.
//!
//! Application state shared by HTTP handlers and type aliases for the SeaORM models.

pub mod app;
pub mod db;
