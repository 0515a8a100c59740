//! Server application core modules.
//!
//! This module contains all server-side functionality for Odyssey: HTTP routing and
//! controllers, the SeaORM repositories backing scientists, planets and missions, field
//! validation run before every write, and the depth-limited serialization of entities and
//! their relations into API DTOs.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod serialize;
pub mod service;
pub mod startup;
pub mod validation;
