//! Odyssey: a REST service for scientists, planets and the missions between them.

pub mod model;
pub mod server;
