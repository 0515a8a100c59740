//! HTTP controller endpoints for the Odyssey web API.
//!
//! Controllers extract path & body inputs, delegate to the services, and map outcomes to
//! status codes. Each handler carries a utoipa annotation so it appears in the generated
//! OpenAPI document.

pub mod mission;
pub mod planet;
pub mod scientist;
