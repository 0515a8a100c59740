//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with an [`AppState`] backed by an in-memory database,
//! verifying status codes and not-found/validation error mapping for every endpoint.

mod mission;
mod planet;
mod scientist;

use odyssey::server::model::app::AppState;
use odyssey_test_utils::prelude::*;
