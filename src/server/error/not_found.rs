use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A record looked up by ID doesn't exist, carrying the requested ID.
#[derive(Error, Debug)]
pub enum NotFoundError {
    /// No scientist with this ID
    #[error("Scientist not found.")]
    Scientist(i32),
    /// No planet with this ID
    #[error("Planet not found.")]
    Planet(i32),
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        match &self {
            Self::Scientist(id) => tracing::debug!(scientist_id = %id, "{}", self),
            Self::Planet(id) => tracing::debug!(planet_id = %id, "{}", self),
        }

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
