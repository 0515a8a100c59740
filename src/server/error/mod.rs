//! Error types for the Odyssey server application.
//!
//! Domain errors are split by how they surface to API consumers: validation failures
//! (422), missing records (404), unreadable request bodies (axum's rejection status) and
//! storage failures (500). Every error reaching a handler responds with an [`ErrorDto`]
//! body. [`config::ConfigError`] is only raised before the server starts.

pub mod config;
pub mod not_found;
pub mod validation;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{not_found::NotFoundError, validation::ValidationError},
};

/// Main error type for the Odyssey server application.
///
/// Aggregates the domain-specific error types and external library errors into a single
/// type, with `#[from]` conversions so `?` works across layers.
#[derive(Error, Debug)]
pub enum Error {
    /// A field failed validation before a write was attempted.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// A lookup by ID found no record.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// The request body was missing, not JSON, or didn't match the expected shape.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
    /// Internal error indicating a bug, such as a mission whose scientist row is missing
    /// despite the foreign key constraint.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 422 Unprocessable Entity - For validation failures
/// - 404 Not Found - For unknown IDs
/// - 400/415/422 - For request bodies axum's `Json` extractor rejected
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            Self::JsonRejection(rejection) => {
                tracing::debug!("Rejected request body: {}", rejection.body_text());

                (
                    rejection.status(),
                    Json(ErrorDto {
                        error: rejection.body_text(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// storage details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
