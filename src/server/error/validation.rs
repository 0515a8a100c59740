use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A field failed validation, the triggering write was not attempted.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing, null, or empty.
    #[error("{0} must be provided.")]
    InvalidField(&'static str),
    /// Another record already holds a value that must be unique.
    #[error("{entity} named {value:?} already exists.")]
    DuplicateEntity {
        /// Kind of record, e.g. `Scientist`
        entity: &'static str,
        /// The value already taken
        value: String,
    },
    /// A foreign key points at a record that doesn't exist.
    #[error("{entity} with ID {id} does not exist.")]
    DanglingReference {
        /// Kind of record referenced, e.g. `Planet`
        entity: &'static str,
        /// The referenced ID
        id: i32,
    },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("Validation failed: {}", self);

        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
