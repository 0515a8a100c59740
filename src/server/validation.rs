//! Field validation run before any record is written.
//!
//! Each mutable field has one check, invoked whenever that field is set on creation or
//! update. Checks return the accepted value so callers only ever persist validated data.
//! Checks that consult other records take a [`ConnectionTrait`] so they can run inside the
//! same transaction as the write they guard.

use sea_orm::{ConnectionTrait, DbErr, SqlErr};

use crate::server::{
    data::{planet::PlanetRepository, scientist::ScientistRepository},
    error::{validation::ValidationError, Error},
};

fn required(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ValidationError::InvalidField(field)),
    }
}

/// Validates a scientist name is present and not held by another scientist.
///
/// # Arguments
/// - `db` - Connection or transaction the uniqueness lookup runs on
/// - `name` - The requested name
/// - `scientist_id` - ID of the scientist being updated, excluded from the uniqueness check
///
/// # Returns
/// - `Ok(String)` - The accepted name
/// - `Err(Error::ValidationError(ValidationError::InvalidField))` - Name missing or empty
/// - `Err(Error::ValidationError(ValidationError::DuplicateEntity))` - Another scientist has this name
/// - `Err(Error::DbErr)` - The uniqueness lookup failed
pub async fn validate_scientist_name<C: ConnectionTrait>(
    db: &C,
    name: Option<String>,
    scientist_id: Option<i32>,
) -> Result<String, Error> {
    let name = required("Name", name)?;

    let existing = ScientistRepository::new(db).get_by_name(&name).await?;
    match existing {
        Some(existing) if Some(existing.id) != scientist_id => {
            Err(ValidationError::DuplicateEntity {
                entity: "Scientist",
                value: name,
            }
            .into())
        }
        _ => Ok(name),
    }
}

/// Validates a scientist's field of study is present and non-empty.
pub fn validate_field_of_study(field_of_study: Option<String>) -> Result<String, ValidationError> {
    required("Field of study", field_of_study)
}

/// Validates a mission name is present and non-empty.
pub fn validate_mission_name(name: Option<String>) -> Result<String, ValidationError> {
    required("Name", name)
}

/// Validates a mission's scientist ID is present and references an existing scientist.
///
/// # Returns
/// - `Ok(i32)` - The accepted scientist ID
/// - `Err(Error::ValidationError(ValidationError::InvalidField))` - ID missing
/// - `Err(Error::ValidationError(ValidationError::DanglingReference))` - No scientist with this ID
/// - `Err(Error::DbErr)` - The lookup failed
pub async fn validate_mission_scientist_id<C: ConnectionTrait>(
    db: &C,
    scientist_id: Option<i32>,
) -> Result<i32, Error> {
    let Some(scientist_id) = scientist_id else {
        return Err(ValidationError::InvalidField("Scientist").into());
    };

    if ScientistRepository::new(db)
        .get_by_id(scientist_id)
        .await?
        .is_none()
    {
        return Err(ValidationError::DanglingReference {
            entity: "Scientist",
            id: scientist_id,
        }
        .into());
    }

    Ok(scientist_id)
}

/// Validates a mission's planet ID is present and references an existing planet.
///
/// # Returns
/// - `Ok(i32)` - The accepted planet ID
/// - `Err(Error::ValidationError(ValidationError::InvalidField))` - ID missing
/// - `Err(Error::ValidationError(ValidationError::DanglingReference))` - No planet with this ID
/// - `Err(Error::DbErr)` - The lookup failed
pub async fn validate_mission_planet_id<C: ConnectionTrait>(
    db: &C,
    planet_id: Option<i32>,
) -> Result<i32, Error> {
    let Some(planet_id) = planet_id else {
        return Err(ValidationError::InvalidField("Planet").into());
    };

    if PlanetRepository::new(db).get_by_id(planet_id).await?.is_none() {
        return Err(ValidationError::DanglingReference {
            entity: "Planet",
            id: planet_id,
        }
        .into());
    }

    Ok(planet_id)
}

/// Maps a unique constraint violation on the scientist name index to a duplicate error.
///
/// Covers the window where a concurrent write commits the same name after
/// [`validate_scientist_name`] ran; any other database error is passed through.
pub fn scientist_name_conflict(err: DbErr, name: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ValidationError::DuplicateEntity {
            entity: "Scientist",
            value: name.to_string(),
        }
        .into(),
        _ => err.into(),
    }
}
