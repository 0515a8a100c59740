use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        planet::PlanetSummaryDto,
        scientist::{CreateScientistDto, ScientistDto, UpdateScientistDto},
    },
    server::{
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::scientist::ScientistService,
    },
};

/// OpenAPI tag for scientist routes
pub static SCIENTIST_TAG: &str = "scientist";

/// List all scientists with their missions
#[utoipa::path(
    get,
    path = "/scientists",
    tag = SCIENTIST_TAG,
    responses(
        (status = 200, description = "Success when listing scientists", body = Vec<ScientistDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scientists(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let scientists = ScientistService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(scientists)))
}

/// Create a scientist
#[utoipa::path(
    post,
    path = "/scientists",
    tag = SCIENTIST_TAG,
    request_body = CreateScientistDto,
    responses(
        (status = 201, description = "Scientist created", body = ScientistDto),
        (status = 400, description = "Request body is not valid JSON", body = ErrorDto),
        (status = 422, description = "Missing field, wrong field type or duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_scientist(
    State(state): State<AppState>,
    payload: Result<Json<CreateScientistDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let scientist = ScientistService::new(&state.db)
        .create_scientist(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(scientist)))
}

/// Get a scientist with their missions
#[utoipa::path(
    get,
    path = "/scientists/{id}",
    tag = SCIENTIST_TAG,
    params(("id" = i32, Path, description = "Scientist ID")),
    responses(
        (status = 200, description = "Success when retrieving scientist", body = ScientistDto),
        (status = 404, description = "Scientist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scientist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(scientist) = ScientistService::new(&state.db).get_scientist(id).await? else {
        return Err(NotFoundError::Scientist(id).into());
    };

    Ok((StatusCode::OK, Json(scientist)))
}

/// Partially update a scientist
///
/// Only `name`, `field_of_study` & `avatar` may be sent; each field present is validated
/// as on creation. `avatar: null` clears the avatar. An unknown ID is reported as 404 even
/// when the body is unreadable.
#[utoipa::path(
    patch,
    path = "/scientists/{id}",
    tag = SCIENTIST_TAG,
    params(("id" = i32, Path, description = "Scientist ID")),
    request_body = UpdateScientistDto,
    responses(
        (status = 202, description = "Scientist updated", body = ScientistDto),
        (status = 400, description = "Request body is not valid JSON", body = ErrorDto),
        (status = 404, description = "Scientist not found", body = ErrorDto),
        (status = 422, description = "Invalid field, unknown field or duplicate name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_scientist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateScientistDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let scientist_service = ScientistService::new(&state.db);

    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            if !scientist_service.scientist_exists(id).await? {
                return Err(NotFoundError::Scientist(id).into());
            }

            return Err(rejection.into());
        }
    };

    let Some(scientist) = scientist_service
        .update_scientist(id, payload)
        .await?
    else {
        return Err(NotFoundError::Scientist(id).into());
    };

    Ok((StatusCode::ACCEPTED, Json(scientist)))
}

/// Delete a scientist along with all of their missions
#[utoipa::path(
    delete,
    path = "/scientists/{id}",
    tag = SCIENTIST_TAG,
    params(("id" = i32, Path, description = "Scientist ID")),
    responses(
        (status = 204, description = "Scientist deleted"),
        (status = 404, description = "Scientist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_scientist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if !ScientistService::new(&state.db).delete_scientist(id).await? {
        return Err(NotFoundError::Scientist(id).into());
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List the distinct planets a scientist has missions to
#[utoipa::path(
    get,
    path = "/scientists/{id}/planets",
    tag = SCIENTIST_TAG,
    params(("id" = i32, Path, description = "Scientist ID")),
    responses(
        (status = 200, description = "Success when listing planets", body = Vec<PlanetSummaryDto>),
        (status = 404, description = "Scientist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_scientist_planets(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(planets) = ScientistService::new(&state.db)
        .get_scientist_planets(id)
        .await?
    else {
        return Err(NotFoundError::Scientist(id).into());
    };

    Ok((StatusCode::OK, Json(planets)))
}
