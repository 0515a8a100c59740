use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, planet::PlanetDto, scientist::ScientistSummaryDto},
    server::{
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::planet::PlanetService,
    },
};

/// OpenAPI tag for planet routes
pub static PLANET_TAG: &str = "planet";

/// List all planets with their missions
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when listing planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a planet with its missions
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Success when retrieving planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(planet) = PlanetService::new(&state.db).get_planet(id).await? else {
        return Err(NotFoundError::Planet(id).into());
    };

    Ok((StatusCode::OK, Json(planet)))
}

/// List the distinct scientists with missions to a planet
#[utoipa::path(
    get,
    path = "/planets/{id}/scientists",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Success when listing scientists", body = Vec<ScientistSummaryDto>),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet_scientists(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let Some(scientists) = PlanetService::new(&state.db)
        .get_planet_scientists(id)
        .await?
    else {
        return Err(NotFoundError::Planet(id).into());
    };

    Ok((StatusCode::OK, Json(scientists)))
}
