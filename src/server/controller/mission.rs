use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        mission::{CreateMissionDto, MissionDto},
        planet::PlanetDto,
    },
    server::{error::Error, model::app::AppState, service::mission::MissionService},
};

/// OpenAPI tag for mission routes
pub static MISSION_TAG: &str = "mission";

/// List all missions with their scientist & planet
#[utoipa::path(
    get,
    path = "/missions",
    tag = MISSION_TAG,
    responses(
        (status = 200, description = "Success when listing missions", body = Vec<MissionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_missions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let missions = MissionService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(missions)))
}

/// Create a mission
///
/// Responds with the mission's planet, including all of its missions.
#[utoipa::path(
    post,
    path = "/missions",
    tag = MISSION_TAG,
    request_body = CreateMissionDto,
    responses(
        (status = 201, description = "Mission created", body = PlanetDto),
        (status = 400, description = "Request body is not valid JSON", body = ErrorDto),
        (status = 422, description = "Missing field, wrong field type or unknown scientist/planet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mission(
    State(state): State<AppState>,
    payload: Result<Json<CreateMissionDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let planet = MissionService::new(&state.db).create_mission(payload).await?;

    Ok((StatusCode::CREATED, Json(planet)))
}
