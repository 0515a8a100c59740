//! Tests for the mission endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use odyssey::{
    model::mission::CreateMissionDto,
    server::{
        controller::mission::{create_mission, get_missions},
        data::mission::MissionRepository,
    },
};

use super::*;

/// Expect 200 when listing missions
#[tokio::test]
async fn lists_missions() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    test.fixtures()
        .insert_mission_with_relations("Probe", "Ada", "Mars")
        .await?;

    let result = get_missions(State(test.state::<AppState>())).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect 201 when creating a mission with valid references
#[tokio::test]
async fn creates_mission() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let scientist = test.fixtures().insert_scientist("Ada").await?;
    let planet = test.fixtures().insert_planet("Mars").await?;

    let payload = CreateMissionDto {
        name: Some("Probe".to_string()),
        scientist_id: Some(scientist.id),
        planet_id: Some(planet.id),
    };
    let result = create_mission(State(test.state::<AppState>()), Ok(Json(payload))).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);
    assert_eq!(MissionRepository::new(&test.db).get_all().await?.len(), 1);

    Ok(())
}

/// Expect 422 & no mission persisted when a reference is missing
#[tokio::test]
async fn rejects_missing_planet_with_422() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let scientist = test.fixtures().insert_scientist("Ada").await?;

    let payload = CreateMissionDto {
        name: Some("Probe".to_string()),
        scientist_id: Some(scientist.id),
        planet_id: None,
    };
    let result = create_mission(State(test.state::<AppState>()), Ok(Json(payload))).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert!(MissionRepository::new(&test.db).get_all().await?.is_empty());

    Ok(())
}
