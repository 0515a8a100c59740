//! Tests for the scientist endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use odyssey::{
    model::scientist::{CreateScientistDto, UpdateScientistDto},
    server::{
        controller::scientist::{
            create_scientist, delete_scientist, get_scientist, get_scientist_planets,
            get_scientists, update_scientist,
        },
        data::{mission::MissionRepository, scientist::ScientistRepository},
    },
};

use super::*;

/// Expect 200 when listing scientists
#[tokio::test]
async fn lists_scientists() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    test.fixtures().insert_scientist("Ada").await?;

    let result = get_scientists(State(test.state::<AppState>())).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect 201 when creating a scientist with valid fields
#[tokio::test]
async fn creates_scientist() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;

    let payload = CreateScientistDto {
        name: Some("Ada".to_string()),
        field_of_study: Some("CS".to_string()),
        avatar: None,
    };
    let result = create_scientist(State(test.state::<AppState>()), Ok(Json(payload))).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 422 & nothing persisted when the name is empty
#[tokio::test]
async fn rejects_empty_name_with_422() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;

    let payload = CreateScientistDto {
        name: Some(String::new()),
        field_of_study: Some("CS".to_string()),
        avatar: None,
    };
    let result = create_scientist(State(test.state::<AppState>()), Ok(Json(payload))).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );
    assert!(ScientistRepository::new(&test.db).get_all().await?.is_empty());

    Ok(())
}

/// Expect 200 for an existing scientist
#[tokio::test]
async fn gets_scientist() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let scientist = test.fixtures().insert_scientist("Ada").await?;

    let result = get_scientist(State(test.state::<AppState>()), Path(scientist.id)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 for an unknown scientist
#[tokio::test]
async fn get_unknown_scientist_returns_404() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;

    let result = get_scientist(State(test.state::<AppState>()), Path(1)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 202 when updating an existing scientist
#[tokio::test]
async fn updates_scientist() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let scientist = test.fixtures().insert_scientist("Ada").await?;

    let payload = UpdateScientistDto {
        field_of_study: Some(Some("Mathematics".to_string())),
        ..Default::default()
    };
    let result = update_scientist(
        State(test.state::<AppState>()),
        Path(scientist.id),
        Ok(Json(payload)),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::ACCEPTED);

    Ok(())
}

/// Expect 404 when updating an unknown scientist, even with an invalid payload
#[tokio::test]
async fn update_unknown_scientist_returns_404() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;

    let payload = UpdateScientistDto {
        name: Some(None),
        ..Default::default()
    };
    let result = update_scientist(State(test.state::<AppState>()), Path(1), Ok(Json(payload))).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 422 when updating to a name held by another scientist
#[tokio::test]
async fn update_to_taken_name_returns_422() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    test.fixtures().insert_scientist("Ada").await?;
    let grace = test.fixtures().insert_scientist("Grace").await?;

    let payload = UpdateScientistDto {
        name: Some(Some("Ada".to_string())),
        ..Default::default()
    };
    let result = update_scientist(
        State(test.state::<AppState>()),
        Path(grace.id),
        Ok(Json(payload)),
    )
    .await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::UNPROCESSABLE_ENTITY
    );

    Ok(())
}

/// Expect 204 and the scientist's missions removed
#[tokio::test]
async fn deletes_scientist_with_missions() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let (_, scientist, planet) = test
        .fixtures()
        .insert_mission_with_relations("Probe", "Ada", "Mars")
        .await?;
    test.fixtures()
        .insert_mission("Rover", scientist.id, planet.id)
        .await?;

    let result = delete_scientist(State(test.state::<AppState>()), Path(scientist.id)).await;

    assert!(result.is_ok());
    assert_eq!(
        result.unwrap().into_response().status(),
        StatusCode::NO_CONTENT
    );
    assert!(MissionRepository::new(&test.db).get_all().await?.is_empty());
    assert!(ScientistRepository::new(&test.db)
        .get_by_id(scientist.id)
        .await?
        .is_none());

    Ok(())
}

/// Expect 404 when deleting an unknown scientist
#[tokio::test]
async fn delete_unknown_scientist_returns_404() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;

    let result = delete_scientist(State(test.state::<AppState>()), Path(1)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 200 for the planets of an existing scientist & 404 for an unknown one
#[tokio::test]
async fn gets_scientist_planets() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let (_, scientist, _) = test
        .fixtures()
        .insert_mission_with_relations("Probe", "Ada", "Mars")
        .await?;

    let found = get_scientist_planets(State(test.state::<AppState>()), Path(scientist.id)).await;
    let missing = get_scientist_planets(State(test.state::<AppState>()), Path(999)).await;

    assert_eq!(found.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(
        missing.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
