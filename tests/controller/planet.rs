//! Tests for the planet endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use odyssey::server::controller::planet::{get_planet, get_planet_scientists, get_planets};

use super::*;

/// Expect 200 when listing planets
#[tokio::test]
async fn lists_planets() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    test.fixtures().insert_planet("Mars").await?;

    let result = get_planets(State(test.state::<AppState>())).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 for an existing planet
#[tokio::test]
async fn gets_planet() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let planet = test.fixtures().insert_planet("Mars").await?;

    let result = get_planet(State(test.state::<AppState>()), Path(planet.id)).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().into_response().status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 for an unknown planet
#[tokio::test]
async fn get_unknown_planet_returns_404() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;

    let result = get_planet(State(test.state::<AppState>()), Path(1)).await;

    assert!(result.is_err());
    assert_eq!(
        result.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}

/// Expect 200 for the scientists of an existing planet & 404 for an unknown one
#[tokio::test]
async fn gets_planet_scientists() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let (_, _, planet) = test
        .fixtures()
        .insert_mission_with_relations("Probe", "Ada", "Mars")
        .await?;

    let found = get_planet_scientists(State(test.state::<AppState>()), Path(planet.id)).await;
    let missing = get_planet_scientists(State(test.state::<AppState>()), Path(999)).await;

    assert_eq!(found.unwrap().into_response().status(), StatusCode::OK);
    assert_eq!(
        missing.err().unwrap().into_response().status(),
        StatusCode::NOT_FOUND
    );

    Ok(())
}
