//! End-to-end tests driving the full router, including JSON extraction & serialization.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use odyssey::server::{data::mission::MissionRepository, startup::build_router};
use odyssey_test_utils::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> Response {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    router.clone().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Expect 201 with the created scientist, then 422 when repeating the same name
#[tokio::test]
async fn create_scientist_then_duplicate() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let router = build_router(test.db.clone());
    let payload = json!({ "name": "Ada", "field_of_study": "CS" });

    let response = send(&router, Method::POST, "/scientists", Some(payload.clone())).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert!(body["id"].is_i64());
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["field_of_study"], "CS");
    assert_eq!(body["avatar"], Value::Null);
    assert_eq!(body["missions"], json!([]));

    let response = send(&router, Method::POST, "/scientists", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_body(response).await;
    assert!(body["error"].is_string());

    Ok(())
}

/// Expect 422 and no row when the mission's scientist doesn't exist
#[tokio::test]
async fn create_mission_with_unknown_scientist() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let planet = test.fixtures().insert_planet("Mars").await?;
    let router = build_router(test.db.clone());

    let payload = json!({ "name": "Probe", "scientist_id": 999, "planet_id": planet.id });
    let response = send(&router, Method::POST, "/missions", Some(payload)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(MissionRepository::new(&test.db).get_all().await?.is_empty());

    Ok(())
}

/// Expect 201 with the planet & its missions, each mission carrying its scientist only
#[tokio::test]
async fn create_mission_returns_planet() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let scientist = test.fixtures().insert_scientist("Ada").await?;
    let planet = test.fixtures().insert_planet("Mars").await?;
    let router = build_router(test.db.clone());

    let payload = json!({ "name": "Probe", "scientist_id": scientist.id, "planet_id": planet.id });
    let response = send(&router, Method::POST, "/missions", Some(payload)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response).await;
    assert_eq!(body["id"], planet.id);
    assert_eq!(body["missions"][0]["name"], "Probe");
    assert_eq!(body["missions"][0]["scientist"]["id"], scientist.id);
    assert!(body["missions"][0].get("planet").is_none());
    assert!(body["missions"][0]["scientist"].get("missions").is_none());

    Ok(())
}

/// Expect a partial update to touch only the given fields & an unknown field to be rejected
#[tokio::test]
async fn patch_scientist() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let scientist = test.fixtures().insert_scientist("Ada").await?;
    let router = build_router(test.db.clone());
    let uri = format!("/scientists/{}", scientist.id);

    let response = send(
        &router,
        Method::PATCH,
        &uri,
        Some(json!({ "avatar": "ada.png" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let body = json_body(response).await;
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["avatar"], "ada.png");

    let response = send(&router, Method::PATCH, &uri, Some(json!({ "avatar": null }))).await;
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(json_body(response).await["avatar"], Value::Null);

    let response = send(&router, Method::PATCH, &uri, Some(json!({ "id": 42 }))).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json_body(response).await["error"].is_string());

    Ok(())
}

/// Expect 404 for an unknown scientist even when the body has an unknown field
#[tokio::test]
async fn patch_unknown_scientist_with_unknown_field() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let router = build_router(test.db.clone());

    let response = send(
        &router,
        Method::PATCH,
        "/scientists/999",
        Some(json!({ "nickname": "x" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "Scientist not found.");

    Ok(())
}

/// Expect 422 with an error body when a field has the wrong type
#[tokio::test]
async fn create_scientist_with_wrong_field_type() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let router = build_router(test.db.clone());

    let response = send(&router, Method::POST, "/scientists", Some(json!({ "name": 5 }))).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(json_body(response).await["error"].is_string());

    Ok(())
}

/// Expect 400 with an error body & no row when the mission body isn't JSON
#[tokio::test]
async fn create_mission_with_invalid_json() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let router = build_router(test.db.clone());

    let request = Request::builder()
        .method(Method::POST)
        .uri("/missions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(json_body(response).await["error"].is_string());
    assert!(MissionRepository::new(&test.db).get_all().await?.is_empty());

    Ok(())
}

/// Expect 204 with an empty body, then 404 for the deleted scientist
#[tokio::test]
async fn delete_scientist() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let (_, scientist, _) = test
        .fixtures()
        .insert_mission_with_relations("Probe", "Ada", "Mars")
        .await?;
    let router = build_router(test.db.clone());
    let uri = format!("/scientists/{}", scientist.id);

    let response = send(&router, Method::DELETE, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&router, Method::GET, &uri, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["error"], "Scientist not found.");

    let response = send(&router, Method::GET, "/missions", None).await;
    assert_eq!(json_body(response).await, json!([]));

    Ok(())
}

/// Expect the OpenAPI document to list the API paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_mission_tables!()?;
    let router = build_router(test.db.clone());

    let response = send(&router, Method::GET, "/api/docs/openapi.json", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert!(body["paths"]["/scientists/{id}"].is_object());
    assert!(body["paths"]["/missions"].is_object());

    Ok(())
}
