//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here together with its OpenAPI specification, and
//! Swagger UI serves the collected document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /scientists` - List scientists with their missions
/// - `POST /scientists` - Create a scientist
/// - `GET /scientists/{id}` - Get a scientist
/// - `PATCH /scientists/{id}` - Partially update a scientist
/// - `DELETE /scientists/{id}` - Delete a scientist & their missions
/// - `GET /scientists/{id}/planets` - Distinct planets a scientist has visited
/// - `GET /planets` - List planets with their missions
/// - `GET /planets/{id}` - Get a planet
/// - `GET /planets/{id}/scientists` - Distinct scientists who visited a planet
/// - `GET /missions` - List missions with their scientist & planet
/// - `POST /missions` - Create a mission
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` that still needs its state provided.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Odyssey", description = "Odyssey API"), tags(
        (name = controller::scientist::SCIENTIST_TAG, description = "Scientist API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
        (name = controller::mission::MISSION_TAG, description = "Mission API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::scientist::get_scientists,
            controller::scientist::create_scientist
        ))
        .routes(routes!(
            controller::scientist::get_scientist,
            controller::scientist::update_scientist,
            controller::scientist::delete_scientist
        ))
        .routes(routes!(controller::scientist::get_scientist_planets))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(controller::planet::get_planet_scientists))
        .routes(routes!(
            controller::mission::get_missions,
            controller::mission::create_mission
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
