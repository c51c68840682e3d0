use axum::{Router, routing};
use utoipa_axum::router::OpenApiRouter;

use crate::{app_state::AppState, swagger};

pub mod appointments;
pub mod doctors;
pub mod management;

pub fn api_router() -> OpenApiRouter<AppState> {
    doctors::routes_with_openapi()
        .merge(appointments::routes_with_openapi())
        .merge(management::routes_with_openapi())
}

/// The full application router: probe route, API routes, and Swagger UI.
pub fn app() -> Router<AppState> {
    let routes = api_router();

    let mut openapi = routes.get_openapi().clone();
    openapi.info = utoipa::openapi::InfoBuilder::new()
        .title("MediList DoctorService API")
        .version("1.0.0")
        .build();

    Router::new()
        .route("/", routing::get(|| async { "API is working" }))
        .merge(routes)
        .merge(swagger::create_swagger_ui(openapi))
}
