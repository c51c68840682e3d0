use anyhow::Context;
use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;
use utoipa_axum::router::OpenApiRouter;

use crate::{app_error::AppError, app_state::AppState, directory, models::DoctorEntity};

pub fn routes_with_openapi() -> OpenApiRouter<AppState> {
    utoipa_axum::router::OpenApiRouter::new().nest(
        "/api/doctors",
        OpenApiRouter::new().routes(utoipa_axum::routes!(search_doctors)),
    )
}

#[derive(Deserialize, IntoParams)]
struct SearchQuery {
    /// Substring matched against doctor name or specialization.
    search: Option<String>,
}

/// Search doctors by name or specialization; an empty query returns all.
#[utoipa::path(
    get,
    path = "/search",
    tags = ["Doctors"],
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching doctors", body = Vec<DoctorEntity>)
    )
)]
async fn search_doctors(
    Query(query): Query<SearchQuery>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let doctors = directory::search_doctors(conn, query.search).await?;

    Ok(Json(doctors))
}
