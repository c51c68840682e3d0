use anyhow::Context;
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use diesel_async::RunQueryDsl;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;

use crate::{
    app_error::{AppError, ErrorRes},
    app_state::AppState,
    availability::Availability,
    booking,
    models::DoctorEntity,
    schema::doctorsheet,
};

pub fn routes_with_openapi() -> OpenApiRouter<AppState> {
    utoipa_axum::router::OpenApiRouter::new().nest(
        "/api/management",
        OpenApiRouter::new()
            .routes(utoipa_axum::routes!(get_doctors))
            .routes(utoipa_axum::routes!(update_availability)),
    )
}

/// Fetch every doctor for the management view.
#[utoipa::path(
    get,
    path = "/",
    tags = ["Management"],
    responses(
        (status = 200, description = "All doctors", body = Vec<DoctorEntity>)
    )
)]
async fn get_doctors(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let doctors: Vec<DoctorEntity> = doctorsheet::table
        .get_results(conn)
        .await
        .context("Failed to get doctors")?;

    Ok(Json(doctors))
}

#[derive(Deserialize, ToSchema)]
struct UpdateAvailabilityReq {
    /// One of `Available`, `Appointed`, `Not Available`, `On Leave`.
    availability: String,
}

#[derive(Serialize, ToSchema)]
struct UpdateAvailabilityRes {
    message: &'static str,
}

/// Force-set a doctor's availability. Every status except `Appointed`
/// cascades a delete of the doctor's appointments.
#[utoipa::path(
    put,
    path = "/{id}",
    tags = ["Management"],
    params(
        ("id" = i32, Path, description = "Doctor ID to update")
    ),
    request_body = UpdateAvailabilityReq,
    responses(
        (status = 200, description = "Availability updated", body = UpdateAvailabilityRes),
        (status = 400, description = "Unknown availability status", body = ErrorRes),
        (status = 404, description = "Doctor not found", body = ErrorRes)
    )
)]
async fn update_availability(
    Path(id): Path<i32>,
    State(state): State<AppState>,
    Json(body): Json<UpdateAvailabilityReq>,
) -> Result<impl IntoResponse, AppError> {
    let new_status: Availability = body
        .availability
        .parse()
        .map_err(|err: crate::availability::UnknownAvailability| {
            AppError::InvalidInput(err.to_string())
        })?;

    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    booking::set_availability(conn, id, new_status).await?;

    Ok(Json(UpdateAvailabilityRes {
        message: "Doctor availability updated successfully",
    }))
}
