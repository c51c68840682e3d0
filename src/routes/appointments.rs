use anyhow::Context;
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use diesel_async::RunQueryDsl;
use serde::Serialize;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use uuid::Uuid;

use crate::{
    app_error::{AppError, ErrorRes},
    app_state::AppState,
    booking::{self, BookAppointmentReq},
    models::AppointmentEntity,
    schema::appointments,
};

pub fn routes_with_openapi() -> OpenApiRouter<AppState> {
    utoipa_axum::router::OpenApiRouter::new().nest(
        "/api",
        OpenApiRouter::new()
            .routes(utoipa_axum::routes!(book_appointment))
            .routes(utoipa_axum::routes!(get_appointments))
            .routes(utoipa_axum::routes!(cancel_appointment)),
    )
}

#[derive(Serialize, ToSchema)]
struct BookAppointmentRes {
    message: &'static str,
    id: Uuid,
}

/// Book an appointment with an available doctor.
#[utoipa::path(
    post,
    path = "/book",
    tags = ["Appointments"],
    request_body = BookAppointmentReq,
    responses(
        (status = 200, description = "Appointment booked", body = BookAppointmentRes),
        (status = 400, description = "Missing fields or doctor unavailable", body = ErrorRes),
        (status = 404, description = "Doctor not found", body = ErrorRes)
    )
)]
async fn book_appointment(
    State(state): State<AppState>,
    Json(body): Json<BookAppointmentReq>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let id = booking::try_book(conn, body).await?;

    Ok(Json(BookAppointmentRes {
        message: "Appointment booked successfully",
        id,
    }))
}

/// Fetch every appointment currently on the books. No ordering guarantee.
#[utoipa::path(
    get,
    path = "/appointments",
    tags = ["Appointments"],
    responses(
        (status = 200, description = "All appointments", body = Vec<AppointmentEntity>)
    )
)]
async fn get_appointments(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    let appointments: Vec<AppointmentEntity> = appointments::table
        .get_results(conn)
        .await
        .context("Failed to get appointments")?;

    Ok(Json(appointments))
}

#[derive(Serialize, ToSchema)]
struct CancelAppointmentRes {
    message: &'static str,
}

/// Cancel an appointment and release its doctor back to `Available`.
#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    tags = ["Appointments"],
    params(
        ("id" = Uuid, Path, description = "Appointment ID to cancel")
    ),
    responses(
        (status = 200, description = "Appointment cancelled", body = CancelAppointmentRes),
        (status = 404, description = "Appointment not found", body = ErrorRes)
    )
)]
async fn cancel_appointment(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let conn = &mut state
        .db_pool
        .get()
        .await
        .context("Failed to obtain a DB connection pool")?;

    booking::cancel(conn, id).await?;

    Ok(Json(CancelAppointmentRes {
        message: "Appointment canceled successfully",
    }))
}
