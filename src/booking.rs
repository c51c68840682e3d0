//! The booking state machine: every transition that touches both the
//! `doctorsheet.availability` column and the `appointments` ledger runs here,
//! inside a single database transaction, so the two can never drift apart on
//! a mid-transition failure.

use anyhow::Context;
use chrono::Utc;
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl};
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    app_error::AppError,
    availability::Availability,
    models::{AppointmentEntity, CreateAppointmentEntity, DoctorEntity},
    schema::{appointments, doctorsheet},
};

#[derive(Deserialize, Debug, ToSchema)]
pub struct BookAppointmentReq {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
}

struct PatientDetails {
    name: String,
    email: String,
    datetime: String,
}

fn validate_patient_details(req: &BookAppointmentReq) -> Result<PatientDetails, AppError> {
    match (&req.name, &req.email, &req.datetime) {
        (Some(name), Some(email), Some(datetime))
            if !name.is_empty() && !email.is_empty() && !datetime.is_empty() =>
        {
            Ok(PatientDetails {
                name: name.clone(),
                email: email.clone(),
                datetime: datetime.clone(),
            })
        }
        _ => Err(AppError::InvalidInput(
            "Name, email, and datetime are required".into(),
        )),
    }
}

/// Book an appointment with the named doctor.
///
/// Checks run in this order: doctor lookup, patient field validation,
/// availability check. The lookup locks the doctor row for the duration of
/// the transaction, so concurrent bookings against the same doctor serialize
/// and the loser re-reads the committed `Appointed` status. Only a doctor
/// currently `Available` is bookable; on success the appointment row and the
/// `Appointed` status commit together.
pub async fn try_book(
    conn: &mut AsyncPgConnection,
    req: BookAppointmentReq,
) -> Result<Uuid, AppError> {
    conn.transaction(move |conn| {
        Box::pin(async move {
            let doctor_name = req.doctor_name.clone().unwrap_or_default();
            let doctor: Option<DoctorEntity> = doctorsheet::table
                .filter(doctorsheet::name.eq(&doctor_name))
                .for_update()
                .first(conn)
                .await
                .optional()
                .context("Failed to look up doctor")?;
            let doctor = doctor.ok_or(AppError::NotFound("Doctor"))?;

            let details = validate_patient_details(&req)?;

            let current: Availability = doctor
                .availability
                .parse()
                .map_err(|_| AppError::Unavailable("Doctor is not available".into()))?;
            if !current.is_bookable() {
                return Err(AppError::Unavailable("Doctor is not available".into()));
            }

            let id = Uuid::new_v4();
            diesel::insert_into(appointments::table)
                .values(CreateAppointmentEntity {
                    id,
                    name: details.name,
                    email: details.email,
                    datetime: details.datetime,
                    doctor_name: doctor.name.clone(),
                })
                .execute(conn)
                .await
                .context("Failed to create appointment")?;

            diesel::update(doctorsheet::table.find(doctor.id))
                .set((
                    doctorsheet::availability.eq(Availability::Appointed.as_str()),
                    doctorsheet::updated_at.eq(Utc::now()),
                ))
                .execute(conn)
                .await
                .context("Failed to mark doctor as appointed")?;

            Ok::<Uuid, AppError>(id)
        })
    })
    .await
}

/// Cancel an appointment: deletes the row and releases the referenced doctor
/// back to `Available`, in one transaction.
pub async fn cancel(conn: &mut AsyncPgConnection, id: Uuid) -> Result<(), AppError> {
    conn.transaction(move |conn| {
        Box::pin(async move {
            let appointment: Option<AppointmentEntity> = appointments::table
                .find(id)
                .first(conn)
                .await
                .optional()
                .context("Failed to look up appointment")?;
            let appointment = appointment.ok_or(AppError::NotFound("Appointment"))?;

            diesel::delete(appointments::table.find(id))
                .execute(conn)
                .await
                .context("Failed to delete appointment")?;

            diesel::update(doctorsheet::table.filter(doctorsheet::name.eq(&appointment.doctor_name)))
                .set((
                    doctorsheet::availability.eq(Availability::Available.as_str()),
                    doctorsheet::updated_at.eq(Utc::now()),
                ))
                .execute(conn)
                .await
                .context("Failed to release doctor")?;

            Ok::<(), AppError>(())
        })
    })
    .await
}

/// Administrative override of a doctor's status.
///
/// Setting any status other than `Appointed` force-clears every appointment
/// referencing the doctor, including none (clearing an empty ledger is a
/// no-op that still succeeds).
pub async fn set_availability(
    conn: &mut AsyncPgConnection,
    doctor_id: i32,
    new_status: Availability,
) -> Result<(), AppError> {
    conn.transaction(move |conn| {
        Box::pin(async move {
            let doctor: Option<DoctorEntity> = diesel::update(doctorsheet::table.find(doctor_id))
                .set((
                    doctorsheet::availability.eq(new_status.as_str()),
                    doctorsheet::updated_at.eq(Utc::now()),
                ))
                .get_result(conn)
                .await
                .optional()
                .context("Failed to update doctor availability")?;
            let doctor = doctor.ok_or(AppError::NotFound("Doctor"))?;

            if new_status.clears_appointments() {
                diesel::delete(
                    appointments::table.filter(appointments::doctor_name.eq(&doctor.name)),
                )
                .execute(conn)
                .await
                .context("Failed to clear appointments")?;
            }

            Ok::<(), AppError>(())
        })
    })
    .await
}
