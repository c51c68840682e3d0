use chrono::{DateTime, Utc};
use diesel::{
    Selectable,
    prelude::{Identifiable, Insertable, Queryable},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// Doctors

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::doctorsheet)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DoctorEntity {
    pub id: i32,
    pub name: String,
    pub specialization: String,
    /// Stored as text; parsed into [`crate::availability::Availability`] at
    /// the state-machine boundary.
    pub availability: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Doctors are provisioned outside the API (seed scripts and tests); there is
/// no creation endpoint.
#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::doctorsheet)]
pub struct CreateDoctorEntity {
    pub name: String,
    pub specialization: String,
    pub availability: String,
}

// Appointments

#[derive(Queryable, Selectable, Identifiable, Serialize, Debug, Clone, ToSchema)]
#[diesel(table_name = crate::schema::appointments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AppointmentEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Kept as the opaque string the patient submitted; no format or
    /// conflict checking happens on it.
    pub datetime: String,
    pub doctor_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Deserialize, Debug)]
#[diesel(table_name = crate::schema::appointments)]
pub struct CreateAppointmentEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub datetime: String,
    pub doctor_name: String,
}
