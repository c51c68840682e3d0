use anyhow::Context;
use diesel::{BoolExpressionMethods, PgTextExpressionMethods, QueryDsl};
use diesel_async::{AsyncPgConnection, RunQueryDsl};

use crate::{app_error::AppError, models::DoctorEntity, schema::doctorsheet};

/// Case-insensitive substring search over doctor name and specialization.
/// An empty (or absent) query matches every doctor.
pub async fn search_doctors(
    conn: &mut AsyncPgConnection,
    search: Option<String>,
) -> Result<Vec<DoctorEntity>, AppError> {
    let pattern = format!("%{}%", search.unwrap_or_default());

    let doctors: Vec<DoctorEntity> = doctorsheet::table
        .filter(
            doctorsheet::name
                .ilike(&pattern)
                .or(doctorsheet::specialization.ilike(&pattern)),
        )
        .get_results(conn)
        .await
        .context("Failed to search doctors")?;

    Ok(doctors)
}
