use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use crate::aliases::DieselError;

/// Error taxonomy of the service, mapped to HTTP at the boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Unavailable(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidInput(_) | AppError::Unavailable(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Other(err) => {
                tracing::error!("Internal error: {err:#}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(ErrorRes { error: self.to_string() })).into_response()
    }
}

// Required so transaction rollback failures surface as store errors; lookup
// misses are reported explicitly per entity, never through this conversion.
impl From<DieselError> for AppError {
    fn from(err: DieselError) -> Self {
        AppError::Other(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_taxonomy_to_http_statuses() {
        let cases = [
            (
                AppError::InvalidInput("Name, email, and datetime are required".into()),
                StatusCode::BAD_REQUEST,
            ),
            (AppError::NotFound("Doctor"), StatusCode::NOT_FOUND),
            (
                AppError::Unavailable("Doctor is not available".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Other(anyhow::anyhow!("connection refused")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn not_found_names_the_entity() {
        assert_eq!(AppError::NotFound("Appointment").to_string(), "Appointment not found");
    }
}
