use axum::http::StatusCode;
use axum::Json;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use domain_model::Violation;
use deals_rest_api::dto::{ErrorResponse, ViolationDto};

#[derive(Debug)]
pub struct BatchViolation {
    pub index: usize,
    pub violation: Violation,
}

impl From<BatchViolation> for ViolationDto {
    fn from(value: BatchViolation) -> Self {
        Self {
            index: value.index,
            field: value.violation.field().to_string(),
            message: value.violation.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Deal batch failed validation")]
    Validation(Vec<BatchViolation>),
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    #[error("Request body rejected: {1}")]
    Rejected(StatusCode, String),
    #[error("Deal not found: '{0}'")]
    NotFound(String),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, body) = match self {
            ApiError::Validation(violations) => {
                warn!("Rejecting deal batch with {} violations", violations.len());
                let violations = violations.into_iter().map(ViolationDto::from).collect();
                (StatusCode::BAD_REQUEST, ErrorResponse { message, violations })
            }
            ApiError::MalformedBody(_) => {
                warn!("{message}");
                (StatusCode::BAD_REQUEST, ErrorResponse { message, violations: Vec::new() })
            }
            ApiError::Rejected(status, _) => {
                warn!("{message}");
                (status, ErrorResponse { message, violations: Vec::new() })
            }
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, ErrorResponse { message, violations: Vec::new() }),
            ApiError::Internal(err) => {
                error!("Error handling deals request: {err:#}");
                let message = "Internal server error".to_string();
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse { message, violations: Vec::new() })
            }
        };
        (status, Json(body)).into_response()
    }
}
