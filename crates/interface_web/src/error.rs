//! Web error handling
//!
//! Two families of failure reach this layer. Expected ones (no such claim,
//! no role in the claim, a rejected token) map to their HTTP status with a
//! message. Everything else, collaborator outages and fatal draft input
//! alike, is logged in full and rendered as the generic error page so no
//! upstream detail leaks to the citizen.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use core_kernel::PortError;
use domain_claim::ClaimError;
use domain_response::ConversionError;
use infra_clients::ClientError;

/// Web error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// A draft that validated page by page still failed conversion
    #[error("Submission failed: {0}")]
    Submission(String),

    /// A collaborator service call failed
    #[error("Upstream failure: {0}")]
    Upstream(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "unauthorized",
                "Unauthorized".to_string(),
            ),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg.clone()),
            ApiError::Submission(detail) => {
                tracing::error!(%detail, "submission failed on conversion");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server_error",
                    "Error".to_string(),
                )
            }
            ApiError::Upstream(detail) => {
                tracing::error!(%detail, "collaborator call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server_error",
                    "Error".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{entity} {id} not found"))
            }
            ClientError::Api { status: 401, .. } | ClientError::Api { status: 403, .. } => {
                ApiError::Unauthorized
            }
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            PortError::Unauthorized { .. } => ApiError::Unauthorized,
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl From<ConversionError> for ApiError {
    fn from(err: ConversionError) -> Self {
        ApiError::Submission(err.to_string())
    }
}

impl From<ClaimError> for ApiError {
    fn from(err: ClaimError) -> Self {
        ApiError::Forbidden(err.to_string())
    }
}
