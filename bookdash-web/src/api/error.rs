//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::QueryRejection;
use serde_json::json;
use tracing::error;

/// Dashboard API errors
#[derive(Debug)]
pub enum ApiError {
    /// Query parameters no control could have produced
    BadRequest(String),
    /// Selected title has no catalog record
    LookupViolation(String),
    Internal(String),
}

impl From<bookdash_common::Error> for ApiError {
    fn from(err: bookdash_common::Error) -> Self {
        use bookdash_common::Error;

        match err {
            Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            Error::TitleNotFound(title) => ApiError::LookupViolation(title),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid request: {}", msg))
            }
            ApiError::LookupViolation(title) => {
                // Titles are offered from the catalog itself; reaching here is a client bug
                error!("Detail requested for title absent from catalog: {:?}", title);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("No catalog record for title: {}", title),
                )
            }
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Internal error: {}", msg))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
