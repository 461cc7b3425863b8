//! HTTP-facing error type.
//!
//! Wraps [`StoreError`] and maps each variant onto a status code and a
//! JSON body, so handlers can bubble store failures with `?`.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub StoreError);

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::RoomUnavailable(_) => StatusCode::CONFLICT,
            StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match &self.0 {
            StoreError::Validation(errors) => ErrorBody {
                error: self.to_string(),
                code: status.as_u16(),
                details: serde_json::to_value(errors).ok(),
            },
            // The client gets a generic message; the real cause goes to the log.
            StoreError::Database(err) => {
                log::error!("database error: {err}");
                ErrorBody {
                    error: "internal error".to_string(),
                    code: status.as_u16(),
                    details: None,
                }
            }
            _ => ErrorBody {
                error: self.to_string(),
                code: status.as_u16(),
                details: None,
            },
        };
        HttpResponse::build(status).json(body)
    }
}
