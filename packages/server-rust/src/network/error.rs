//! HTTP error mapping for job endpoints.
//!
//! Every failure a handler can return becomes an [`ApiError`], rendered as a
//! JSON body `{"detail": "<message>"}` with the matching status code.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::service::JobError;

/// Transport-level error returned by job handlers.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Job not found")]
    NotFound,
    /// Request parameters or body failed validation.
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

impl From<JobError> for ApiError {
    fn from(value: JobError) -> Self {
        match value {
            JobError::NotFound { .. } => Self::NotFound,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::Validation(value.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(value: QueryRejection) -> Self {
        Self::Validation(value.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(value: PathRejection) -> Self {
        Self::Validation(value.body_text())
    }
}
