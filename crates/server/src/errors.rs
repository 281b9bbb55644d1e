use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::HttpError;
use service::errors::StoreError;
use service::storage::RecordId;
use thiserror::Error;
use tracing::debug;

/// Errors surfaced by the HTTP handlers, rendered as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User '{0}' does not exist.")]
    UserNotFound(RecordId),
    #[error("{0}")]
    Unprocessable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UserNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => ApiError::UserNotFound(id),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rej: PathRejection) -> Self { ApiError::Unprocessable(rej.body_text()) }
}

impl From<QueryRejection> for ApiError {
    fn from(rej: QueryRejection) -> Self { ApiError::Unprocessable(rej.body_text()) }
}

impl From<JsonRejection> for ApiError {
    fn from(rej: JsonRejection) -> Self { ApiError::Unprocessable(rej.body_text()) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();
        debug!(status = status.as_u16(), %detail, "request rejected");
        (status, Json(HttpError::new(detail))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}
