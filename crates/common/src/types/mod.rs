use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Error body returned for every non-2xx response: `{"detail": "..."}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct HttpError {
    pub detail: String,
}

impl HttpError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }
}
