use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::serializers::consistency::ApiError;

/// The only way a consistency request can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConsistencyError {
    /// One of `briefing`, `brandRules` or `task` is absent or blank after trimming.
    #[error("Missing briefing, brandRules or task.")]
    MissingInput,
}

impl ConsistencyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ConsistencyError::MissingInput => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ConsistencyError {
    fn into_response(self) -> Response {
        let body = ApiError { ok: false, error: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}
