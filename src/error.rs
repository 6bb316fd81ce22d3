use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// The four error shapes the relay ever returns. Every non-200 response is
/// one of these, serialized as `{"error": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Missing required parameters")]
    MissingParameters,

    #[error("This repository is not allowed")]
    RepositoryNotAllowed,

    /// Upstream answered with a non-success status; it is relayed verbatim
    /// and the upstream body is discarded.
    #[error("Upstream fetch failed")]
    UpstreamStatus(StatusCode),

    /// The fetch itself failed: DNS, connect, timeout, protocol error.
    #[error("Failed to fetch target")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingParameters => StatusCode::BAD_REQUEST,
            RelayError::RepositoryNotAllowed => StatusCode::FORBIDDEN,
            RelayError::UpstreamStatus(status) => *status,
            RelayError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody { error: self.to_string() };
        (status, Json(body)).into_response()
    }
}

pub type RelayResult<T> = Result<T, RelayError>;
