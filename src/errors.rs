use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Request-level failure carried back to the client. Malformed journal data
/// never lands here; only bad requests and unrecoverable I/O do.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::Storage(err) => {
                tracing::error!("storage failure: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "storage failure".to_string()).into_response()
            }
            Self::Encoding(err) => {
                tracing::error!("encoding failure: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, "encoding failure".to_string()).into_response()
            }
        }
    }
}
