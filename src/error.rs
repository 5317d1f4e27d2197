//! Error handler for userbase.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sqlx::Error as SQLxError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Enum representing server-side errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Body(#[from] JsonRejection),

    #[error(transparent)]
    Sql(#[from] SQLxError),

    #[error("invalid user ID: {0}")]
    InvalidId(String),
}

impl ServerError {
    /// HTTP status sent back for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ServerError::Sql(SQLxError::RowNotFound) => StatusCode::NOT_FOUND,
            ServerError::Sql(_) | ServerError::Body(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let details = self.to_string();

        if status.is_server_error() {
            tracing::error!(error = ?self, %details, "server returned 500 status");
        } else {
            tracing::debug!(%status, %details, "request rejected");
        }

        (status, Json(details)).into_response()
    }
}
