//! Error handling for the HTTP layer

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Wire format for every failure response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: u16,
    pub message: String,
    pub detail: String,
}

/// Application error types that map to HTTP responses
#[derive(Error, Debug)]
pub enum AppError {
    #[error("empty body: {message}")]
    EmptyBody { message: String, detail: String },

    #[error("empty id: {message}")]
    EmptyId { message: String, detail: String },

    #[error("not found: {message}")]
    NotFound { message: String, detail: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Create an empty body error
    pub fn empty_body(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::EmptyBody {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Create an empty id error
    pub fn empty_id(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::EmptyId {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            detail: detail.into(),
        }
    }

    /// Short label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::EmptyBody { .. } => "empty_body",
            AppError::EmptyId { .. } => "empty_id",
            AppError::NotFound { .. } => "not_found",
            AppError::Internal(_) => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::EmptyBody { .. } | AppError::EmptyId { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Write an error body with the given status.
pub fn respond_error(
    status: StatusCode,
    message: impl Into<String>,
    detail: impl Into<String>,
) -> Response {
    let body = ErrorBody {
        error: status.as_u16(),
        message: message.into(),
        detail: detail.into(),
    };

    (status, Json(body)).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4();
        let status = self.status();
        let kind = self.kind();

        let (message, detail) = match self {
            AppError::EmptyBody { message, detail }
            | AppError::EmptyId { message, detail }
            | AppError::NotFound { message, detail } => (message, detail),
            AppError::Internal(e) => {
                tracing::error!(error_id = %error_id, error = ?e, "internal error");
                ("Internal server error".to_string(), format!("{:#}", e))
            }
        };

        tracing::warn!(
            error_id = %error_id,
            error_kind = kind,
            status_code = %status.as_u16(),
            "request error"
        );

        // Internal details stay in the logs for release builds
        let detail = if cfg!(not(debug_assertions)) && status == StatusCode::INTERNAL_SERVER_ERROR
        {
            format!("An internal server error occurred (error id {})", error_id)
        } else {
            detail
        };

        respond_error(status, message, detail)
    }
}
