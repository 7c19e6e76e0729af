use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mentra_model::ApiMessage;
use tracing::error;

use crate::services::activity::ActivityServiceError;

/// Error shape of the HTTP surface: a status code plus a `{message}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!("request failed: {}", self.message);
        }
        (
            self.status,
            Json(ApiMessage {
                message: self.message,
            }),
        )
            .into_response()
    }
}

impl From<ActivityServiceError> for ApiError {
    fn from(e: ActivityServiceError) -> Self {
        match e {
            ActivityServiceError::MissingFields => Self::bad_request(e.to_string()),
            ActivityServiceError::Upload(_) | ActivityServiceError::Storage(_) => {
                Self::internal(e.to_string())
            }
        }
    }
}
