use std::fmt::Display;

use axum::http::StatusCode;

use super::api_error::ApiError;

/// Failure with no category of its own; surfaces its text as a 500.
#[derive(Debug)]
pub struct AppError {
    pub message: String,
}

impl AppError {
    pub fn from_error(e: impl Display) -> Self {
        Self {
            message: e.to_string(),
        }
    }

    pub fn to_api_error(self) -> ApiError {
        ApiError {
            code: StatusCode::INTERNAL_SERVER_ERROR,
            message: self.message,
        }
    }
}
