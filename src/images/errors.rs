use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ImagesApiError {
    SdWebUiUnreachable,
    NoImageReturned,
}

impl ImagesApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::SdWebUiUnreachable => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Cannot connect to SD WebUI. Is it running?".to_string(),
            },
            Self::NoImageReturned => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "No image returned from SD".to_string(),
            },
        }
    }
}
