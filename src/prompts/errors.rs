use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum PromptsApiError {
    OllamaUnreachable,
}

impl PromptsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::OllamaUnreachable => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "Cannot connect to Ollama. Is it running?".to_string(),
            },
        }
    }
}
