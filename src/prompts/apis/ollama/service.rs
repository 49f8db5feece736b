use crate::{
    app::{models::api_error::ApiError, util::reqwest::post_json},
    prompts::errors::PromptsApiError,
    AppState,
};

use super::{
    models::input_spec::InputSpec, structs::ollama_generate_response::OllamaGenerateResponse,
};

/// One non-streaming completion; returns the generated text.
pub async fn generate(model: &str, prompt: String, state: &AppState) -> Result<String, ApiError> {
    let input_spec = InputSpec {
        model: model.to_string(),
        prompt,
        stream: false,
    };

    let url = format!("{}/api/generate", state.envy.ollama_url());
    tracing::debug!(%url, %model, "ollama generate");

    let response: OllamaGenerateResponse = post_json(
        &state.client,
        &url,
        &input_spec,
        state.envy.ollama_timeout(),
        PromptsApiError::OllamaUnreachable.value(),
    )
    .await?;

    Ok(response.response)
}
