use crate::{app::models::api_error::ApiError, AppState};

use super::{
    apis::ollama, dtos::expand_prompt_dto::ExpandPromptDto, models::expansion::Expansion,
    templates::system_prompt::build_prompt, util::json_object::first_json_object,
};

pub async fn expand_prompt(dto: &ExpandPromptDto, state: &AppState) -> Result<Expansion, ApiError> {
    let text = ollama::service::generate(dto.model(), build_prompt(&dto.idea), state).await?;

    Ok(parse_expansion(&text))
}

/// Never fails: text without a usable object becomes the prompt itself.
pub fn parse_expansion(text: &str) -> Expansion {
    let Some(object) = first_json_object(text)
    else {
        return Expansion::from_raw_text(text);
    };

    match serde_json::from_value(object.into()) {
        Ok(expansion) => expansion,
        Err(e) => {
            tracing::warn!("parse_expansion falling back to raw text: {}", e);
            Expansion::from_raw_text(text)
        }
    }
}
