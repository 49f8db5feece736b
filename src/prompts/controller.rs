use axum::{extract::State, Json};

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{dtos::expand_prompt_dto::ExpandPromptDto, models::expansion::Expansion, service};

pub async fn expand_prompt(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<ExpandPromptDto>,
) -> Result<Json<Expansion>, ApiError> {
    match service::expand_prompt(&dto, &state).await {
        Ok(expansion) => Ok(Json(expansion)),
        Err(e) => Err(e),
    }
}
