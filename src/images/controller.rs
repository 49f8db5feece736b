use axum::{extract::State, Json};

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{
    dtos::generate_image_dto::GenerateImageDto, models::generated_image::GeneratedImage, service,
};

pub async fn generate_image(
    State(state): State<AppState>,
    JsonFromRequest(dto): JsonFromRequest<GenerateImageDto>,
) -> Result<Json<GeneratedImage>, ApiError> {
    match service::generate_image(&dto, &state).await {
        Ok(image) => Ok(Json(image)),
        Err(e) => Err(e),
    }
}
