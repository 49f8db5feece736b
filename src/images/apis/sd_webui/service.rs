use crate::{
    app::{models::api_error::ApiError, util::reqwest::post_json},
    images::{dtos::generate_image_dto::*, errors::ImagesApiError},
    AppState,
};

use super::{
    config::{RANDOM_SEED, SAMPLER_NAME},
    models::input_spec::InputSpec,
    structs::txt2img_response::Txt2ImgResponse,
};

pub async fn txt2img(
    dto: &GenerateImageDto,
    state: &AppState,
) -> Result<Txt2ImgResponse, ApiError> {
    let input_spec = provide_input_spec(dto);
    let url = format!("{}/sdapi/v1/txt2img", state.envy.sd_url());

    tracing::debug!(
        %url,
        width = input_spec.width,
        height = input_spec.height,
        steps = input_spec.steps,
        "sd txt2img"
    );

    post_json(
        &state.client,
        &url,
        &input_spec,
        state.envy.sd_timeout(),
        ImagesApiError::SdWebUiUnreachable.value(),
    )
    .await
}

fn provide_input_spec(dto: &GenerateImageDto) -> InputSpec {
    InputSpec {
        prompt: dto.prompt.to_string(),
        negative_prompt: dto.negative_prompt.to_string(),
        width: dto.width.unwrap_or(DEFAULT_WIDTH),
        height: dto.height.unwrap_or(DEFAULT_HEIGHT),
        steps: dto.steps.unwrap_or(DEFAULT_STEPS),
        cfg_scale: dto.cfg_scale.unwrap_or(DEFAULT_CFG_SCALE),
        sampler_name: SAMPLER_NAME.to_string(),
        seed: RANDOM_SEED,
    }
}
