use crate::{app::models::api_error::ApiError, AppState};

use super::{
    apis::sd_webui, dtos::generate_image_dto::GenerateImageDto, errors::ImagesApiError,
    models::generated_image::GeneratedImage,
};

pub async fn generate_image(
    dto: &GenerateImageDto,
    state: &AppState,
) -> Result<GeneratedImage, ApiError> {
    let response = sd_webui::service::txt2img(dto, state).await?;

    let Some(image) = response.images.and_then(|images| images.into_iter().next())
    else {
        tracing::warn!("generate_image: SD responded without images");
        return Err(ImagesApiError::NoImageReturned.value());
    };

    Ok(GeneratedImage { image })
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use tokio::sync::mpsc;

    use crate::{
        app::{
            env::Envy,
            util::test_server::{spawn_server, unused_address},
        },
        router, AppState,
    };

    use super::*;

    async fn mock_sd(reply: Value) -> (String, mpsc::UnboundedReceiver<Value>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let upstream = Router::new()
            .route(
                "/sdapi/v1/txt2img",
                post(
                    |State((tx, reply)): State<(mpsc::UnboundedSender<Value>, Value)>,
                     Json(body): Json<Value>| async move {
                        let _ = tx.send(body);
                        Json(reply)
                    },
                ),
            )
            .with_state((tx, reply));

        (spawn_server(upstream).await, rx)
    }

    async fn spawn_relay(sd_url: String) -> String {
        let envy = Envy {
            sd_url: Some(sd_url),
            ..Default::default()
        };

        spawn_server(router(AppState::new(envy))).await
    }

    async fn post_generate(relay: &str, body: Value) -> (StatusCode, Value) {
        let res = reqwest::Client::new()
            .post(format!("{}/api/generate", relay))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = res.status();

        (status, res.json().await.unwrap())
    }

    #[tokio::test]
    async fn omitted_parameters_are_forwarded_as_defaults() {
        let (sd_url, mut received) = mock_sd(json!({ "images": ["abc123"] })).await;
        let relay = spawn_relay(sd_url).await;

        let (status, _) = post_generate(
            &relay,
            json!({ "prompt": "lighthouse", "negative_prompt": "blurry" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let forwarded = received.recv().await.unwrap();
        assert_eq!(forwarded["prompt"], "lighthouse");
        assert_eq!(forwarded["negative_prompt"], "blurry");
        assert_eq!(forwarded["width"], 1216);
        assert_eq!(forwarded["height"], 832);
        assert_eq!(forwarded["steps"], 30);
        assert_eq!(forwarded["cfg_scale"].as_f64(), Some(7.0));
        assert_eq!(forwarded["sampler_name"], "DPM++ 2M SDE");
        assert_eq!(forwarded["seed"], -1);
    }

    #[tokio::test]
    async fn first_image_is_returned() {
        let (sd_url, _received) = mock_sd(json!({ "images": ["abc123", "def456"] })).await;
        let relay = spawn_relay(sd_url).await;

        let (status, body) = post_generate(&relay, json!({ "prompt": "p" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "image": "abc123" }));
    }

    #[tokio::test]
    async fn empty_images_is_an_error() {
        let (sd_url, _received) = mock_sd(json!({ "images": [] })).await;
        let relay = spawn_relay(sd_url).await;

        let (status, body) = post_generate(&relay, json!({ "prompt": "p" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], ImagesApiError::NoImageReturned.value().message);
    }

    #[tokio::test]
    async fn validation_error_body_is_an_empty_result() {
        let (sd_url, _received) = mock_sd(json!({ "detail": "Not Found" })).await;
        let relay = spawn_relay(sd_url).await;

        let (status, body) = post_generate(&relay, json!({})).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], ImagesApiError::NoImageReturned.value().message);
    }

    #[tokio::test]
    async fn unreachable_sd_is_reported() {
        let relay = spawn_relay(unused_address()).await;

        let (status, body) = post_generate(&relay, json!({ "prompt": "p" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            ImagesApiError::SdWebUiUnreachable.value().message
        );
    }
}
