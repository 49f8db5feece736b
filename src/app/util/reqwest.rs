use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::app::models::{api_error::ApiError, app_error::AppError};

/// Sends one JSON POST and decodes the JSON body. The response status is
/// logged but not interpreted: upstream services report errors in the body.
///
/// A connection failure maps to `unreachable`; every other failure
/// (timeout, unreadable or undecodable body) surfaces its own text.
pub async fn post_json<B, T>(
    client: &reqwest::Client,
    url: &str,
    body: &B,
    timeout: Duration,
    unreachable: ApiError,
) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let result = client.post(url).timeout(timeout).json(body).send().await;

    match result {
        Ok(res) => {
            let status = res.status();
            if !status.is_success() {
                tracing::warn!(%url, %status, "upstream returned non-success status");
            }

            match res.text().await {
                Ok(text) => match serde_json::from_str(&text) {
                    Ok(value) => Ok(value),
                    Err(e) => {
                        tracing::error!(%url, %text, "post_json failed to decode body");
                        Err(AppError::from_error(e).to_api_error())
                    }
                },
                Err(e) => {
                    tracing::error!(%url, "post_json failed to read body: {:?}", e);
                    Err(AppError::from_error(e).to_api_error())
                }
            }
        }
        Err(e) if e.is_connect() => {
            tracing::error!(%url, "post_json could not connect: {:?}", e);
            Err(unreachable)
        }
        Err(e) => {
            tracing::error!(%url, "post_json failed: {:?}", e);
            Err(AppError::from_error(e).to_api_error())
        }
    }
}
