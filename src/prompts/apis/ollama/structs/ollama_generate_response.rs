use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct OllamaGenerateResponse {
    #[serde(default)]
    pub response: String,
}
