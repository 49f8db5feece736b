use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct GeneratedImage {
    /// Base64 PNG, as produced by the WebUI.
    pub image: String,
}
