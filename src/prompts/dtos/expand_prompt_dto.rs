use serde::Deserialize;

pub const DEFAULT_MODEL: &str = "gemma2:2b";

#[derive(Debug, Clone, Deserialize)]
pub struct ExpandPromptDto {
    #[serde(default)]
    pub idea: String,
    pub model: Option<String>,
}

impl ExpandPromptDto {
    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }
}
