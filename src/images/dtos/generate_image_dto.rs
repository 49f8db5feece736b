use serde::Deserialize;

pub const DEFAULT_WIDTH: u32 = 1216;
pub const DEFAULT_HEIGHT: u32 = 832;
pub const DEFAULT_STEPS: u32 = 30;
pub const DEFAULT_CFG_SCALE: f32 = 7.0;

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateImageDto {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub negative_prompt: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub steps: Option<u32>,
    pub cfg_scale: Option<f32>,
}
