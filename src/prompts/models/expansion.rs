use serde::{Deserialize, Serialize};

pub const DEFAULT_NEGATIVE: &str = "blurry, deformed, bad anatomy, watermark, low quality";
pub const RAW_OUTPUT_TIP: &str = "Raw output used as prompt";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expansion {
    pub prompt: String,
    #[serde(default = "default_negative")]
    pub negative: String,
    #[serde(default)]
    pub tip: String,
}

fn default_negative() -> String {
    DEFAULT_NEGATIVE.to_string()
}

impl Expansion {
    pub fn from_raw_text(text: &str) -> Self {
        Self {
            prompt: text.trim().to_string(),
            negative: DEFAULT_NEGATIVE.to_string(),
            tip: RAW_OUTPUT_TIP.to_string(),
        }
    }
}
