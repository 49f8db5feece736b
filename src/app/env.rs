use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 8085;
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_SD_URL: &str = "http://localhost:7860";
pub const DEFAULT_OLLAMA_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_SD_TIMEOUT_SECS: u64 = 300;

/// Process configuration, read once at startup and shared read-only.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub port: Option<u16>,

    pub ollama_url: Option<String>,
    pub ollama_timeout_secs: Option<u64>,

    pub sd_url: Option<String>,
    pub sd_timeout_secs: Option<u64>,
}

impl Envy {
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn ollama_url(&self) -> &str {
        base_url(&self.ollama_url, DEFAULT_OLLAMA_URL)
    }

    pub fn ollama_timeout(&self) -> Duration {
        Duration::from_secs(
            self.ollama_timeout_secs
                .unwrap_or(DEFAULT_OLLAMA_TIMEOUT_SECS),
        )
    }

    pub fn sd_url(&self) -> &str {
        base_url(&self.sd_url, DEFAULT_SD_URL)
    }

    pub fn sd_timeout(&self) -> Duration {
        Duration::from_secs(self.sd_timeout_secs.unwrap_or(DEFAULT_SD_TIMEOUT_SECS))
    }
}

fn base_url<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value {
        Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/'),
        _ => default,
    }
}
