use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct InputSpec {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}
