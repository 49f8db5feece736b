use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Txt2ImgResponse {
    pub images: Option<Vec<String>>,
}
