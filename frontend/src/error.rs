use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to parse embedded content: {0}")]
    Content(#[from] serde_json::Error),
    #[error("browser API unavailable: {0}")]
    Browser(String),
}

impl SiteError {
    pub fn browser(context: &str, value: JsValue) -> Self {
        SiteError::Browser(format!("{}: {:?}", context, value))
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
