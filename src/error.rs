use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("display anchor #{0} not found")]
    MissingAnchor(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("DOM call failed: {0}")]
    Dom(String),
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}

impl PageError {
    pub fn dom(value: JsValue) -> Self {
        PageError::Dom(js_message(&value))
    }
}

/// Readable text for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| String::from(err.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

pub type Result<T, E = PageError> = std::result::Result<T, E>;
