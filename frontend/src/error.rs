use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons a page feature could not be wired up.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("no global `window` available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(message) => SetupError::Dom(message),
            None => SetupError::Dom(format!("{:?}", value)),
        }
    }
}
