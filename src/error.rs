//! Board Errors
//!
//! Error type shared by the DOM adapter and the board model.

use wasm_bindgen::JsValue;

/// Errors raised while wiring or driving the board
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    /// An element, selector, card or handler could not be resolved
    #[error("Not found: {0}")]
    NotFound(String),

    /// A drag ended outside every drop target. Carries the user-facing message.
    #[error("Invalid drop: {0}")]
    InvalidDrop(String),

    #[error("Invalid config: {0}")]
    Config(String),

    /// A browser call threw
    #[error("DOM error: {0}")]
    Dom(String),
}

impl BoardError {
    pub fn not_found(what: impl Into<String>) -> Self {
        BoardError::NotFound(what.into())
    }
}

impl From<JsValue> for BoardError {
    fn from(value: JsValue) -> Self {
        BoardError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Common result type for board operations
pub type BoardResult<T> = Result<T, BoardError>;
