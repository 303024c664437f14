//! Common error types.

use thiserror::Error;

/// Main error type for the console overlay.
#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Error hook already installed")]
    HookInstalled,
}

pub type OverlayResult<T> = Result<T, OverlayError>;

impl OverlayError {
    pub fn invalid_color(msg: impl Into<String>) -> Self {
        Self::InvalidColor(msg.into())
    }
}
