//! Error type shared by the classifier, the layout model and the JSON surface.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoleError {
    /// Bounds are missing or degenerate; nothing gets classified.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// No system on the page could be found for the reference point.
    #[error("no containing system for point ({x}, {y})")]
    ContextResolution { x: i32, y: i32 },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RoleError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        RoleError::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for RoleError {
    fn from(e: serde_json::Error) -> Self {
        RoleError::Config(format!("JSON error: {e}"))
    }
}
