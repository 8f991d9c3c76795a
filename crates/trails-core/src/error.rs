use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    /// The host has nothing to draw on; the animation never starts.
    #[error("missing drawing surface: {0}")]
    MissingSurface(String),
    #[error("drawing surface has no 2d context: {0}")]
    MissingContext(String),
    #[error("invalid engine parameter `{field}`: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;
