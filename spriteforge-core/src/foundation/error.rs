/// Convenience result type used across spriteforge.
pub type SpriteResult<T> = Result<T, SpriteError>;

/// Top-level error taxonomy used by the checker and the sheet builder.
#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    /// A required input file does not exist.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// A file exists but could not be decoded as an image.
    #[error("decode error: {0}")]
    Decode(String),

    /// The composited image could not be encoded or written.
    #[error("encode error: {0}")]
    Encode(String),

    /// Invalid user-provided configuration (manifests, layouts).
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpriteError {
    /// Build a [`SpriteError::MissingInput`] value.
    pub fn missing_input(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }

    /// Build a [`SpriteError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`SpriteError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SpriteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
