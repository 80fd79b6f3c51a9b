/// Convenience result type used across the crate.
pub type FramebufResult<T> = Result<T, FramebufError>;

/// Configuration errors. Geometric conditions (clipping, off-surface drawing)
/// are never errors; they are silently clipped by the drawing operations.
#[derive(thiserror::Error, Debug)]
pub enum FramebufError {
    /// Invalid dimensions, stride, or format code/name.
    #[error("validation error: {0}")]
    Validation(String),

    /// The supplied buffer cannot hold the requested geometry.
    #[error("buffer too small: need {required} bytes, got {actual}")]
    BufferTooSmall {
        /// Bytes needed for the requested geometry.
        required: usize,
        /// Bytes actually supplied.
        actual: usize,
    },

    /// Invalid palette configuration for a blit.
    #[error("palette error: {0}")]
    Palette(String),

    /// Errors when serializing or deserializing descriptors.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramebufError {
    /// Build a [`FramebufError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramebufError::Palette`] value.
    pub fn palette(msg: impl Into<String>) -> Self {
        Self::Palette(msg.into())
    }

    /// Build a [`FramebufError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
