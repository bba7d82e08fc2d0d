/// Convenience result type used across glitchcraft.
pub type GlitchResult<T> = Result<T, GlitchError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum GlitchError {
    /// Source bytes are not a supported or intact raster image. Fatal before any frame renders.
    #[error("decode error: {0}")]
    Decode(String),

    /// A malformed color string (wrong length or non-hex digits).
    #[error("format error: {0}")]
    Format(String),

    /// The overlay image could not be read or decoded.
    #[error("overlay load error: {0}")]
    OverlayLoad(String),

    /// Errors while serializing a raster into an output container.
    #[error("encode error: {0}")]
    Encode(String),

    /// Invalid user-provided configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlitchError {
    /// Build a [`GlitchError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`GlitchError::Format`] value.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Build a [`GlitchError::OverlayLoad`] value.
    pub fn overlay_load(msg: impl Into<String>) -> Self {
        Self::OverlayLoad(msg.into())
    }

    /// Build a [`GlitchError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`GlitchError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
