/// Convenience result type used across the crate.
pub type PlaneshiftResult<T> = Result<T, PlaneshiftError>;

#[derive(thiserror::Error, Debug)]
/// Top-level error type for configuration, export and capture operations.
///
/// Geometry evaluation itself is infallible; errors only arise at the edges
/// (malformed configuration, artifact serialization, rasterization).
pub enum PlaneshiftError {
    /// Configuration rejected by [`crate::Config::validate`].
    #[error("validation error: {0}")]
    Validation(String),

    /// Artifact generation failed.
    #[error("export error: {0}")]
    Export(String),

    /// Frame capture failed. Recoverable: playback state is left untouched.
    #[error("capture error: {0}")]
    Capture(String),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped external error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlaneshiftError {
    /// Build [`PlaneshiftError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build [`PlaneshiftError::Export`].
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build [`PlaneshiftError::Capture`].
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::Capture(msg.into())
    }

    /// Build [`PlaneshiftError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Whether the running animation may continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Capture(_) | Self::Export(_))
    }
}

impl From<serde_json::Error> for PlaneshiftError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
