/// Convenience result type used across Overlyte.
pub type OverlyteResult<T> = Result<T, OverlyteError>;

/// Top-level error taxonomy used by stage APIs.
///
/// Every variant is fatal for the operation that produced it; the stage never
/// retries and never defers errors. Recoverable situations (absent metadata,
/// empty accumulators for disabled kinds) are silent no-ops, not errors.
#[derive(thiserror::Error, Debug)]
pub enum OverlyteError {
    /// Malformed or out-of-range static configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Device binding failures at start, geometry change, or per-frame work.
    #[error("device error: {0}")]
    Device(String),

    /// Missing geometry, unmapped buffers, or failed backend draw calls.
    #[error("resource error: {0}")]
    Resource(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OverlyteError {
    /// Build a [`OverlyteError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`OverlyteError::Device`] value.
    pub fn device(msg: impl Into<String>) -> Self {
        Self::Device(msg.into())
    }

    /// Build a [`OverlyteError::Resource`] value.
    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
