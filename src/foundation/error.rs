/// Convenience result type used across the engine.
pub type EpicycleResult<T> = Result<T, EpicycleError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Every variant is a local, synchronous usage error: none of them is transient and none is
/// produced by a steady-state `update`/query cycle over valid inputs.
#[derive(thiserror::Error, Debug)]
pub enum EpicycleError {
    /// Bad counts, negative or non-finite deltas, non-positive capacities, NaN coordinates.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Segment ordering violations while building a path.
    #[error("invalid path state: {0}")]
    InvalidPathState(String),

    /// Decomposition requested more coefficients than samples available.
    #[error("insufficient samples: requested {requested} coefficients from {available} samples")]
    InsufficientSamples {
        /// Number of coefficients requested.
        requested: usize,
        /// Number of samples supplied.
        available: usize,
    },

    /// A component was used outside of its contract (e.g. an animator without phasors).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),
}

impl EpicycleError {
    /// Build an [`EpicycleError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build an [`EpicycleError::InvalidPathState`] value.
    pub fn invalid_path_state(msg: impl Into<String>) -> Self {
        Self::InvalidPathState(msg.into())
    }

    /// Build an [`EpicycleError::InsufficientSamples`] value.
    pub fn insufficient_samples(requested: usize, available: usize) -> Self {
        Self::InsufficientSamples {
            requested,
            available,
        }
    }

    /// Build an [`EpicycleError::InvalidState`] value.
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    /// Build an [`EpicycleError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for EpicycleError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
