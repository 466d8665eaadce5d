// File: crates/chart-core/src/error.rs
// Summary: Error taxonomy for scale and geometry construction.

use thiserror::Error;

/// Result alias used across chart-core.
pub type Result<T> = std::result::Result<T, ChartError>;

/// Construction failures. Per-frame interpolation never produces one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// Invalid domain, e.g. non-positive bounds for a log scale.
    #[error("domain error: {0}")]
    Domain(String),

    /// Conflicting or out-of-range parameters.
    #[error("config error: {0}")]
    Config(String),

    /// Malformed data point or data set.
    #[error("data shape error: {0}")]
    DataShape(String),
}

impl ChartError {
    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn data_shape(msg: impl Into<String>) -> Self {
        Self::DataShape(msg.into())
    }
}
