use std::path::PathBuf;
use thiserror::Error;

/// Error type for the fallible edges of the crate. The calculators
/// themselves never fail: degenerate inputs (empty lists, zero weight, zero
/// budget) yield zeros by definition, and malformed form input is coerced to
/// 0 before it reaches them.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse project file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("risk {0} not found in the active register")]
    RiskNotFound(String),
}
