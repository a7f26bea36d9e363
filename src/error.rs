use std::path::PathBuf;
use thiserror::Error;

/// Rejections at the JSON boundary of the shape calculator.
///
/// A constructed [`crate::Shape`] is always valid; these only arise while
/// turning untyped input into one.
#[derive(Error, Debug)]
pub enum ShapeError {
    #[error("missing discriminant field 'shape'")]
    MissingDiscriminant,

    #[error("Unknown shape: {tag}")]
    UnknownShape { tag: String },

    #[error("malformed shape: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid {field}: {value} (must be finite and non-negative)")]
    InvalidDimension { field: &'static str, value: f64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("operation failed: {reason}")]
    Failed { reason: String },

    #[error("callback was dropped before the operation settled")]
    CallbackDropped,

    #[error("callback task failed: {0}")]
    TaskFailed(String),
}

impl From<tokio::task::JoinError> for FetchError {
    fn from(err: tokio::task::JoinError) -> Self {
        FetchError::TaskFailed(err.to_string())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level error for the demo binaries.
#[derive(Error, Debug)]
pub enum TourError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}
