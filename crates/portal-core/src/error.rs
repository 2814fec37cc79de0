//! Error types for catalog construction.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors surfaced while building a catalog. All of them fire before any
/// rendering happens; there is no render-time error path.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("duplicate service id: {0}")]
    DuplicateId(String),

    #[error("service entry {0} has an empty id")]
    EmptyId(usize),

    #[error("unsupported catalog format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),

    #[error("catalog parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
