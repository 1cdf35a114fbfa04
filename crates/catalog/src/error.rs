//! Error type for the catalog layer.
//!
//! The mapping functions themselves default rather than fail; errors exist
//! only for the two conditions that cannot be defaulted (an article without
//! a usable publication timestamp, and a lookup miss) plus payloads that
//! are not valid node documents at all.

use thiserror::Error;

/// Errors surfaced by the catalog layer.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input violates a domain invariant that has no safe default.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON payload could not be read as a node document.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
