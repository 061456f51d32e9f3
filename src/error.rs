//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for recipe-finder application plumbing.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods. The search engine itself is infallible.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading or validating a recipe catalog fails.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Catalog contents are not a valid JSON recipe array.
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Two recipes share the same id.
    #[error("Duplicate recipe id '{0}'")]
    DuplicateId(String),
    /// A recipe declares fewer than one serving.
    #[error("Recipe '{id}' must serve at least one person")]
    InvalidServings { id: String },
}
