//! Catalog ingest error types.

/// Errors that can occur when parsing a catalog document.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog JSON was malformed or did not match the record schema.
    #[error("failed to parse catalog: {0}")]
    Parse(#[source] serde_json::Error),
}
