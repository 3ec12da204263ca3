//! Error types for mf-catalog

use thiserror::Error;

/// Migration catalog errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog listing failed (K001)
    #[error("[K001] Failed to list migrations in {location}: {source}")]
    ListFailed {
        location: String,
        source: std::io::Error,
    },

    /// A migration file name could not be parsed (K002)
    #[error("[K002] {0}")]
    InvalidFileName(#[from] mf_core::CoreError),
}

/// Result type alias for CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
