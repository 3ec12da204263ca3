//! mf-catalog - Migration catalog for migfmt
//!
//! Enumerates migration file names (embedded in the binary or listed from a
//! directory), parses them into descriptors, and filters them down to the
//! migrations a legacy schema version implies were already applied.

pub mod catalog;
pub mod error;
pub mod filter;

pub use catalog::{DirCatalog, EmbeddedCatalog, MigrationCatalog, StaticCatalog};
pub use error::{CatalogError, CatalogResult};
pub use filter::filter_migrations;
