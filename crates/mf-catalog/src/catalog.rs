//! Migration catalog sources.
//!
//! A catalog only enumerates file names. Migration bodies are never read:
//! bookkeeping needs `(version, name, direction)` and nothing else.

use crate::error::{CatalogError, CatalogResult};
use mf_core::MigrationDescriptor;
use rust_embed::Embed;
use std::path::{Path, PathBuf};

/// Migration files compiled into the binary.
#[derive(Embed)]
#[folder = "migrations/"]
struct Assets;

/// A source of migration file names.
pub trait MigrationCatalog {
    /// File names in the source's native enumeration order.
    fn file_names(&self) -> CatalogResult<Vec<String>>;

    /// Short description of where the migrations come from, for logs
    fn location(&self) -> String;

    /// Parse every `.sql` file name and keep the `Up` descriptors, in
    /// enumeration order.
    ///
    /// A single malformed name fails the whole listing.
    fn list_up_migrations(&self) -> CatalogResult<Vec<MigrationDescriptor>> {
        let (sql_files, skipped) = split_sql_files(self.file_names()?);
        for file_name in &skipped {
            log::warn!(
                "Skipping non-SQL file in migration catalog location={} file={file_name}",
                self.location()
            );
        }

        let mut migrations = Vec::new();
        for file_name in sql_files {
            let migration = MigrationDescriptor::parse_file_name(&file_name)?;
            if migration.is_up() {
                migrations.push(migration);
            }
        }
        log::debug!(
            "Listed migrations location={} up_migrations={} skipped={}",
            self.location(),
            migrations.len(),
            skipped.len()
        );
        Ok(migrations)
    }
}

/// Separate `.sql` file names from everything else, keeping order.
pub(crate) fn split_sql_files(names: Vec<String>) -> (Vec<String>, Vec<String>) {
    names.into_iter().partition(|name| name.ends_with(".sql"))
}

/// Catalog of the migrations embedded at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl MigrationCatalog for EmbeddedCatalog {
    fn file_names(&self) -> CatalogResult<Vec<String>> {
        Ok(Assets::iter()
            .filter(|path| !path.contains('/'))
            .map(|path| path.into_owned())
            .collect())
    }

    fn location(&self) -> String {
        "embedded".to_string()
    }
}

/// Catalog of the migration files in a directory on disk, in lexical order.
#[derive(Debug, Clone)]
pub struct DirCatalog {
    dir: PathBuf,
}

impl DirCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl MigrationCatalog for DirCatalog {
    fn file_names(&self) -> CatalogResult<Vec<String>> {
        let list_failed = |source| CatalogError::ListFailed {
            location: self.dir.display().to_string(),
            source,
        };

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.dir).map_err(list_failed)? {
            let entry = entry.map_err(list_failed)?;
            if !entry.file_type().map_err(list_failed)?.is_file() {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn location(&self) -> String {
        self.dir.display().to_string()
    }
}

/// Catalog over a fixed list of file names, kept in the given order.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    names: Vec<String>,
}

impl StaticCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl MigrationCatalog for StaticCatalog {
    fn file_names(&self) -> CatalogResult<Vec<String>> {
        Ok(self.names.clone())
    }

    fn location(&self) -> String {
        "static".to_string()
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
