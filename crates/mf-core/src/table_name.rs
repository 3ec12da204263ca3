//! Strongly-typed table names for the migration bookkeeping tables.

use std::fmt;
use std::ops::Deref;

/// Unprefixed name of the bookkeeping table, in both the legacy and new shape.
pub const SCHEMA_MIGRATIONS_TABLE: &str = "schema_migrations";

/// Unprefixed working name of the new-shape table before promotion.
pub const TEMP_SCHEMA_MIGRATION_TABLE: &str = "temp_schema_migration";

/// Suffix appended to the canonical name when the legacy table is demoted.
pub const OLD_TABLE_SUFFIX: &str = "_old_temp";

/// Strongly-typed wrapper for a fully-prefixed table name.
///
/// Prevents accidental mixing of table names with column names or other
/// string types when building SQL text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableName(String);

impl TableName {
    /// Create a new `TableName`, panicking in debug builds if the name is empty.
    pub fn new(name: impl Into<String>) -> Self {
        let s = name.into();
        debug_assert!(!s.is_empty(), "TableName must not be empty");
        Self(s)
    }

    /// Return the underlying name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for TableName {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

/// The three tables involved in a format upgrade, all carrying the same
/// deployment prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    /// `<prefix>schema_migrations`
    pub canonical: TableName,
    /// `<prefix>temp_schema_migration`
    pub temp: TableName,
    /// `<prefix>schema_migrations_old_temp`
    pub backup: TableName,
}

impl TableNames {
    /// Derive every bookkeeping table name from a table prefix.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            canonical: TableName::new(format!("{prefix}{SCHEMA_MIGRATIONS_TABLE}")),
            temp: TableName::new(format!("{prefix}{TEMP_SCHEMA_MIGRATION_TABLE}")),
            backup: TableName::new(format!(
                "{prefix}{SCHEMA_MIGRATIONS_TABLE}{OLD_TABLE_SUFFIX}"
            )),
        }
    }
}

impl Default for TableNames {
    fn default() -> Self {
        Self::with_prefix("")
    }
}
