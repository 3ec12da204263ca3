//! The explicit context every upgrade operation runs against.

use crate::dialect::{dialect_ops, DialectOps};
use mf_core::{Config, CoreResult, TableNames};
use mf_db::Database;

/// Database handle, dialect capabilities, and table names for one upgrade.
///
/// Passed by reference into every operation; nothing is held globally.
pub struct UpgradeContext<'a> {
    db: &'a dyn Database,
    dialect: Box<dyn DialectOps>,
    names: TableNames,
}

impl<'a> UpgradeContext<'a> {
    pub fn new(db: &'a dyn Database, dialect: Box<dyn DialectOps>, names: TableNames) -> Self {
        Self { db, dialect, names }
    }

    /// Build a context from configuration, resolving the table prefix
    /// (CLI override > env var > config file).
    pub fn from_config(
        db: &'a dyn Database,
        config: &Config,
        cli_prefix: Option<&str>,
    ) -> CoreResult<Self> {
        let names = config.table_names(cli_prefix)?;
        let dialect = dialect_ops(config.dialect(), config.schema_name.as_deref());
        Ok(Self::new(db, dialect, names))
    }

    pub fn db(&self) -> &'a dyn Database {
        self.db
    }

    pub fn dialect(&self) -> &dyn DialectOps {
        self.dialect.as_ref()
    }

    pub fn names(&self) -> &TableNames {
        &self.names
    }
}
