//! Per-dialect capabilities: dirty-column detection and table renames.
//!
//! Each supported dialect is one [`DialectOps`] implementation, so no
//! operation branches on the dialect itself.

use mf_core::{Dialect, TableName};
use mf_db::{Database, DbError, DbResult, PlaceholderStyle, SqlValue};

/// Column that only exists on the legacy bookkeeping table.
pub const DIRTY_COLUMN: &str = "dirty";

/// `PRAGMA table_info` returns cid, name, type, notnull, dflt_value, pk.
const TABLE_INFO_COLUMNS: usize = 6;
const TABLE_INFO_NAME_IDX: usize = 1;

/// Dialect-specific SQL used by the upgrader.
pub trait DialectOps {
    /// Dialect tag, for logging
    fn dialect(&self) -> Dialect;

    /// Placeholder syntax for bound parameters
    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Question
    }

    /// Whether `table` has a `dirty` column, i.e. is in the legacy shape.
    ///
    /// A table that does not exist has no `dirty` column.
    fn has_dirty_column(&self, db: &dyn Database, table: &TableName) -> DbResult<bool>;

    /// Statement renaming `old` to `new`
    fn rename_table_sql(&self, old: &TableName, new: &TableName) -> String {
        format!("ALTER TABLE {old} RENAME TO {new}")
    }

    /// Rename `old` to `new` with a single statement.
    fn rename_table(&self, db: &dyn Database, old: &TableName, new: &TableName) -> DbResult<()> {
        db.execute_ddl(&self.rename_table_sql(old, new))
    }
}

/// Build the capability object for `dialect`.
///
/// `schema_name` scopes MySQL introspection and is ignored elsewhere.
pub fn dialect_ops(dialect: Dialect, schema_name: Option<&str>) -> Box<dyn DialectOps> {
    match dialect {
        Dialect::Generic => Box::new(GenericDialect),
        Dialect::Mysql => Box::new(MysqlDialect::new(schema_name.unwrap_or_default())),
        Dialect::Postgres => Box::new(PostgresDialect),
        Dialect::Sqlite => Box::new(SqliteDialect),
    }
}

/// Count `dirty` columns on `table` in `information_schema.columns`.
///
/// The decision requires the count to be exactly 1, not merely positive.
fn dirty_column_count_is_one(
    db: &dyn Database,
    sql: &str,
    params: &[SqlValue],
) -> DbResult<bool> {
    let count = db.query_scalar_i64(sql, params)?;
    Ok(count == 1)
}

/// Plain `information_schema`, no schema scoping.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericDialect;

impl DialectOps for GenericDialect {
    fn dialect(&self) -> Dialect {
        Dialect::Generic
    }

    fn has_dirty_column(&self, db: &dyn Database, table: &TableName) -> DbResult<bool> {
        dirty_column_count_is_one(
            db,
            "SELECT COUNT(*) FROM information_schema.columns \
             WHERE table_name = ? AND column_name = ?",
            &[table.as_str().into(), DIRTY_COLUMN.into()],
        )
    }
}

/// MySQL-like: `information_schema` scoped by an explicit schema name,
/// `RENAME TABLE` syntax.
#[derive(Debug, Clone)]
pub struct MysqlDialect {
    schema_name: String,
}

impl MysqlDialect {
    pub fn new(schema_name: impl Into<String>) -> Self {
        Self {
            schema_name: schema_name.into(),
        }
    }
}

impl DialectOps for MysqlDialect {
    fn dialect(&self) -> Dialect {
        Dialect::Mysql
    }

    fn has_dirty_column(&self, db: &dyn Database, table: &TableName) -> DbResult<bool> {
        dirty_column_count_is_one(
            db,
            "SELECT COUNT(*) FROM information_schema.columns \
             WHERE table_name = ? AND column_name = ? AND table_schema = ?",
            &[
                table.as_str().into(),
                DIRTY_COLUMN.into(),
                self.schema_name.as_str().into(),
            ],
        )
    }

    fn rename_table_sql(&self, old: &TableName, new: &TableName) -> String {
        format!("RENAME TABLE `{old}` TO `{new}`")
    }
}

/// Postgres-like: `information_schema` scoped by the session's `current_schema()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl DialectOps for PostgresDialect {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
    }

    fn placeholder_style(&self) -> PlaceholderStyle {
        PlaceholderStyle::Dollar
    }

    fn has_dirty_column(&self, db: &dyn Database, table: &TableName) -> DbResult<bool> {
        // current_schema() is resolved server-side; binding it as a string
        // would compare against the literal text.
        dirty_column_count_is_one(
            db,
            "SELECT COUNT(*) FROM information_schema.columns \
             WHERE table_name = $1 AND column_name = $2 AND table_schema = current_schema()",
            &[table.as_str().into(), DIRTY_COLUMN.into()],
        )
    }
}

/// SQLite: no `information_schema`; columns come from `PRAGMA table_info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

impl DialectOps for SqliteDialect {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    fn has_dirty_column(&self, db: &dyn Database, table: &TableName) -> DbResult<bool> {
        let rows = db.query_rows(&format!("PRAGMA table_info('{table}')"), &[])?;

        let mut found = false;
        for row in &rows {
            if row.len() != TABLE_INFO_COLUMNS {
                return Err(DbError::ShapeError(format!(
                    "PRAGMA table_info returned {} columns, expected {TABLE_INFO_COLUMNS}",
                    row.len()
                )));
            }
            if row[TABLE_INFO_NAME_IDX].as_str() == Some(DIRTY_COLUMN) {
                found = true;
            }
        }
        Ok(found)
    }
}

#[cfg(test)]
#[path = "dialect_test.rs"]
mod tests;
