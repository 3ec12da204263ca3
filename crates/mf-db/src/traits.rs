//! Database trait definition

use crate::error::{DbError, DbResult};
use crate::value::{Row, SqlValue};

/// Database abstraction trait for migfmt
///
/// All calls are synchronous and run to completion. Implementations must
/// drain every result set and release the prepared statement before
/// returning, on success and on error.
pub trait Database {
    /// Run a query with bound parameters and collect every row
    fn query_rows(&self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<Row>>;

    /// Execute SQL that modifies data with bound parameters, returns affected rows
    fn execute(&self, sql: &str, params: &[SqlValue]) -> DbResult<usize>;

    /// Execute a single DDL statement (CREATE, ALTER, RENAME, DROP)
    fn execute_ddl(&self, sql: &str) -> DbResult<()>;

    /// Database type identifier for logging
    fn db_type(&self) -> &'static str;

    /// Run a query expected to return exactly one integer cell
    fn query_scalar_i64(&self, sql: &str, params: &[SqlValue]) -> DbResult<i64> {
        let rows = self.query_rows(sql, params)?;
        let row = match rows.as_slice() {
            [row] => row,
            _ => {
                return Err(DbError::ShapeError(format!(
                    "expected exactly 1 row, got {}",
                    rows.len()
                )))
            }
        };
        match row.as_slice() {
            [SqlValue::Integer(n)] => Ok(*n),
            [other] => Err(DbError::ShapeError(format!(
                "expected an integer, got {other}"
            ))),
            _ => Err(DbError::ShapeError(format!(
                "expected exactly 1 column, got {}",
                row.len()
            ))),
        }
    }
}
