//! DuckDB database backend implementation

use crate::error::{DbError, DbResult, StatementKind};
use crate::traits::Database;
use crate::value::{Row, SqlValue};
use duckdb::types::{ToSqlOutput, Value};
use duckdb::{params_from_iter, Connection, ToSql};
use std::path::Path;

/// DuckDB database backend
///
/// Single-threaded: the upgrader runs sequentially, so no `Mutex` is needed.
pub struct DuckDbBackend {
    conn: Connection,
}

impl DuckDbBackend {
    /// Create a new in-memory DuckDB connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Create a new DuckDB connection from a file path
    pub fn from_path(path: &Path) -> DbResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| DbError::ConnectionError(format!("{e}: {}", path.display())))?;
        Ok(Self { conn })
    }

    /// Create from path string (handles :memory: special case)
    pub fn new(path: &str) -> DbResult<Self> {
        if path == ":memory:" {
            Self::in_memory()
        } else {
            Self::from_path(Path::new(path))
        }
    }

    fn collect_rows(&self, sql: &str, params: &[SqlValue]) -> duckdb::Result<Vec<Row>> {
        // DuckDB panics on `stmt.column_count()` before execution, so the
        // width is read from each row. The statement is dropped with this scope.
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                let col_count = row.as_ref().column_count();
                Ok((0..col_count).map(|i| value_at(row, i)).collect::<Row>())
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

/// Read a column value, trying DuckDB types from narrowest to widest.
///
/// DuckDB does not coerce between integer and text on `get`, so each type is
/// tried in turn: i64 -> String -> bool -> f64 -> NULL.
fn value_at(row: &duckdb::Row<'_>, idx: usize) -> SqlValue {
    if let Ok(Some(n)) = row.get::<_, Option<i64>>(idx) {
        return SqlValue::Integer(n);
    }
    if let Ok(Some(s)) = row.get::<_, Option<String>>(idx) {
        return SqlValue::Text(s);
    }
    if let Ok(Some(b)) = row.get::<_, Option<bool>>(idx) {
        return SqlValue::Integer(i64::from(b));
    }
    if let Ok(Some(f)) = row.get::<_, Option<f64>>(idx) {
        return SqlValue::Real(f);
    }
    SqlValue::Null
}

impl ToSql for SqlValue {
    fn to_sql(&self) -> duckdb::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::Owned(match self {
            SqlValue::Null => Value::Null,
            SqlValue::Integer(n) => Value::BigInt(*n),
            SqlValue::Real(x) => Value::Double(*x),
            SqlValue::Text(s) => Value::Text(s.clone()),
        }))
    }
}

/// Classify a DuckDB error by inspecting its message.
///
/// duckdb::Error does not expose structured constraint variants, so string
/// matching is the only reliable approach.
fn classify(err: duckdb::Error, sql: &str, kind: StatementKind) -> DbError {
    let msg = err.to_string();
    let constraint = msg.contains("Constraint Error") || msg.contains("Duplicate key");
    kind.error(sql, msg, constraint)
}

impl Database for DuckDbBackend {
    fn query_rows(&self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<Row>> {
        self.collect_rows(sql, params)
            .map_err(|e| classify(e, sql, StatementKind::Query))
    }

    fn execute(&self, sql: &str, params: &[SqlValue]) -> DbResult<usize> {
        self.conn
            .execute(sql, params_from_iter(params.iter()))
            .map_err(|e| classify(e, sql, StatementKind::Execute))
    }

    fn execute_ddl(&self, sql: &str) -> DbResult<()> {
        self.conn
            .execute_batch(sql)
            .map_err(|e| classify(e, sql, StatementKind::Ddl))
    }

    fn db_type(&self) -> &'static str {
        "duckdb"
    }
}

#[cfg(test)]
#[path = "duckdb_test.rs"]
mod tests;
