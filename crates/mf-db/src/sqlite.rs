//! SQLite database backend implementation

use crate::error::{DbError, DbResult, StatementKind};
use crate::traits::Database;
use crate::value::{Row, SqlValue};
use rusqlite::types::{ToSqlOutput, Value, ValueRef};
use rusqlite::{params_from_iter, Connection, ErrorCode, ToSql};
use std::path::Path;

/// SQLite database backend
///
/// Single-threaded: the upgrader runs sequentially, so no `Mutex` is needed.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    /// Create a new in-memory SQLite connection
    pub fn in_memory() -> DbResult<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| DbError::ConnectionError(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Create a new SQLite connection from a file path
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

    fn collect_rows(&self, sql: &str, params: &[SqlValue]) -> rusqlite::Result<Vec<Row>> {
        // The statement and its cursor are dropped at the end of this scope,
        // whichever way it is left.
        let mut stmt = self.conn.prepare(sql)?;
        let column_count = stmt.column_count();
        let mut rows = stmt.query(params_from_iter(params.iter()))?;

        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(column_count);
            for idx in 0..column_count {
                values.push(from_value_ref(row.get_ref(idx)?));
            }
            out.push(values);
        }
        Ok(out)
    }
}

fn from_value_ref(value: ValueRef<'_>) -> SqlValue {
    match value {
        ValueRef::Null => SqlValue::Null,
        ValueRef::Integer(n) => SqlValue::Integer(n),
        ValueRef::Real(x) => SqlValue::Real(x),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            SqlValue::Text(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

impl ToSql for SqlValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlValue::Null => ToSqlOutput::Owned(Value::Null),
            SqlValue::Integer(n) => ToSqlOutput::Owned(Value::Integer(*n)),
            SqlValue::Real(x) => ToSqlOutput::Owned(Value::Real(*x)),
            SqlValue::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

/// Classify a rusqlite error using SQLite's result code.
fn classify(err: rusqlite::Error, sql: &str, kind: StatementKind) -> DbError {
    let constraint = err.sqlite_error_code() == Some(ErrorCode::ConstraintViolation);
    kind.error(sql, err.to_string(), constraint)
}

impl Database for SqliteBackend {
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
            .execute(sql, [])
            .map(|_| ())
            .map_err(|e| classify(e, sql, StatementKind::Ddl))
    }

    fn db_type(&self) -> &'static str {
        "sqlite"
    }
}

#[cfg(test)]
#[path = "sqlite_test.rs"]
mod tests;
