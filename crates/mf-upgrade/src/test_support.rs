//! Scripted `Database` double for unit tests.

use mf_db::{Database, DbError, DbResult, Row, SqlValue};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Records every statement and answers queries from a script.
#[derive(Default)]
pub(crate) struct ScriptedDb {
    responses: RefCell<VecDeque<DbResult<Vec<Row>>>>,
    fail_statements_containing: Option<String>,
    pub(crate) statements: RefCell<Vec<(String, Vec<SqlValue>)>>,
}

impl ScriptedDb {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue the rows returned by the next `query_rows` call.
    pub(crate) fn respond(self, rows: Vec<Row>) -> Self {
        self.responses.borrow_mut().push_back(Ok(rows));
        self
    }

    /// Queue an error for the next `query_rows` call.
    pub(crate) fn respond_err(self, err: DbError) -> Self {
        self.responses.borrow_mut().push_back(Err(err));
        self
    }

    /// Fail any executed statement whose text contains `needle`.
    pub(crate) fn fail_on(mut self, needle: &str) -> Self {
        self.fail_statements_containing = Some(needle.to_string());
        self
    }

    pub(crate) fn sql(&self) -> Vec<String> {
        self.statements
            .borrow()
            .iter()
            .map(|(sql, _)| sql.clone())
            .collect()
    }

    fn record(&self, sql: &str, params: &[SqlValue]) -> DbResult<()> {
        self.statements
            .borrow_mut()
            .push((sql.to_string(), params.to_vec()));
        match &self.fail_statements_containing {
            Some(needle) if sql.contains(needle.as_str()) => Err(DbError::DdlError {
                sql: sql.to_string(),
                message: "scripted failure".to_string(),
            }),
            _ => Ok(()),
        }
    }
}

impl Database for ScriptedDb {
    fn query_rows(&self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<Row>> {
        self.statements
            .borrow_mut()
            .push((sql.to_string(), params.to_vec()));
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn execute(&self, sql: &str, params: &[SqlValue]) -> DbResult<usize> {
        self.record(sql, params)?;
        Ok(params.len() / 2)
    }

    fn execute_ddl(&self, sql: &str) -> DbResult<()> {
        self.record(sql, &[])
    }

    fn db_type(&self) -> &'static str {
        "scripted"
    }
}

/// A single-cell integer row, as returned by `SELECT COUNT(*)`.
pub(crate) fn count_row(n: i64) -> Vec<Row> {
    vec![vec![SqlValue::Integer(n)]]
}

/// A `PRAGMA table_info` row for a column called `name`.
pub(crate) fn table_info_row(cid: i64, name: &str) -> Row {
    vec![
        SqlValue::Integer(cid),
        SqlValue::Text(name.to_string()),
        SqlValue::Text("INTEGER".to_string()),
        SqlValue::Integer(0),
        SqlValue::Null,
        SqlValue::Integer(0),
    ]
}
