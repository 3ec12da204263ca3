//! Multi-row INSERT builder with per-dialect placeholders.

use crate::error::{DbError, DbResult};
use crate::value::SqlValue;

/// Bind-parameter placeholder syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaceholderStyle {
    /// `?` (SQLite, MySQL, DuckDB)
    #[default]
    Question,
    /// `$1`, `$2`, ... (Postgres, DuckDB)
    Dollar,
}

/// Builds a single `INSERT INTO t (a, b) VALUES (..), (..)` statement.
#[derive(Debug, Clone)]
pub struct InsertBuilder {
    table: String,
    columns: Vec<String>,
    rows: Vec<Vec<SqlValue>>,
}

impl InsertBuilder {
    /// Start an insert into `table`.
    pub fn into_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Set the target column list.
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = columns.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Append one row of values.
    pub fn values(mut self, row: Vec<SqlValue>) -> Self {
        self.rows.push(row);
        self
    }

    /// Number of rows added so far.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render the SQL text and the flattened parameter list.
    ///
    /// Fails when no rows were added or a row's width differs from the
    /// column list.
    pub fn build(&self, style: PlaceholderStyle) -> DbResult<(String, Vec<SqlValue>)> {
        if self.columns.is_empty() {
            return Err(DbError::InvalidStatement(format!(
                "insert into {} has no columns",
                self.table
            )));
        }
        if self.rows.is_empty() {
            return Err(DbError::InvalidStatement(format!(
                "insert into {} must have at least one set of values",
                self.table
            )));
        }

        let width = self.columns.len();
        let mut params = Vec::with_capacity(self.rows.len() * width);
        let mut groups = Vec::with_capacity(self.rows.len());

        for (i, row) in self.rows.iter().enumerate() {
            if row.len() != width {
                return Err(DbError::InvalidStatement(format!(
                    "row {i} has {} values, expected {width}",
                    row.len()
                )));
            }
            let placeholders: Vec<String> = (0..width)
                .map(|j| match style {
                    PlaceholderStyle::Question => "?".to_string(),
                    PlaceholderStyle::Dollar => format!("${}", i * width + j + 1),
                })
                .collect();
            groups.push(format!("({})", placeholders.join(", ")));
            params.extend(row.iter().cloned());
        }

        let sql = format!(
            "INSERT INTO {} ({}) VALUES {}",
            self.table,
            self.columns.join(", "),
            groups.join(", ")
        );
        Ok((sql, params))
    }
}
