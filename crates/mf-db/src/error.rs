//! Error types for mf-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Database connection failed: {0}")]
    ConnectionError(String),

    /// Row or scalar query failed (D002)
    #[error("[D002] Query failed: {message} [sql: {sql}]")]
    QueryError { sql: String, message: String },

    /// A result row had an unexpected column count, row count, or type (D003)
    #[error("[D003] Unexpected result shape: {0}")]
    ShapeError(String),

    /// DDL statement failed (D004)
    #[error("[D004] DDL statement failed: {message} [sql: {sql}]")]
    DdlError { sql: String, message: String },

    /// Statement violated a constraint, e.g. a duplicate primary key (D005)
    #[error("[D005] Constraint violation: {message} [sql: {sql}]")]
    ConstraintViolation { sql: String, message: String },

    /// Data-modifying statement failed (D006)
    #[error("[D006] SQL execution failed: {message} [sql: {sql}]")]
    ExecutionError { sql: String, message: String },

    /// Statement could not be built from the supplied parts (D007)
    #[error("[D007] Invalid statement: {0}")]
    InvalidStatement(String),
}

impl DbError {
    /// True for primary-key and other constraint failures.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, DbError::ConstraintViolation { .. })
    }
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

/// Statement category, used by backends to classify driver errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatementKind {
    Query,
    Execute,
    Ddl,
}

impl StatementKind {
    /// Build the error for a failed statement of this kind.
    pub(crate) fn error(self, sql: &str, message: String, constraint: bool) -> DbError {
        let sql = sql.to_string();
        if constraint {
            return DbError::ConstraintViolation { sql, message };
        }
        match self {
            StatementKind::Query => DbError::QueryError { sql, message },
            StatementKind::Execute => DbError::ExecutionError { sql, message },
            StatementKind::Ddl => DbError::DdlError { sql, message },
        }
    }
}
