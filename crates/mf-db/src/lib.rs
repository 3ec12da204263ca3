//! mf-db - Database abstraction layer for migfmt
//!
//! This crate provides the synchronous `Database` trait consumed by the
//! upgrader, a multi-row `InsertBuilder`, and implementations for DuckDB
//! and SQLite.

pub mod duckdb;
pub mod error;
pub mod insert;
pub mod sqlite;
pub mod traits;
pub mod value;

pub use self::duckdb::DuckDbBackend;
pub use error::{DbError, DbResult};
pub use insert::{InsertBuilder, PlaceholderStyle};
pub use sqlite::SqliteBackend;
pub use traits::Database;
pub use value::{Row, SqlValue};

use mf_core::DbType;
use std::path::Path;

/// Open a backend for `db_type` at `path` (`:memory:` opens an in-memory database).
pub fn connect(db_type: DbType, path: &Path) -> DbResult<Box<dyn Database>> {
    let path = path.to_string_lossy();
    Ok(match db_type {
        DbType::Sqlite => Box::new(SqliteBackend::new(&path)?),
        DbType::DuckDb => Box::new(DuckDbBackend::new(&path)?),
    })
}
