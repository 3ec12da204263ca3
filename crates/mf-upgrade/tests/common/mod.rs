//! Shared fixtures for upgrader integration tests.

#![allow(dead_code)]

use mf_catalog::StaticCatalog;
use mf_db::{Database, DbResult, Row, SqlValue};
use std::cell::Cell;

/// Wraps a backend and counts data- and schema-modifying statements.
pub struct CountingDb<D> {
    inner: D,
    writes: Cell<usize>,
}

impl<D: Database> CountingDb<D> {
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            writes: Cell::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D: Database> Database for CountingDb<D> {
    fn query_rows(&self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<Row>> {
        self.inner.query_rows(sql, params)
    }

    fn execute(&self, sql: &str, params: &[SqlValue]) -> DbResult<usize> {
        self.writes.set(self.writes.get() + 1);
        self.inner.execute(sql, params)
    }

    fn execute_ddl(&self, sql: &str) -> DbResult<()> {
        self.writes.set(self.writes.get() + 1);
        self.inner.execute_ddl(sql)
    }

    fn db_type(&self) -> &'static str {
        self.inner.db_type()
    }
}

/// Up/Down pairs for v1..v6, v6 being a migration not yet applied.
pub fn scenario_catalog() -> StaticCatalog {
    let mut names = Vec::new();
    for (version, name) in [
        (1, "init"),
        (2, "add_users"),
        (3, "add_index"),
        (4, "add_column"),
        (5, "add_constraint"),
        (6, "future"),
    ] {
        names.push(format!("{version:06}_{name}.up.sql"));
        names.push(format!("{version:06}_{name}.down.sql"));
    }
    StaticCatalog::new(names)
}

/// Create `<prefix>schema_migrations` in the legacy shape holding one row.
pub fn create_legacy_table(db: &dyn Database, prefix: &str, version: i64) {
    db.execute_ddl(&format!(
        "CREATE TABLE {prefix}schema_migrations (version bigint NOT NULL, dirty boolean NOT NULL)"
    ))
    .unwrap();
    db.execute(
        &format!("INSERT INTO {prefix}schema_migrations (version, dirty) VALUES (?, false)"),
        &[SqlValue::Integer(version)],
    )
    .unwrap();
}

/// `(Version, Name)` rows of a new-shape table, ordered by version.
pub fn registered(db: &dyn Database, table: &str) -> Vec<(i64, String)> {
    db.query_rows(&format!("SELECT Version, Name FROM {table} ORDER BY Version"), &[])
        .unwrap()
        .into_iter()
        .map(|row| {
            (
                row[0].as_i64().unwrap(),
                row[1].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

pub fn expected_v1_to_v5() -> Vec<(i64, String)> {
    vec![
        (1, "init".to_string()),
        (2, "add_users".to_string()),
        (3, "add_index".to_string()),
        (4, "add_column".to_string()),
        (5, "add_constraint".to_string()),
    ]
}
