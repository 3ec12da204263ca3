use super::*;

#[test]
fn test_in_memory() {
    let db = DuckDbBackend::in_memory().unwrap();
    assert_eq!(db.db_type(), "duckdb");
}

#[test]
fn test_new_handles_memory_and_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.duckdb");
    let db = DuckDbBackend::new(path.to_str().unwrap()).unwrap();
    db.execute_ddl("CREATE TABLE t (id INTEGER)").unwrap();
    assert!(path.exists());

    let mem = DuckDbBackend::new(":memory:").unwrap();
    assert_eq!(mem.query_scalar_i64("SELECT 1", &[]).unwrap(), 1);
}

#[test]
fn test_execute_with_params_and_query_rows() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_ddl("CREATE TABLE t (id BIGINT PRIMARY KEY, name VARCHAR NOT NULL)")
        .unwrap();
    db.execute(
        "INSERT INTO t (id, name) VALUES ($1, $2), ($3, $4)",
        &[1i64.into(), "a".into(), 2i64.into(), "b".into()],
    )
    .unwrap();

    let rows = db
        .query_rows("SELECT id, name FROM t ORDER BY id", &[])
        .unwrap();
    assert_eq!(
        rows,
        vec![
            vec![SqlValue::Integer(1), SqlValue::Text("a".into())],
            vec![SqlValue::Integer(2), SqlValue::Text("b".into())],
        ]
    );
}

#[test]
fn test_information_schema_count() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_ddl("CREATE TABLE t (version BIGINT, dirty BOOLEAN)")
        .unwrap();
    let count = db
        .query_scalar_i64(
            "SELECT COUNT(*) FROM information_schema.columns WHERE table_name = ? AND column_name = ?",
            &["t".into(), "dirty".into()],
        )
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn test_boolean_read_as_integer() {
    let db = DuckDbBackend::in_memory().unwrap();
    let rows = db.query_rows("SELECT true, NULL::VARCHAR", &[]).unwrap();
    assert_eq!(rows, vec![vec![SqlValue::Integer(1), SqlValue::Null]]);
}

#[test]
fn test_duplicate_primary_key_is_constraint_violation() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_ddl("CREATE TABLE t (id BIGINT PRIMARY KEY)")
        .unwrap();
    let err = db
        .execute("INSERT INTO t VALUES (?), (?)", &[1i64.into(), 1i64.into()])
        .unwrap_err();
    assert!(err.is_constraint_violation(), "got {err}");
}

#[test]
fn test_drop_if_exists_is_idempotent() {
    let db = DuckDbBackend::in_memory().unwrap();
    db.execute_ddl("DROP TABLE IF EXISTS nothing_here").unwrap();
    db.execute_ddl("DROP TABLE IF EXISTS nothing_here").unwrap();
}

#[test]
fn test_missing_table_is_query_error() {
    let db = DuckDbBackend::in_memory().unwrap();
    let err = db.query_rows("SELECT * FROM missing", &[]).unwrap_err();
    assert!(matches!(err, DbError::QueryError { .. }));
}
