use super::*;

#[test]
fn test_parse_up_file_name() {
    let m = MigrationDescriptor::parse_file_name("000003_add_index.up.sql").unwrap();
    assert_eq!(m.version, 3);
    assert_eq!(m.name, "add_index");
    assert_eq!(m.direction, Direction::Up);
    assert!(m.is_up());
}

#[test]
fn test_parse_down_file_name() {
    let m = MigrationDescriptor::parse_file_name("000012_drop_boards.down.sql").unwrap();
    assert_eq!(m, MigrationDescriptor::down(12, "drop_boards"));
    assert!(!m.is_up());
}

#[test]
fn test_parse_keeps_underscores_in_name() {
    let m = MigrationDescriptor::parse_file_name("7_add_users_table.up.sql").unwrap();
    assert_eq!(m.version, 7);
    assert_eq!(m.name, "add_users_table");
}

#[test]
fn test_parse_rejects_missing_extension() {
    let err = MigrationDescriptor::parse_file_name("000001_init.up").unwrap_err();
    assert!(err.to_string().contains("[C004]"));
    assert!(err.to_string().contains("000001_init.up"));
}

#[test]
fn test_parse_rejects_missing_direction() {
    assert!(MigrationDescriptor::parse_file_name("000001_init.sql").is_err());
}

#[test]
fn test_parse_rejects_non_numeric_version() {
    assert!(MigrationDescriptor::parse_file_name("v1_init.up.sql").is_err());
    assert!(MigrationDescriptor::parse_file_name("_init.up.sql").is_err());
}

#[test]
fn test_parse_rejects_empty_name() {
    assert!(MigrationDescriptor::parse_file_name("000001_.up.sql").is_err());
    assert!(MigrationDescriptor::parse_file_name("000001.up.sql").is_err());
}

#[test]
fn test_parse_rejects_overflowing_version() {
    let err =
        MigrationDescriptor::parse_file_name("99999999999999999999999_big.up.sql").unwrap_err();
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn test_display() {
    let m = MigrationDescriptor::up(5, "add_constraint");
    assert_eq!(m.to_string(), "000005_add_constraint (up)");
}
