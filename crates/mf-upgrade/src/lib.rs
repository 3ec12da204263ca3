//! Upgrader for the schema-migration bookkeeping table.
//!
//! Detects a legacy `schema_migrations` table (one `version` row plus a
//! `dirty` flag) and rewrites it into the append-only, one-row-per-migration
//! shape, seeded with every catalog migration at or below the legacy version.
//!
//! [`ensure_schema_migration_format`] is safe to call on every startup: once
//! the table is in the new shape it returns without writing anything. The
//! demoted legacy table is kept as `<prefix>schema_migrations_old_temp`
//! until [`delete_old_schema_migration_table`] is called explicitly.

pub mod context;
pub mod detect;
pub mod dialect;
pub mod error;
pub mod legacy;
pub mod swap;
pub mod upgrade;

#[cfg(test)]
pub(crate) mod test_support;

pub use context::UpgradeContext;
pub use detect::needs_format_migration;
pub use dialect::{dialect_ops, DialectOps};
pub use error::{UpgradeError, UpgradeResult, UpgradeState, UpgradeStep};
pub use legacy::read_legacy_version;
pub use swap::delete_old_schema_migration_table;
pub use upgrade::{ensure_schema_migration_format, inspect, FormatStatus, UpgradeOutcome};
