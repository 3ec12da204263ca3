//! Orchestration of the format upgrade.

use crate::context::UpgradeContext;
use crate::detect::needs_format_migration;
use crate::error::{UpgradeError, UpgradeResult};
use crate::legacy::read_legacy_version;
use crate::swap::{create_temp_table, populate_temp_table, use_new_schema_table};
use mf_catalog::{filter_migrations, MigrationCatalog};

/// What [`ensure_schema_migration_format`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpgradeOutcome {
    /// The table was already in the new shape (or absent); nothing was written.
    AlreadyCurrent,
    /// The legacy table was rewritten and kept under the backup name.
    Migrated {
        legacy_version: u32,
        registered: usize,
    },
}

/// Read-only view of the bookkeeping table's format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatStatus {
    pub table: String,
    pub needs_migration: bool,
    /// Present only when the table is in the legacy shape.
    pub legacy_version: Option<u32>,
}

/// Rewrite a legacy bookkeeping table into the one-row-per-migration shape.
///
/// Runs detection first and returns [`UpgradeOutcome::AlreadyCurrent`]
/// without writing when no `dirty` column is present, so it can run on every
/// startup. Otherwise: read the legacy version, list and filter the catalog,
/// create and populate the temporary table, then swap it into place. A
/// non-zero legacy version with no catalog migrations at or below it fails
/// with [`UpgradeError::EmptyHistory`] before anything is written. The
/// first failing step stops the sequence and its error is returned; the
/// caller must not continue against a table of unknown shape.
///
/// The demoted legacy table is not dropped here; see
/// [`crate::delete_old_schema_migration_table`].
pub fn ensure_schema_migration_format(
    ctx: &UpgradeContext<'_>,
    catalog: &dyn MigrationCatalog,
) -> UpgradeResult<UpgradeOutcome> {
    let table = &ctx.names().canonical;

    if !needs_format_migration(ctx)? {
        log::debug!("Schema migrations table already in new format table={table}");
        return Ok(UpgradeOutcome::AlreadyCurrent);
    }

    log::info!(
        "Migrating schema migration table to new format table={table} backend={}",
        ctx.db().db_type()
    );

    let legacy_version = read_legacy_version(ctx)?;

    let migrations = catalog.list_up_migrations().map_err(|e| {
        log::error!(
            "Failed to list migrations table={table} legacy_version={legacy_version} location={} error={e}",
            catalog.location()
        );
        e
    })?;
    let filtered = filter_migrations(&migrations, legacy_version);

    if filtered.is_empty() && legacy_version > 0 {
        log::error!(
            "No catalog migrations cover the legacy version table={table} legacy_version={legacy_version} location={} listed={}",
            catalog.location(),
            migrations.len()
        );
        return Err(UpgradeError::EmptyHistory {
            table: table.to_string(),
            legacy_version,
            location: catalog.location(),
        });
    }

    create_temp_table(ctx, legacy_version, filtered.len())?;

    log::info!(
        "Populating the temporary schema table table={} legacy_version={legacy_version} migrations={}",
        ctx.names().temp,
        filtered.len()
    );
    populate_temp_table(ctx, &filtered, legacy_version)?;

    use_new_schema_table(ctx, legacy_version, filtered.len())?;

    log::info!(
        "Schema migration table migrated table={table} legacy_version={legacy_version} migrations={} backup={}",
        filtered.len(),
        ctx.names().backup
    );

    Ok(UpgradeOutcome::Migrated {
        legacy_version,
        registered: filtered.len(),
    })
}

/// Report whether an upgrade is needed without changing anything.
pub fn inspect(ctx: &UpgradeContext<'_>) -> UpgradeResult<FormatStatus> {
    let needs_migration = needs_format_migration(ctx)?;
    let legacy_version = if needs_migration {
        Some(read_legacy_version(ctx)?)
    } else {
        None
    };
    Ok(FormatStatus {
        table: ctx.names().canonical.to_string(),
        needs_migration,
        legacy_version,
    })
}

#[cfg(test)]
#[path = "upgrade_test.rs"]
mod tests;
