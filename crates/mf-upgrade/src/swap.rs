//! Building the new-shape table and swapping it into place.
//!
//! Every function here issues one or two statements and never rolls back.
//! A failure leaves the tables where they are for an operator to inspect.

use crate::context::UpgradeContext;
use crate::error::{UpgradeError, UpgradeResult, UpgradeStep};
use mf_core::{MigrationDescriptor, TableName};
use mf_db::{DbError, DbResult, InsertBuilder, SqlValue};

/// Longest migration name the new table accepts.
pub const MAX_NAME_LEN: usize = 64;

fn step_error(step: UpgradeStep, table: &TableName, source: DbError) -> UpgradeError {
    UpgradeError::Step {
        step,
        table: table.to_string(),
        source,
    }
}

/// Create the temporary new-shape table if it does not exist yet.
///
/// `legacy_version` and `migrations` only feed the failure log.
pub fn create_temp_table(
    ctx: &UpgradeContext<'_>,
    legacy_version: u32,
    migrations: usize,
) -> UpgradeResult<()> {
    let temp = &ctx.names().temp;
    let sql = format!(
        "CREATE TABLE IF NOT EXISTS {temp} (Version bigint NOT NULL, Name varchar({MAX_NAME_LEN}) NOT NULL, PRIMARY KEY (Version))"
    );
    ctx.db().execute_ddl(&sql).map_err(|source| {
        log::error!(
            "Failed to create temporary schema migration table table={temp} legacy_version={legacy_version} migrations={migrations} error={source}"
        );
        step_error(UpgradeStep::CreateTempTable, temp, source)
    })
}

/// Insert one `(Version, Name)` row per migration with a single statement.
///
/// A duplicate version is rejected by the primary key and aborts the
/// upgrade. An empty list issues no statement when `legacy_version` is 0
/// and fails with [`DbError::InvalidStatement`] for any other version.
pub fn populate_temp_table(
    ctx: &UpgradeContext<'_>,
    migrations: &[MigrationDescriptor],
    legacy_version: u32,
) -> UpgradeResult<()> {
    let temp = &ctx.names().temp;
    if migrations.is_empty() && legacy_version == 0 {
        log::info!("No migrations to register table={temp} legacy_version={legacy_version}");
        return Ok(());
    }

    let result = build_insert(ctx, migrations).and_then(|(sql, params)| {
        ctx.db().execute(&sql, &params).map(|_| ())
    });

    result.map_err(|source| {
        log::error!(
            "Failed to insert migration records into temporary schema table table={temp} legacy_version={legacy_version} migrations={} error={source}",
            migrations.len()
        );
        step_error(UpgradeStep::PopulateTempTable, temp, source)
    })
}

fn build_insert(
    ctx: &UpgradeContext<'_>,
    migrations: &[MigrationDescriptor],
) -> DbResult<(String, Vec<SqlValue>)> {
    let mut insert =
        InsertBuilder::into_table(ctx.names().temp.as_str()).columns(&["Version", "Name"]);

    for migration in migrations {
        log::info!(
            "-- Registering migration version={} name={}",
            migration.version,
            migration.name
        );
        let version = i64::try_from(migration.version).map_err(|_| {
            DbError::InvalidStatement(format!(
                "migration version {} exceeds the bigint range",
                migration.version
            ))
        })?;
        insert = insert.values(vec![version.into(), migration.name.as_str().into()]);
    }

    insert.build(ctx.dialect().placeholder_style())
}

/// Demote the canonical table to the backup name, then promote the
/// temporary table to the canonical name.
///
/// The canonical name must be vacant before the second rename.
pub fn use_new_schema_table(
    ctx: &UpgradeContext<'_>,
    legacy_version: u32,
    migrations: usize,
) -> UpgradeResult<()> {
    let names = ctx.names();
    let dialect = ctx.dialect();

    dialect
        .rename_table(ctx.db(), &names.canonical, &names.backup)
        .map_err(|source| {
            log::error!(
                "Failed to rename old schema migration table table={} backup={} legacy_version={legacy_version} migrations={migrations} error={source}",
                names.canonical,
                names.backup
            );
            step_error(UpgradeStep::RenameLegacyTable, &names.canonical, source)
        })?;

    dialect
        .rename_table(ctx.db(), &names.temp, &names.canonical)
        .map_err(|source| {
            log::error!(
                "Failed to rename temporary schema table table={} target={} legacy_version={legacy_version} migrations={migrations} error={source}",
                names.temp,
                names.canonical
            );
            step_error(UpgradeStep::PromoteTempTable, &names.temp, source)
        })?;

    Ok(())
}

/// Drop the demoted legacy table, if present.
///
/// Never called by [`crate::ensure_schema_migration_format`]; run it once
/// the promoted table has been verified. Safe to call any number of times.
pub fn delete_old_schema_migration_table(ctx: &UpgradeContext<'_>) -> UpgradeResult<()> {
    let backup = &ctx.names().backup;
    ctx.db()
        .execute_ddl(&format!("DROP TABLE IF EXISTS {backup}"))
        .map_err(|source| {
            log::error!("Failed to delete old temp schema migrations table table={backup} error={source}");
            step_error(UpgradeStep::DropOldTable, backup, source)
        })?;
    log::info!("Old schema migrations table removed if present table={backup}");
    Ok(())
}

#[cfg(test)]
#[path = "swap_test.rs"]
mod tests;
