//! Reading the single version row of the legacy table.

use crate::context::UpgradeContext;
use crate::error::{UpgradeError, UpgradeResult};
use mf_db::DbError;

/// Read the `version` stored in the legacy bookkeeping table.
///
/// The legacy table holds exactly one row. No rows, several rows, or a value
/// that is not a `u32` fail the read.
pub fn read_legacy_version(ctx: &UpgradeContext<'_>) -> UpgradeResult<u32> {
    let table = &ctx.names().canonical;
    let sql = format!("SELECT version FROM {table}");

    let version = ctx
        .db()
        .query_scalar_i64(&sql, &[])
        .and_then(|v| {
            u32::try_from(v).map_err(|_| {
                DbError::ShapeError(format!("legacy version {v} does not fit in u32"))
            })
        })
        .map_err(|source| {
            log::error!("Error fetching legacy schema version table={table} error={source}");
            UpgradeError::ReadLegacyVersion {
                table: table.to_string(),
                source,
            }
        })?;

    log::debug!("Read legacy schema version table={table} version={version}");
    Ok(version)
}
