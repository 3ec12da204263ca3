//! Format detection for the bookkeeping table.

use crate::context::UpgradeContext;
use crate::error::{UpgradeError, UpgradeResult};

/// True when the canonical bookkeeping table still has the legacy `dirty`
/// column and must be rewritten.
pub fn needs_format_migration(ctx: &UpgradeContext<'_>) -> UpgradeResult<bool> {
    let table = &ctx.names().canonical;
    ctx.dialect()
        .has_dirty_column(ctx.db(), table)
        .map_err(|source| {
            log::error!(
                "Failed to check for columns of schema migrations table table={table} dialect={} backend={} error={source}",
                ctx.dialect().dialect(),
                ctx.db().db_type()
            );
            UpgradeError::Detect {
                table: table.to_string(),
                source,
            }
        })
}
