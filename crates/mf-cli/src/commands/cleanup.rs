//! Cleanup command implementation

use anyhow::{Context, Result};
use mf_upgrade::delete_old_schema_migration_table;

use crate::cli::GlobalArgs;
use crate::context::RuntimeContext;

/// Execute the cleanup command
pub fn execute(global: &GlobalArgs) -> Result<()> {
    let rt = RuntimeContext::new(global)?;
    let ctx = rt.upgrade_context()?;

    delete_old_schema_migration_table(&ctx)
        .context("Failed to drop the old schema migrations table")?;

    println!("Removed {} (if it existed)", ctx.names().backup);
    Ok(())
}
