//! Ensure command implementation

use anyhow::{Context, Result};
use mf_upgrade::{delete_old_schema_migration_table, ensure_schema_migration_format, UpgradeOutcome};

use crate::cli::{EnsureArgs, GlobalArgs};
use crate::context::RuntimeContext;

/// Execute the ensure command
pub fn execute(args: &EnsureArgs, global: &GlobalArgs) -> Result<()> {
    let rt = RuntimeContext::new(global)?;
    let ctx = rt.upgrade_context()?;
    let catalog = rt.catalog();

    let outcome = ensure_schema_migration_format(&ctx, catalog.as_ref())
        .context("Schema migration table upgrade failed; refusing to continue")?;

    match outcome {
        UpgradeOutcome::AlreadyCurrent => {
            println!("{} is already in the new format", ctx.names().canonical);
        }
        UpgradeOutcome::Migrated {
            legacy_version,
            registered,
        } => {
            println!(
                "Upgraded {} from legacy version {legacy_version}: {registered} migrations registered",
                ctx.names().canonical
            );
            if args.cleanup {
                delete_old_schema_migration_table(&ctx)
                    .context("Failed to drop the old schema migrations table")?;
                println!("Dropped {}", ctx.names().backup);
            } else {
                println!(
                    "Previous table kept as {}; run `mf cleanup` once verified",
                    ctx.names().backup
                );
            }
        }
    }

    Ok(())
}
