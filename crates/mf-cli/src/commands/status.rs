//! Status command implementation

use anyhow::{Context, Result};
use mf_upgrade::inspect;

use crate::cli::{GlobalArgs, StatusArgs};
use crate::context::RuntimeContext;

/// Execute the status command
pub fn execute(args: &StatusArgs, global: &GlobalArgs) -> Result<()> {
    let rt = RuntimeContext::new(global)?;
    let ctx = rt.upgrade_context()?;

    let status = inspect(&ctx).context("Failed to inspect the schema migrations table")?;

    if args.json {
        let value = serde_json::json!({
            "table": status.table,
            "dialect": rt.config.dialect().to_string(),
            "needs_migration": status.needs_migration,
            "legacy_version": status.legacy_version,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    match status.legacy_version {
        Some(version) if status.needs_migration => println!(
            "{}: legacy format at version {version}; run `mf ensure` to upgrade",
            status.table
        ),
        _ => println!("{}: up to date", status.table),
    }
    Ok(())
}
