//! Ls command implementation

use anyhow::{Context, Result};
use mf_catalog::filter_migrations;
use serde::Serialize;

use crate::cli::{GlobalArgs, LsArgs};
use crate::context::{catalog_for, load_config};

#[derive(Serialize)]
struct LsEntry<'a> {
    version: u64,
    name: &'a str,
}

/// Execute the ls command
///
/// Only reads the catalog; no database connection is opened.
pub fn execute(args: &LsArgs, global: &GlobalArgs) -> Result<()> {
    let config = load_config(global)?;
    let catalog = catalog_for(&config, std::path::Path::new(&global.project_dir));

    let mut migrations = catalog
        .list_up_migrations()
        .with_context(|| format!("Failed to list migrations from {}", catalog.location()))?;
    if let Some(version) = args.up_to {
        migrations = filter_migrations(&migrations, version);
    }

    if args.json {
        let entries: Vec<LsEntry<'_>> = migrations
            .iter()
            .map(|m| LsEntry {
                version: m.version,
                name: &m.name,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for m in &migrations {
        println!("{:>6}  {}", m.version, m.name);
    }
    println!("{} migrations ({})", migrations.len(), catalog.location());
    Ok(())
}
