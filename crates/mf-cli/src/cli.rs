//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand};

/// migfmt - upgrade a legacy schema_migrations table to the per-migration format
#[derive(Parser, Debug)]
#[command(name = "mf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing migfmt.yml
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the table prefix (beats MF_TABLE_PREFIX and the config file)
    #[arg(long, global = true)]
    pub prefix: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upgrade the schema_migrations table if it is in the legacy format
    Ensure(EnsureArgs),

    /// Drop the schema_migrations_old_temp backup table
    Cleanup,

    /// Report whether the schema_migrations table needs upgrading
    Status(StatusArgs),

    /// List the up migrations in the catalog
    Ls(LsArgs),
}

/// Arguments for the ensure command
#[derive(Args, Debug)]
pub struct EnsureArgs {
    /// Drop the backup table right after a successful upgrade
    #[arg(long)]
    pub cleanup: bool,
}

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the ls command
#[derive(Args, Debug)]
pub struct LsArgs {
    /// Only list migrations at or below this legacy version
    #[arg(long)]
    pub up_to: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
