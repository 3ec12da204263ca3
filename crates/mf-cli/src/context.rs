//! Runtime context for CLI commands

use anyhow::{Context, Result};
use mf_catalog::{DirCatalog, EmbeddedCatalog, MigrationCatalog};
use mf_core::Config;
use mf_db::Database;
use mf_upgrade::UpgradeContext;
use std::path::{Path, PathBuf};

use crate::cli::GlobalArgs;

/// Loaded configuration and open database connection
pub struct RuntimeContext {
    pub config: Config,
    pub root: PathBuf,
    pub db: Box<dyn Database>,
    prefix: Option<String>,
}

impl RuntimeContext {
    /// Load configuration and connect to the configured database
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let config = load_config(args)?;
        let root = PathBuf::from(&args.project_dir);
        let db_path = config.database_path_absolute(&root);

        log::debug!(
            "Connecting database type={} path={} dialect={}",
            config.database.db_type,
            db_path.display(),
            config.dialect()
        );
        let db = mf_db::connect(config.database.db_type, &db_path)
            .with_context(|| format!("Failed to connect to database at {}", db_path.display()))?;
        log::debug!("Connected backend={}", db.db_type());

        Ok(Self {
            config,
            root,
            db,
            prefix: args.prefix.clone(),
        })
    }

    /// Build the upgrade context over this connection
    pub fn upgrade_context(&self) -> Result<UpgradeContext<'_>> {
        UpgradeContext::from_config(self.db.as_ref(), &self.config, self.prefix.as_deref())
            .context("Failed to resolve table names")
    }

    /// Catalog to seed the new table from
    pub fn catalog(&self) -> Box<dyn MigrationCatalog> {
        catalog_for(&self.config, &self.root)
    }
}

/// Load config from the override path or the project directory
pub fn load_config(args: &GlobalArgs) -> Result<Config> {
    match &args.config {
        Some(path) => Config::load(Path::new(path)).context("Failed to load configuration file"),
        None => Config::load_from_dir(Path::new(&args.project_dir))
            .context("Failed to load project configuration"),
    }
}

/// The on-disk catalog when `migrations_dir` is set, else the embedded one
pub fn catalog_for(config: &Config, root: &Path) -> Box<dyn MigrationCatalog> {
    match config.migrations_dir_absolute(root) {
        Some(dir) => Box::new(DirCatalog::new(dir)),
        None => Box::new(EmbeddedCatalog),
    }
}
