//! Configuration types and parsing for migfmt.yml

use crate::error::{CoreError, CoreResult};
use crate::table_name::TableNames;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `table_prefix` from the config file.
pub const TABLE_PREFIX_ENV: &str = "MF_TABLE_PREFIX";

/// Main configuration from migfmt.yml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Database connection configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// SQL dialect used for introspection and rename syntax.
    ///
    /// Defaults to the natural dialect of `database.type` when omitted.
    #[serde(default)]
    pub dialect: Option<Dialect>,

    /// Prefix prepended to every bookkeeping table name
    #[serde(default)]
    pub table_prefix: String,

    /// Schema (database) name used to scope MySQL introspection
    #[serde(default)]
    pub schema_name: Option<String>,

    /// Directory of migration files to use instead of the embedded catalog
    #[serde(default)]
    pub migrations_dir: Option<String>,
}

/// Database type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    /// SQLite (default)
    #[default]
    Sqlite,
    /// DuckDB
    DuckDb,
}

impl std::fmt::Display for DbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbType::Sqlite => write!(f, "sqlite"),
            DbType::DuckDb => write!(f, "duckdb"),
        }
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database type (sqlite or duckdb)
    #[serde(rename = "type", default)]
    pub db_type: DbType,

    /// Database path (file-based or :memory:)
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            db_type: DbType::default(),
            path: default_db_path(),
        }
    }
}

/// SQL dialect of the database holding the bookkeeping table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Plain `information_schema` without schema scoping
    Generic,
    /// MySQL-like: `information_schema` scoped by schema name, `RENAME TABLE`
    Mysql,
    /// Postgres-like: `information_schema` scoped by `current_schema()`
    Postgres,
    /// SQLite: `PRAGMA table_info`
    Sqlite,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Generic => write!(f, "generic"),
            Dialect::Mysql => write!(f, "mysql"),
            Dialect::Postgres => write!(f, "postgres"),
            Dialect::Sqlite => write!(f, "sqlite"),
        }
    }
}

const DEFAULT_DB_PATH: &str = ":memory:";

fn default_db_path() -> String {
    DEFAULT_DB_PATH.to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load(path: &Path) -> CoreResult<Self> {
        if !path.exists() {
            return Err(CoreError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| CoreError::IoWithPath {
            path: path.display().to_string(),
            source: e,
        })?;
        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory
    /// Looks for migfmt.yml or migfmt.yaml
    pub fn load_from_dir(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("migfmt.yml");
        let yaml_path = dir.join("migfmt.yaml");

        if yml_path.exists() {
            Self::load(&yml_path)
        } else if yaml_path.exists() {
            Self::load(&yaml_path)
        } else {
            Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            })
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> CoreResult<()> {
        validate_table_prefix(&self.table_prefix)?;

        if self.dialect() == Dialect::Mysql
            && self.schema_name.as_deref().map_or(true, str::is_empty)
        {
            return Err(CoreError::ConfigInvalid {
                message: "dialect 'mysql' requires 'schema_name'".to_string(),
            });
        }

        if self.database.path.is_empty() {
            return Err(CoreError::ConfigInvalid {
                message: "database.path cannot be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Effective dialect: the explicit setting, or the natural dialect of
    /// the configured database type.
    pub fn dialect(&self) -> Dialect {
        self.dialect.unwrap_or(match self.database.db_type {
            DbType::Sqlite => Dialect::Sqlite,
            DbType::DuckDb => Dialect::Generic,
        })
    }

    /// Resolve the table prefix with precedence: CLI flag > `MF_TABLE_PREFIX`
    /// env var > config file.
    pub fn resolve_table_prefix(&self, cli_prefix: Option<&str>) -> CoreResult<String> {
        let prefix = match cli_prefix {
            Some(p) => p.to_string(),
            None => std::env::var(TABLE_PREFIX_ENV).unwrap_or_else(|_| self.table_prefix.clone()),
        };
        validate_table_prefix(&prefix)?;
        Ok(prefix)
    }

    /// Table names derived from the resolved prefix.
    pub fn table_names(&self, cli_prefix: Option<&str>) -> CoreResult<TableNames> {
        Ok(TableNames::with_prefix(&self.resolve_table_prefix(cli_prefix)?))
    }

    /// Migrations directory resolved against `root`, if one is configured.
    pub fn migrations_dir_absolute(&self, root: &Path) -> Option<PathBuf> {
        self.migrations_dir.as_ref().map(|d| root.join(d))
    }

    /// Database path resolved against `root`; `:memory:` is returned as-is.
    pub fn database_path_absolute(&self, root: &Path) -> PathBuf {
        if self.database.path == DEFAULT_DB_PATH {
            PathBuf::from(DEFAULT_DB_PATH)
        } else {
            root.join(&self.database.path)
        }
    }
}

/// Table prefixes are spliced into DDL, so only identifier characters are allowed.
fn validate_table_prefix(prefix: &str) -> CoreResult<()> {
    if prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        Ok(())
    } else {
        Err(CoreError::ConfigInvalid {
            message: format!(
                "table_prefix '{prefix}' may only contain ASCII letters, digits, and '_'"
            ),
        })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
