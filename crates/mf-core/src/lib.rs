//! mf-core - Core library for migfmt
//!
//! This crate provides the configuration file format, SQL dialect tags,
//! bookkeeping table names, and migration descriptors shared by every
//! migfmt component.

pub mod config;
pub mod error;
pub mod migration;
pub mod table_name;

pub use config::{Config, DatabaseConfig, DbType, Dialect};
pub use error::{CoreError, CoreResult};
pub use migration::{Direction, MigrationDescriptor};
pub use table_name::{TableName, TableNames};
