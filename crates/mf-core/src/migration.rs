//! Migration descriptors parsed from migration file names.
//!
//! Only the metadata encoded in a file name is needed for bookkeeping; the
//! SQL body of a migration is never read here.

use crate::error::{CoreError, CoreResult};
use std::fmt;

/// Direction of a migration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Applies the change
    Up,
    /// Reverts the change
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// Metadata of a single migration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationDescriptor {
    /// Version number; orders the migration sequence
    pub version: u64,
    /// Human-readable name taken from the file name
    pub name: String,
    /// Whether this file applies or reverts the migration
    pub direction: Direction,
}

impl MigrationDescriptor {
    /// Build an `Up` descriptor.
    pub fn up(version: u64, name: impl Into<String>) -> Self {
        Self {
            version,
            name: name.into(),
            direction: Direction::Up,
        }
    }

    /// Build a `Down` descriptor.
    pub fn down(version: u64, name: impl Into<String>) -> Self {
        Self {
            version,
            name: name.into(),
            direction: Direction::Down,
        }
    }

    /// Parse a file name of the form `<digits>_<name>.<up|down>.sql`.
    ///
    /// `000003_add_index.up.sql` parses to version 3, name `add_index`,
    /// direction `Up`.
    pub fn parse_file_name(file_name: &str) -> CoreResult<Self> {
        let invalid = |reason: &str| CoreError::InvalidMigrationName {
            file_name: file_name.to_string(),
            reason: reason.to_string(),
        };

        let stem = file_name
            .strip_suffix(".sql")
            .ok_or_else(|| invalid("missing .sql extension"))?;

        let (stem, direction) = if let Some(s) = stem.strip_suffix(".up") {
            (s, Direction::Up)
        } else if let Some(s) = stem.strip_suffix(".down") {
            (s, Direction::Down)
        } else {
            return Err(invalid("expected .up.sql or .down.sql"));
        };

        let (version, name) = stem
            .split_once('_')
            .ok_or_else(|| invalid("expected <version>_<name>"))?;

        if version.is_empty() || !version.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("version must be a non-empty run of digits"));
        }
        if name.is_empty() {
            return Err(invalid("name must not be empty"));
        }

        let version = version
            .parse::<u64>()
            .map_err(|e| invalid(&format!("version out of range: {e}")))?;

        Ok(Self {
            version,
            name: name.to_string(),
            direction,
        })
    }

    /// True for descriptors that apply a change.
    pub fn is_up(&self) -> bool {
        self.direction == Direction::Up
    }
}

impl fmt::Display for MigrationDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}_{} ({})", self.version, self.name, self.direction)
    }
}

#[cfg(test)]
#[path = "migration_test.rs"]
mod tests;
