//! Error types for the format upgrader.

use mf_catalog::CatalogError;
use mf_db::DbError;
use std::fmt;
use thiserror::Error;

/// A single DDL/DML transition of the upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeStep {
    CreateTempTable,
    PopulateTempTable,
    RenameLegacyTable,
    PromoteTempTable,
    DropOldTable,
}

impl UpgradeStep {
    /// State the database is left in when this step fails.
    pub fn state_on_failure(self) -> UpgradeState {
        match self {
            UpgradeStep::CreateTempTable => UpgradeState::NoTempTable,
            UpgradeStep::PopulateTempTable => UpgradeState::TempTableCreated,
            UpgradeStep::RenameLegacyTable => UpgradeState::TempTablePopulated,
            UpgradeStep::PromoteTempTable => UpgradeState::LegacyTableDemoted,
            UpgradeStep::DropOldTable => UpgradeState::Swapped,
        }
    }
}

impl fmt::Display for UpgradeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpgradeStep::CreateTempTable => write!(f, "create temporary schema table"),
            UpgradeStep::PopulateTempTable => write!(f, "populate temporary schema table"),
            UpgradeStep::RenameLegacyTable => write!(f, "rename legacy schema table"),
            UpgradeStep::PromoteTempTable => write!(f, "promote temporary schema table"),
            UpgradeStep::DropOldTable => write!(f, "drop old schema table"),
        }
    }
}

/// Where the bookkeeping tables stand between transitions.
///
/// There is no rollback: a failed step leaves the database in the state
/// reached before it, for an operator to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeState {
    NoTempTable,
    TempTableCreated,
    TempTablePopulated,
    /// Legacy table renamed to the backup name, canonical name vacant.
    LegacyTableDemoted,
    Swapped,
    OldTableDropped,
}

impl fmt::Display for UpgradeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UpgradeState::NoTempTable => "no temporary table",
            UpgradeState::TempTableCreated => "temporary table created",
            UpgradeState::TempTablePopulated => "temporary table populated",
            UpgradeState::LegacyTableDemoted => "legacy table demoted, canonical name vacant",
            UpgradeState::Swapped => "tables swapped",
            UpgradeState::OldTableDropped => "old table dropped",
        };
        f.write_str(s)
    }
}

/// Format upgrade errors.
#[derive(Error, Debug)]
pub enum UpgradeError {
    /// Column introspection failed (U001)
    #[error("[U001] Failed to check the format of '{table}'")]
    Detect {
        table: String,
        #[source]
        source: DbError,
    },

    /// The legacy version could not be read (U002)
    #[error("[U002] Failed to read the legacy schema version from '{table}'")]
    ReadLegacyVersion {
        table: String,
        #[source]
        source: DbError,
    },

    /// The migration catalog could not be listed (U003)
    #[error("[U003] Failed to list migrations")]
    Catalog(#[from] CatalogError),

    /// A DDL/DML transition failed (U004)
    #[error("[U004] Failed to {step} '{table}' (left in state: {})", .step.state_on_failure())]
    Step {
        step: UpgradeStep,
        table: String,
        #[source]
        source: DbError,
    },

    /// The catalog has nothing at or below a non-zero legacy version (U005)
    #[error(
        "[U005] No migrations at or below legacy version {legacy_version} for '{table}' in {location}; refusing to replace the table"
    )]
    EmptyHistory {
        table: String,
        legacy_version: u32,
        location: String,
    },
}

impl UpgradeError {
    /// Underlying database error, if any.
    pub fn db_error(&self) -> Option<&DbError> {
        match self {
            UpgradeError::Detect { source, .. }
            | UpgradeError::ReadLegacyVersion { source, .. }
            | UpgradeError::Step { source, .. } => Some(source),
            UpgradeError::Catalog(_) | UpgradeError::EmptyHistory { .. } => None,
        }
    }

    /// True when a duplicate version was rejected by the primary key.
    pub fn is_constraint_violation(&self) -> bool {
        self.db_error()
            .is_some_and(DbError::is_constraint_violation)
    }

    /// State the tables were left in, for failures during the rebuild.
    pub fn state(&self) -> Option<UpgradeState> {
        match self {
            UpgradeError::Step { step, .. } => Some(step.state_on_failure()),
            _ => None,
        }
    }
}

/// Result type alias for [`UpgradeError`].
pub type UpgradeResult<T> = Result<T, UpgradeError>;
