use thiserror::Error;

use crate::enums::TaskKind;
use crate::types::EntityId;

/// Invariant violations that abort a round.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgentError {
    #[error("unit #{unit} is missing from the previous snapshot")]
    UnknownUnit { unit: EntityId },

    #[error("unit #{unit} cannot execute {kind:?}: target #{target} is not visible")]
    MissingTarget {
        unit: EntityId,
        kind: TaskKind,
        target: EntityId,
    },

    #[error("unit #{unit} is not carrying a ghost")]
    NothingCarried { unit: EntityId },

    #[error("no opening table for {count} units")]
    UnsupportedUnitCount { count: usize },
}
