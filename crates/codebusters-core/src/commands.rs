//! Commands emitted for our units, one per unit per round.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{EntityId, Position};

/// What a unit does this round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    Move { target: Position },
    Bust { ghost: EntityId },
    Stun { enemy: EntityId },
    Release,
    Radar,
    Eject { target: Position },
}

/// An action bound to the unit performing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    pub unit: EntityId,
    pub action: Action,
}

impl Command {
    pub fn new(unit: EntityId, action: Action) -> Self {
        Self { unit, action }
    }
}

/// Renders the protocol line, with the unit id as trailing comment.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            Action::Move { target } => write!(f, "MOVE {target}")?,
            Action::Bust { ghost } => write!(f, "BUST {ghost}")?,
            Action::Stun { enemy } => write!(f, "STUN {enemy}")?,
            Action::Release => write!(f, "RELEASE")?,
            Action::Radar => write!(f, "RADAR")?,
            Action::Eject { target } => write!(f, "EJECT {target}")?,
        }
        write!(f, " Unit #{}", self.unit)
    }
}
