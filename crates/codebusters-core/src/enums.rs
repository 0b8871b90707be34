//! Enumeration types used throughout the agent.

use serde::{Deserialize, Serialize};

/// What a unit is doing this round, as reported by the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitState {
    #[default]
    Normal,
    /// Hauling a ghost; the payload is the ghost id.
    CarryingGhost,
    /// Unable to act until the stun wears off.
    Stunned,
    /// Draining a ghost's stamina; the payload is the ghost id.
    BustingGhost,
}

impl UnitState {
    /// Decode the protocol state code (0..=3).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Normal),
            1 => Some(Self::CarryingGhost),
            2 => Some(Self::Stunned),
            3 => Some(Self::BustingGhost),
            _ => None,
        }
    }
}

/// Task category, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskKind {
    Bust,
    Stun,
    Cover,
    Explore,
    ReturnToBase,
    SensorSweep,
}
