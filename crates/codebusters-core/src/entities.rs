//! Observed entities: units (own and enemy) and ghosts.
//!
//! Entities are plain data installed fresh every round. Game logic lives in
//! the agent crate, not here.

use serde::{Deserialize, Serialize};

use crate::enums::UnitState;
use crate::types::{EntityId, Position};

/// A unit with movement and action capability.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: EntityId,
    pub position: Position,
    pub state: UnitState,
    /// Meaning depends on `state`: the carried or busted ghost id, else unused.
    pub payload: i64,
}

impl Unit {
    pub fn new(id: EntityId, position: Position, state: UnitState, payload: i64) -> Self {
        Self {
            id,
            position,
            state,
            payload,
        }
    }

    /// Ghost id carried by this unit, if carrying.
    pub fn carried_ghost(&self) -> Option<EntityId> {
        match self.state {
            UnitState::CarryingGhost => EntityId::try_from(self.payload).ok(),
            _ => None,
        }
    }

    /// Ghost id this unit is busting, if busting.
    pub fn busted_ghost(&self) -> Option<EntityId> {
        match self.state {
            UnitState::BustingGhost => EntityId::try_from(self.payload).ok(),
            _ => None,
        }
    }

    pub fn is_carrying(&self) -> bool {
        self.state == UnitState::CarryingGhost
    }

    pub fn is_stunned(&self) -> bool {
        self.state == UnitState::Stunned
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        self.position.distance_to(other)
    }
}

/// A capturable ghost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ghost {
    pub id: EntityId,
    pub position: Position,
    /// Remaining toughness.
    pub stamina: u32,
    /// Number of units currently busting it.
    pub pressure: u32,
}

impl Ghost {
    pub fn new(id: EntityId, position: Position, stamina: u32, pressure: u32) -> Self {
        Self {
            id,
            position,
            stamina,
            pressure,
        }
    }
}
