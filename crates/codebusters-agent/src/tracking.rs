//! Cross-round memory of things the current snapshot cannot tell.
//!
//! Mutated only by the diff system and by command side effects; lives for
//! the whole match and is never reset.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use codebusters_core::constants::{STUN_COOLDOWN, STUN_RANGE, STUN_TIMEOUT};
use codebusters_core::entities::{Ghost, Unit};
use codebusters_core::types::{EntityId, Position};

/// Hidden state reconstructed from the sequence of snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackingState {
    /// Every ghost id ever observed.
    pub ghosts_spotted: BTreeSet<EntityId>,
    /// Ghosts that left sight, with their last known state.
    pub ghosts_out_of_scope: BTreeMap<EntityId, Ghost>,
    /// Mirrored positions inferred from first sightings.
    pub ghosts_projected: Vec<Position>,
    /// Round in which each own unit last fired a stun.
    pub unit_stun_fired: BTreeMap<EntityId, u32>,
    /// Round in which each enemy was last seen firing a stun.
    pub enemy_stun_fired: BTreeMap<EntityId, u32>,
    /// Round in which each own unit was last stunned.
    pub unit_stunned_since: BTreeMap<EntityId, u32>,
    /// Round in which each enemy was last stunned by us.
    pub enemy_stunned_since: BTreeMap<EntityId, u32>,
    /// Ghosts taken from our carriers.
    pub lost_ghosts: u32,
    /// Own units that already used their sensor sweep.
    pub sensor_sweeps_used: BTreeSet<EntityId>,
}

/// Rounds left of an effect that started at `since` and lasts `duration`.
fn remaining(since: Option<&u32>, duration: u32, round: u32) -> u32 {
    since.map_or(0, |since| (since + duration).saturating_sub(round))
}

impl TrackingState {
    /// Rounds until our unit can stun again.
    pub fn stun_cooldown(&self, unit: &Unit, round: u32) -> u32 {
        remaining(self.unit_stun_fired.get(&unit.id), STUN_COOLDOWN, round)
    }

    /// Rounds until our unit recovers; 0 when not stunned.
    pub fn stunned_timeout(&self, unit: &Unit, round: u32) -> u32 {
        if !unit.is_stunned() {
            return 0;
        }
        remaining(self.unit_stunned_since.get(&unit.id), STUN_TIMEOUT, round)
    }

    /// Rounds until an enemy recovers; 0 when not stunned.
    pub fn enemy_stunned_timeout(&self, enemy: &Unit, round: u32) -> u32 {
        if !enemy.is_stunned() {
            return 0;
        }
        remaining(self.enemy_stunned_since.get(&enemy.id), STUN_TIMEOUT, round)
    }

    pub fn can_stun_now(&self, unit: &Unit, round: u32) -> bool {
        !unit.is_stunned() && self.stun_cooldown(unit, round) == 0
    }

    pub fn can_stun_enemy_now(&self, unit: &Unit, enemy: &Unit, round: u32) -> bool {
        self.can_stun_now(unit, round) && unit.distance_to(&enemy.position) <= STUN_RANGE
    }
}
