//! Per-round world snapshot and static game parameters.

use std::collections::BTreeMap;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::entities::{Ghost, Unit};
use crate::enums::UnitState;
use crate::types::{moves_from_distance, EntityId, Position};

/// Parameters fixed for the whole match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameParams {
    /// Our team id (0 or 1).
    pub team_id: u8,
    /// Units per side.
    pub unit_count: usize,
    /// Ghosts in the whole match.
    pub ghost_count: usize,
    pub own_base: Position,
    pub enemy_base: Position,
}

impl GameParams {
    /// Team 0 owns the top-left corner, team 1 the bottom-right one.
    pub fn new(team_id: u8, unit_count: usize, ghost_count: usize) -> Self {
        let (own_base, enemy_base) = if team_id == 1 {
            (TEAM_ONE_BASE, TEAM_ZERO_BASE)
        } else {
            (TEAM_ZERO_BASE, TEAM_ONE_BASE)
        };
        Self {
            team_id,
            unit_count,
            ghost_count,
            own_base,
            enemy_base,
        }
    }

    /// Whether a ghost can be released from `position`.
    pub fn is_in_base_range(&self, position: &Position) -> bool {
        position.distance_to(&self.own_base) <= BASE_RELEASE_RANGE
    }

    /// Rounds needed to bring `position` within release range of `base`.
    pub fn moves_to_release_range(&self, position: &Position, base: &Position) -> u32 {
        moves_from_distance((position.distance_to(base) - BASE_RELEASE_RANGE).max(0.0))
    }

    /// Whether `position` lies in the top-left half of the map.
    pub fn is_in_own_half(&self, position: &Position) -> bool {
        position.x + position.y <= (MAP_MAX_X + MAP_MAX_Y) / 2
    }

    /// Point reflection of `position` through the map centre.
    pub fn mirrored(&self, position: &Position) -> Position {
        Position::new(
            MAP_MAX_X.saturating_sub(position.x + 1),
            MAP_MAX_Y.saturating_sub(position.y + 1),
        )
    }

    /// Clamp an arbitrary point onto the map grid.
    pub fn clamp(&self, point: DVec2) -> Position {
        let clamped = point
            .round()
            .clamp(DVec2::ZERO, DVec2::new(MAP_MAX_X as f64, MAP_MAX_Y as f64));
        Position::new(clamped.x as u32, clamped.y as u32)
    }

    /// Point on the line from `from` toward `to` that is `range` away from `to`.
    ///
    /// When `from` is already closer than `range` the point lies behind it,
    /// so the same call both approaches and backs off. A degenerate line
    /// (`from == to`) is measured from the enemy base instead.
    pub fn position_in_range(&self, from: Position, to: Position, range: f64) -> Position {
        let from = if from == to { self.enemy_base } else { from };
        let distance = from.distance_to(&to);
        if distance == 0.0 {
            return to;
        }

        let factor = (distance - range) / distance;
        let origin = from.as_vec();
        self.clamp(origin + (to.as_vec() - origin) * factor)
    }

    /// Ghosts still needed to win, measured against `points`.
    pub fn ghosts_to_win(&self, points: u32) -> f64 {
        (self.ghost_count / 2) as f64 - points as f64
    }
}

/// Type-dependent fields of one observed entity line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RecordKind {
    Ghost { stamina: u32, pressure: u32 },
    Unit { team_id: u8, state: UnitState, payload: i64 },
}

/// One entity as read from the round input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: EntityId,
    pub position: Position,
    pub kind: RecordKind,
}

impl EntityRecord {
    pub fn ghost(id: EntityId, x: u32, y: u32, stamina: u32, pressure: u32) -> Self {
        Self {
            id,
            position: Position::new(x, y),
            kind: RecordKind::Ghost { stamina, pressure },
        }
    }

    pub fn unit(id: EntityId, x: u32, y: u32, team_id: u8, state: UnitState, payload: i64) -> Self {
        Self {
            id,
            position: Position::new(x, y),
            kind: RecordKind::Unit {
                team_id,
                state,
                payload,
            },
        }
    }
}

/// Everything visible in the current round, plus the running score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    /// Round index, starting at 0.
    pub round: u32,
    /// Ghosts delivered to our base so far.
    pub points: u32,
    pub units: BTreeMap<EntityId, Unit>,
    pub enemies: BTreeMap<EntityId, Unit>,
    pub ghosts: BTreeMap<EntityId, Ghost>,
}

impl Snapshot {
    /// Drop last round's entities, keeping round and score.
    pub fn clear_entities(&mut self) {
        self.units.clear();
        self.enemies.clear();
        self.ghosts.clear();
    }

    /// Install one observed entity.
    ///
    /// An enemy carrying a ghost also installs that ghost at the enemy's
    /// position when `track_carried_ghosts` is set, so it can be chased.
    pub fn insert(&mut self, record: EntityRecord, own_team: u8, track_carried_ghosts: bool) {
        match record.kind {
            RecordKind::Ghost { stamina, pressure } => {
                self.ghosts.insert(
                    record.id,
                    Ghost::new(record.id, record.position, stamina, pressure),
                );
            }
            RecordKind::Unit {
                team_id,
                state,
                payload,
            } => {
                let unit = Unit::new(record.id, record.position, state, payload);
                if team_id == own_team {
                    self.units.insert(record.id, unit);
                } else {
                    if track_carried_ghosts {
                        if let Some(ghost_id) = unit.carried_ghost() {
                            self.ghosts
                                .insert(ghost_id, Ghost::new(ghost_id, unit.position, 0, 1));
                        }
                    }
                    self.enemies.insert(record.id, unit);
                }
            }
        }
    }

    /// Enemy ids within `range` of `position`.
    pub fn enemies_within(&self, position: &Position, range: f64) -> Vec<EntityId> {
        self.enemies
            .values()
            .filter(|enemy| enemy.distance_to(position) <= range)
            .map(|enemy| enemy.id)
            .collect()
    }
}
