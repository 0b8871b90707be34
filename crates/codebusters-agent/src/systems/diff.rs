//! Tracking recompute: compares the previous snapshot with the current one.
//!
//! Runs as a sequence of passes, each reacting to one kind of change by
//! updating tracking state and creating or deleting tasks. Later passes may
//! rely on pool changes made by earlier ones, so the order is fixed.

use tracing::{debug, warn};

use codebusters_core::config::AgentConfig;
use codebusters_core::constants::*;
use codebusters_core::entities::{Ghost, Unit};
use codebusters_core::enums::{TaskKind, UnitState};
use codebusters_core::error::AgentError;
use codebusters_core::state::{GameParams, Snapshot};
use codebusters_core::tasks::Task;

use crate::task_pool::TaskPool;
use crate::tracking::TrackingState;

/// Run every diff pass for the current round.
pub fn run(
    params: &GameParams,
    config: &AgentConfig,
    previous: &Snapshot,
    current: &mut Snapshot,
    tracking: &mut TrackingState,
    pool: &mut TaskPool,
) -> Result<(), AgentError> {
    // 1. Ghosts that came into sight
    appeared_ghosts(params, config, previous, current, tracking, pool);
    // 2. Ghosts that left sight
    disappeared_ghosts(config, previous, current, tracking, pool);
    // 3. Own units that just got stunned
    stunned_units(previous, current, tracking)?;
    // 4. Enemies entering and leaving sight
    enemy_visibility(previous, current, pool);
    // 5. Carriers starting and stopping
    carrier_changes(previous, current, pool)?;
    // 6. Carriers that got stunned lost their ghost
    lost_ghosts(params, previous, current, tracking)?;
    Ok(())
}

fn appeared_ghosts(
    params: &GameParams,
    config: &AgentConfig,
    previous: &Snapshot,
    current: &Snapshot,
    tracking: &mut TrackingState,
    pool: &mut TaskPool,
) {
    for ghost in current.ghosts.values() {
        let first_sighting = !tracking.ghosts_spotted.contains(&ghost.id);
        if first_sighting || !previous.ghosts.contains_key(&ghost.id) {
            tracking.ghosts_out_of_scope.remove(&ghost.id);
            pool.push(Task::Bust { ghost: ghost.id });
            pool.remove_explore_near(&ghost.position, REAPPEAR_EXPLORE_CLEAR_RADIUS);
        }
        if first_sighting {
            tracking.ghosts_spotted.insert(ghost.id);
            project_ghost(params, config, ghost, tracking, pool);
        }
    }
}

/// Ghosts start in mirrored pairs, so a first sighting on our side hints at
/// a twin on the other.
fn project_ghost(
    params: &GameParams,
    config: &AgentConfig,
    ghost: &Ghost,
    tracking: &mut TrackingState,
    pool: &mut TaskPool,
) {
    if !params.is_in_own_half(&ghost.position) {
        return;
    }
    let target = params.mirrored(&ghost.position);
    debug!(ghost = ghost.id, %target, "ghost projected");
    tracking.ghosts_projected.push(target);
    pool.push(Task::Explore {
        target,
        weight: config.projected_weight,
    });
}

fn disappeared_ghosts(
    config: &AgentConfig,
    previous: &Snapshot,
    current: &Snapshot,
    tracking: &mut TrackingState,
    pool: &mut TaskPool,
) {
    for ghost in previous.ghosts.values() {
        if current.ghosts.contains_key(&ghost.id) {
            continue;
        }
        tracking.ghosts_out_of_scope.insert(ghost.id, *ghost);
        pool.push(Task::Explore {
            target: ghost.position,
            weight: config.out_of_scope_weight * stamina_factor(ghost.stamina),
        });
        pool.remove_targeting(TaskKind::Bust, ghost.id);
    }
}

/// Multiplier on the out-of-scope weight by remaining stamina.
fn stamina_factor(stamina: u32) -> f64 {
    if stamina < 5 {
        0.7
    } else if stamina < 16 {
        0.9
    } else {
        1.0
    }
}

fn previous_unit<'a>(previous: &'a Snapshot, unit: &Unit) -> Result<&'a Unit, AgentError> {
    previous
        .units
        .get(&unit.id)
        .ok_or(AgentError::UnknownUnit { unit: unit.id })
}

fn stunned_units(
    previous: &Snapshot,
    current: &Snapshot,
    tracking: &mut TrackingState,
) -> Result<(), AgentError> {
    for unit in current.units.values() {
        if !unit.is_stunned() || previous_unit(previous, unit)?.is_stunned() {
            continue;
        }
        tracking.unit_stunned_since.insert(unit.id, current.round);

        // Only an unambiguous culprit is recorded
        let suspects = current.enemies_within(&unit.position, STUN_RANGE);
        if let [enemy] = suspects.as_slice() {
            debug!(unit = unit.id, enemy, "stun attributed");
            tracking.enemy_stun_fired.insert(*enemy, current.round);
        } else {
            debug!(unit = unit.id, suspects = suspects.len(), "stun not attributed");
        }
    }
    Ok(())
}

fn enemy_visibility(previous: &Snapshot, current: &Snapshot, pool: &mut TaskPool) {
    for enemy in current.enemies.values() {
        if !previous.enemies.contains_key(&enemy.id) {
            pool.push(Task::Stun { enemy: enemy.id });
        }
    }
    for enemy in previous.enemies.values() {
        if !current.enemies.contains_key(&enemy.id) {
            pool.remove_targeting(TaskKind::Stun, enemy.id);
        }
    }
}

fn carrier_changes(
    previous: &Snapshot,
    current: &Snapshot,
    pool: &mut TaskPool,
) -> Result<(), AgentError> {
    for unit in current.units.values() {
        let was_carrying = previous_unit(previous, unit)?.is_carrying();
        match (was_carrying, unit.is_carrying()) {
            (false, true) => pool.push(Task::Cover { carrier: unit.id }),
            (true, false) => {
                pool.remove_targeting(TaskKind::Cover, unit.id);
            }
            _ => {}
        }
    }
    Ok(())
}

/// The stun cause is not checked: any stun while carrying counts as a loss.
fn lost_ghosts(
    params: &GameParams,
    previous: &Snapshot,
    current: &mut Snapshot,
    tracking: &mut TrackingState,
) -> Result<(), AgentError> {
    let mut credited = 0;
    for unit in current.units.values() {
        let before = previous_unit(previous, unit)?;
        if before.state != UnitState::CarryingGhost || unit.state != UnitState::Stunned {
            continue;
        }
        tracking.lost_ghosts += 1;
        let at_door = params.is_in_base_range(&unit.position);
        warn!(unit = unit.id, ghost = before.payload, at_door, "ghost lost");
        if at_door {
            credited += 1;
        }
    }
    current.points += credited;
    Ok(())
}
