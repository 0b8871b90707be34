//! Task assignment: scripted openings, pending follow-ups, greedy matching.
//!
//! The greedy pass sorts every (task, unit) pair by score and walks the list
//! once. It is a heuristic and is not meant to find the optimal matching;
//! ties keep pool order because the sort is stable.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, trace, warn};

use codebusters_core::constants::*;
use codebusters_core::entities::Unit;
use codebusters_core::error::AgentError;
use codebusters_core::state::{GameParams, Snapshot};
use codebusters_core::tasks::{Assignment, Task};
use codebusters_core::types::{EntityId, Position};

use crate::context::RoundContext;
use crate::scoring;
use crate::task_pool::TaskPool;

/// Assignments keyed by unit id.
pub type Assignments = BTreeMap<EntityId, Assignment>;

/// Pin units still in their opening to a scripted fan-out spot.
///
/// A unit far from its spot explores toward it; a unit that arrived gets a
/// sensor sweep and leaves the opening. Existing pending assignments are
/// never overwritten.
pub fn plan_openings(
    params: &GameParams,
    snapshot: &Snapshot,
    openings_done: &mut BTreeSet<EntityId>,
    pending: &mut Assignments,
) -> Result<(), AgentError> {
    let unsupported = AgentError::UnsupportedUnitCount {
        count: params.unit_count,
    };
    let spots = opening_positions(params.unit_count).ok_or(unsupported.clone())?;

    for (index, unit) in snapshot.units.values().enumerate() {
        if openings_done.contains(&unit.id) {
            continue;
        }
        let spot = *spots.get(index).ok_or(unsupported.clone())?;
        let task = if unit.distance_to(&spot) < MOVE_RANGE / 2.0 {
            debug!(unit = unit.id, "opening done");
            openings_done.insert(unit.id);
            Task::SensorSweep
        } else {
            Task::Explore {
                target: spot,
                weight: 0.0,
            }
        };
        pending
            .entry(unit.id)
            .or_insert(Assignment::new(task, unit.id, 0.0));
    }
    Ok(())
}

/// Give every own unit exactly one assignment for this round.
///
/// Valid pending assignments are taken as-is; the remaining units are
/// matched greedily and anyone still left over heads home.
pub fn run(ctx: &RoundContext<'_>, pool: &TaskPool, pending: Assignments) -> Assignments {
    let mut assignments: Assignments = pending
        .into_iter()
        .filter(|(unit, assignment)| {
            let valid = ctx.unit(*unit).is_some() && target_visible(ctx, &assignment.task);
            if !valid {
                warn!(unit, task = ?assignment.task, "stale pending assignment dropped");
            }
            valid
        })
        .collect();

    let free: Vec<&Unit> = ctx
        .snapshot
        .units
        .values()
        .filter(|unit| !assignments.contains_key(&unit.id))
        .collect();

    for (unit, assignment) in greedy(ctx, pool, &free) {
        assignments.entry(unit).or_insert(assignment);
    }

    for unit in free {
        assignments.entry(unit.id).or_insert_with(|| {
            debug!(unit = unit.id, "no task left, returning to base");
            fallback(ctx, unit)
        });
    }

    for assignment in assignments.values() {
        trace!(unit = assignment.unit, task = ?assignment.task, score = assignment.score, "assigned");
    }
    assignments
}

/// Sorted claim pass over the cross product of pool tasks and `units`.
///
/// A unit takes its first allowed pair. An explore target is refused when
/// another claimed explore target lies closer than the declutter radius, and
/// each enemy can be claimed for stunning once.
pub fn greedy(ctx: &RoundContext<'_>, pool: &TaskPool, units: &[&Unit]) -> Assignments {
    let mut pairs: Vec<Assignment> = Vec::with_capacity(pool.len() * units.len());
    for task in pool.iter() {
        for unit in units {
            let score = scoring::score(ctx, unit, task);
            trace!(unit = unit.id, ?task, score, "scored");
            pairs.push(Assignment::new(*task, unit.id, score));
        }
    }
    pairs.sort_by(|a, b| a.score.total_cmp(&b.score));

    let mut claimed = Assignments::new();
    let mut explore_targets: Vec<Position> = Vec::new();
    let mut stun_targets: BTreeSet<EntityId> = BTreeSet::new();

    for pair in pairs {
        if claimed.len() == units.len() {
            break;
        }
        if claimed.contains_key(&pair.unit) {
            continue;
        }
        let allowed = match pair.task {
            Task::Explore { target, .. } => {
                let clear = explore_targets
                    .iter()
                    .all(|other| target.distance_to(other) >= EXPLORE_DECLUTTER_RADIUS);
                if clear {
                    explore_targets.push(target);
                }
                clear
            }
            Task::Stun { enemy } => stun_targets.insert(enemy),
            _ => true,
        };
        // Unreachable pairs stay claimable: the diff passes drop every task
        // whose target left the snapshot before this runs.
        if allowed {
            claimed.insert(pair.unit, pair);
        }
    }
    claimed
}

/// Return to base; used when nothing else could be claimed. Not an explore,
/// so any number of units may fall back without crowding one target.
pub fn fallback(ctx: &RoundContext<'_>, unit: &Unit) -> Assignment {
    let task = Task::ReturnToBase;
    Assignment::new(task, unit.id, scoring::score(ctx, unit, &task))
}

fn target_visible(ctx: &RoundContext<'_>, task: &Task) -> bool {
    match *task {
        Task::Bust { ghost } => ctx.ghost(ghost).is_some(),
        Task::Stun { enemy } => ctx.enemy(enemy).is_some(),
        Task::Cover { carrier } => ctx.unit(carrier).is_some(),
        Task::Explore { .. } | Task::ReturnToBase | Task::SensorSweep => true,
    }
}
