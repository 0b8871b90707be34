//! Task execution: one command per unit, plus the bookkeeping commands imply.

use std::collections::BTreeMap;

use tracing::debug;

use codebusters_core::commands::{Action, Command};
use codebusters_core::constants::*;
use codebusters_core::entities::Unit;
use codebusters_core::enums::TaskKind;
use codebusters_core::error::AgentError;
use codebusters_core::state::{GameParams, Snapshot};
use codebusters_core::tasks::{Assignment, Task};
use codebusters_core::types::EntityId;

use crate::context::RoundContext;
use crate::handoff;
use crate::tracking::TrackingState;

/// Result of executing one task.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub command: Command,
    /// Assignment for another unit next round, e.g. catching a thrown ghost.
    pub follow_up: Option<Assignment>,
}

impl Outcome {
    fn command(unit: EntityId, action: Action) -> Self {
        Self {
            command: Command::new(unit, action),
            follow_up: None,
        }
    }
}

/// Turn `task` into this round's command for `unit`.
pub fn execute(ctx: &RoundContext<'_>, unit: &Unit, task: &Task) -> Result<Outcome, AgentError> {
    let params = ctx.params;
    let missing = |kind: TaskKind, target: EntityId| AgentError::MissingTarget {
        unit: unit.id,
        kind,
        target,
    };

    let action = match *task {
        Task::Bust { ghost } => {
            let ghost = ctx.ghost(ghost).ok_or(missing(TaskKind::Bust, ghost))?;
            let distance = unit.distance_to(&ghost.position);
            let band_edge = BUST_RANGE_MIN + RANGE_MARGIN;
            if distance < BUST_RANGE_MIN {
                // Re-enter the band on the home side of the ghost
                Action::Move {
                    target: params.position_in_range(params.own_base, ghost.position, band_edge),
                }
            } else if distance > BUST_RANGE_MAX {
                Action::Move {
                    target: params.position_in_range(unit.position, ghost.position, band_edge),
                }
            } else {
                Action::Bust { ghost: ghost.id }
            }
        }
        Task::Cover { carrier } => {
            let carrier = ctx.unit(carrier).ok_or(missing(TaskKind::Cover, carrier))?;
            Action::Move {
                target: params.position_in_range(
                    unit.position,
                    carrier.position,
                    BUST_RANGE_MIN - RANGE_MARGIN,
                ),
            }
        }
        Task::Explore { target, .. } => Action::Move { target },
        Task::Stun { enemy } => {
            let enemy = ctx.enemy(enemy).ok_or(missing(TaskKind::Stun, enemy))?;
            if unit.distance_to(&enemy.position) <= STUN_RANGE {
                Action::Stun { enemy: enemy.id }
            } else {
                Action::Move {
                    target: enemy.position,
                }
            }
        }
        Task::ReturnToBase => return return_to_base(ctx, unit),
        Task::SensorSweep => Action::Radar,
    };
    Ok(Outcome::command(unit.id, action))
}

/// Release at home, hand off to a teammate closer to home, or walk home.
fn return_to_base(ctx: &RoundContext<'_>, unit: &Unit) -> Result<Outcome, AgentError> {
    let params = ctx.params;
    if unit.is_carrying() {
        if params.is_in_base_range(&unit.position) {
            return Ok(Outcome::command(unit.id, Action::Release));
        }
        if handoff::can_eject_to_friend(ctx, unit) {
            if let Some(handoff) = handoff::best_handoff(ctx, unit) {
                let ghost = unit
                    .carried_ghost()
                    .ok_or(AgentError::NothingCarried { unit: unit.id })?;
                debug!(unit = unit.id, receiver = handoff.receiver, ghost, "handing off");
                return Ok(Outcome {
                    command: Command::new(unit.id, Action::Eject { target: handoff.target }),
                    follow_up: Some(Assignment::new(
                        Task::Bust { ghost },
                        handoff.receiver,
                        0.0,
                    )),
                });
            }
        }
    }

    Ok(Outcome::command(
        unit.id,
        Action::Move {
            target: params.position_in_range(
                unit.position,
                params.own_base,
                BASE_RELEASE_RANGE - RANGE_MARGIN,
            ),
        },
    ))
}

/// Execute every unit's assignment in id order and apply the side effects.
///
/// Stuns update cooldown and timeout tracking, releases score a point,
/// sensor sweeps are marked used, and follow-ups become pending for next
/// round without replacing an existing pending assignment.
pub fn run(
    params: &GameParams,
    snapshot: &mut Snapshot,
    tracking: &mut TrackingState,
    assignments: &BTreeMap<EntityId, Assignment>,
    pending: &mut BTreeMap<EntityId, Assignment>,
) -> Result<Vec<Command>, AgentError> {
    let outcomes = {
        let ctx = RoundContext::new(params, snapshot, tracking);
        snapshot
            .units
            .values()
            .map(|unit| {
                let assignment = assignments
                    .get(&unit.id)
                    .ok_or(AgentError::UnknownUnit { unit: unit.id })?;
                execute(&ctx, unit, &assignment.task)
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    let round = snapshot.round;
    let mut commands = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        let command = outcome.command;
        match command.action {
            Action::Stun { enemy } => {
                tracking.unit_stun_fired.insert(command.unit, round);
                tracking.enemy_stunned_since.insert(enemy, round);
            }
            Action::Release => snapshot.points += 1,
            Action::Radar => {
                tracking.sensor_sweeps_used.insert(command.unit);
            }
            Action::Move { .. } | Action::Bust { .. } | Action::Eject { .. } => {}
        }
        if let Some(follow_up) = outcome.follow_up {
            pending.entry(follow_up.unit).or_insert(follow_up);
        }
        commands.push(command);
    }
    Ok(commands)
}
