//! Per-pair desirability of a task for a unit.
//!
//! Scores are costs: lower is better. A pair that cannot or should not be
//! assigned scores `UNREACHABLE_SCORE`. Lookups of entities that vanished
//! since the task was created are soft failures and also score
//! `UNREACHABLE_SCORE`, so one stale task never blocks a round.

use codebusters_core::constants::*;
use codebusters_core::entities::Unit;
use codebusters_core::enums::UnitState;
use codebusters_core::tasks::Task;
use codebusters_core::types::{bust_moves_from_distance, moves_from_distance, EntityId, Position};

use crate::context::RoundContext;

/// Score `task` for `unit` in the current round.
pub fn score(ctx: &RoundContext<'_>, unit: &Unit, task: &Task) -> f64 {
    let score = match *task {
        Task::Bust { ghost } => score_bust(ctx, unit, ghost),
        Task::Cover { carrier } => score_cover(ctx, unit, carrier),
        Task::Explore { target, weight } => Some(score_explore(ctx, unit, target, weight)),
        Task::Stun { enemy } => score_stun(ctx, unit, enemy),
        Task::ReturnToBase => Some(score_return(unit)),
        Task::SensorSweep => None,
    };
    score.unwrap_or(UNREACHABLE_SCORE)
}

/// Cheap ghosts close to the bust band first; urgency fades as points pile up.
fn score_bust(ctx: &RoundContext<'_>, unit: &Unit, ghost: EntityId) -> Option<f64> {
    let ghost = ctx.ghost(ghost)?;
    let moves = bust_moves_from_distance(unit.distance_to(&ghost.position));
    let stamina = ghost.stamina.min(BUST_STAMINA_CAP) as f64;
    let progress = ((ctx.snapshot.points as f64 + 0.1) / 4.0).ceil();
    Some(stamina / progress + moves as f64 * BUST_MOVE_WEIGHT)
}

fn score_cover(ctx: &RoundContext<'_>, unit: &Unit, carrier: EntityId) -> Option<f64> {
    if unit.is_carrying() {
        return None;
    }
    let carrier = ctx.unit(carrier)?;
    let moves_to_carrier = moves_from_distance(unit.distance_to(&carrier.position));
    let moves_to_base = moves_from_distance(carrier.distance_to(&ctx.params.own_base));
    Some(moves_to_carrier as f64 * COVER_MOVE_WEIGHT + moves_to_base as f64 * COVER_BASE_WEIGHT)
}

fn score_explore(ctx: &RoundContext<'_>, unit: &Unit, target: Position, weight: f64) -> f64 {
    let moves = moves_from_distance(unit.distance_to(&target));
    let ghosts_to_win = ctx.params.ghosts_to_win(ctx.snapshot.points);
    let damping = ((5.0 - ghosts_to_win) / 2.0).max(1.0);
    moves as f64 * weight / damping
}

/// Tiered stun heuristic. Tiers are checked in order and the first match wins.
fn score_stun(ctx: &RoundContext<'_>, unit: &Unit, enemy: EntityId) -> Option<f64> {
    let enemy = ctx.enemy(enemy)?;
    let round = ctx.round();
    let tracking = ctx.tracking;
    let enemy_timeout = tracking.enemy_stunned_timeout(enemy, round);

    if enemy_timeout > STUN_LONG_TIMEOUT {
        return None;
    }

    if tracking.can_stun_enemy_now(unit, enemy, round)
        && !matches!(enemy.state, UnitState::BustingGhost | UnitState::Stunned)
    {
        return Some(STUN_FREE_SCORE);
    }

    match enemy.state {
        UnitState::CarryingGhost => {
            let enemy_moves = ctx
                .params
                .moves_to_release_range(&enemy.position, &ctx.params.enemy_base);
            let unit_moves = ctx
                .params
                .moves_to_release_range(&unit.position, &ctx.params.enemy_base);
            let intercepts = tracking.stunned_timeout(unit, round) + 1 < enemy_moves
                && tracking.stun_cooldown(unit, round) + 1 < enemy_moves
                && unit_moves + 1 < enemy_moves
                && moves_from_distance(unit.distance_to(&enemy.position)) <= 2;
            intercepts.then_some(STUN_INTERCEPT_SCORE)
        }
        UnitState::Stunned => (enemy_timeout < STUN_LONG_TIMEOUT
            && tracking.can_stun_now(unit, round))
        .then_some(STUN_CHAIN_SCORE),
        UnitState::BustingGhost => {
            let ghost = ctx.ghost(enemy.busted_ghost()?)?;
            (ghost.stamina < STUN_DENY_STAMINA && tracking.can_stun_now(unit, round))
                .then_some(STUN_DENY_CAPTURE_SCORE)
        }
        UnitState::Normal => None,
    }
}

fn score_return(unit: &Unit) -> f64 {
    if unit.is_carrying() {
        RETURN_CARRYING_SCORE
    } else {
        RETURN_IDLE_SCORE
    }
}
