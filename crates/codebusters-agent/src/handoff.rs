//! Passing a carried ghost to a teammate closer to home.

use codebusters_core::constants::*;
use codebusters_core::entities::Unit;
use codebusters_core::enums::UnitState;
use codebusters_core::types::{EntityId, Position};

use crate::context::RoundContext;

/// Who catches the ghost and where it is thrown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Handoff {
    pub receiver: EntityId,
    pub target: Position,
}

/// Whether `carrier` has at least one teammate it could throw its ghost to.
pub fn can_eject_to_friend(ctx: &RoundContext<'_>, carrier: &Unit) -> bool {
    ctx.snapshot
        .units
        .values()
        .any(|other| is_eligible(ctx, carrier, other, HANDOFF_FEASIBLE_STUN_TIMEOUT))
}

/// The eligible teammate with the fewest moves home, and the throw target.
///
/// Selection is stricter than [`can_eject_to_friend`] on stunned teammates,
/// so this may return `None` even when a hand-off looked feasible. Ties go
/// to the lowest id.
pub fn best_handoff(ctx: &RoundContext<'_>, carrier: &Unit) -> Option<Handoff> {
    let own_base = ctx.params.own_base;
    ctx.snapshot
        .units
        .values()
        .filter(|other| is_eligible(ctx, carrier, other, HANDOFF_SELECT_STUN_TIMEOUT))
        .min_by_key(|other| ctx.params.moves_to_release_range(&other.position, &own_base))
        .map(|receiver| Handoff {
            receiver: receiver.id,
            target: ctx.params.position_in_range(
                receiver.position,
                carrier.position,
                MOVE_RANGE + RANGE_MARGIN,
            ),
        })
}

fn is_eligible(ctx: &RoundContext<'_>, carrier: &Unit, other: &Unit, max_stun_timeout: u32) -> bool {
    if other.id == carrier.id || carrier.distance_to(&other.position) > HANDOFF_REACH {
        return false;
    }

    let own_base = ctx.params.own_base;
    let carrier_moves = ctx.params.moves_to_release_range(&carrier.position, &own_base);
    let other_moves = ctx.params.moves_to_release_range(&other.position, &own_base);
    if other_moves + HANDOFF_MOVE_ADVANTAGE > carrier_moves {
        return false;
    }

    match other.state {
        UnitState::Normal => true,
        UnitState::BustingGhost => other
            .busted_ghost()
            .and_then(|ghost| ctx.ghost(ghost))
            .is_some_and(|ghost| ghost.stamina >= HANDOFF_MIN_BUSTING_STAMINA),
        UnitState::Stunned => ctx.tracking.stunned_timeout(other, ctx.round()) <= max_stun_timeout,
        UnitState::CarryingGhost => false,
    }
}
