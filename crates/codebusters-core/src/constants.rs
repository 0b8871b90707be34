//! Game rules and tuning constants.

use crate::types::Position;

// --- Map ---

/// Largest valid x coordinate (the map is 16001 units wide).
pub const MAP_MAX_X: u32 = 16_000;

/// Largest valid y coordinate (the map is 9001 units tall).
pub const MAP_MAX_Y: u32 = 9_000;

/// Base corner owned by team 0 (and the enemy base of team 1).
pub const TEAM_ZERO_BASE: Position = Position { x: 0, y: 0 };

/// Base corner owned by team 1 (and the enemy base of team 0).
pub const TEAM_ONE_BASE: Position = Position { x: MAP_MAX_X, y: MAP_MAX_Y };

// --- Movement ---

/// Distance a unit covers in one round.
pub const MOVE_RANGE: f64 = 800.0;

// --- Ranges ---

/// Minimum distance at which a ghost can be busted.
pub const BUST_RANGE_MIN: f64 = 900.0;

/// Maximum distance at which a ghost can be busted.
pub const BUST_RANGE_MAX: f64 = 1760.0;

/// Maximum distance at which an enemy can be stunned.
pub const STUN_RANGE: f64 = 1760.0;

/// Distance from the base corner within which a ghost can be released.
pub const BASE_RELEASE_RANGE: f64 = 1600.0;

/// Offset used when stopping just inside or outside a range boundary.
pub const RANGE_MARGIN: f64 = 10.0;

// --- Stun ---

/// Rounds a stunned unit stays stunned.
pub const STUN_TIMEOUT: u32 = 11;

/// Rounds before a unit can stun again.
pub const STUN_COOLDOWN: u32 = 21;

// --- Match ---

/// Number of rounds in a match.
pub const ROUND_COUNT: u32 = 250;

// --- Exploration ---

/// Radius around a reappeared ghost in which stale exploration tasks are dropped.
pub const REAPPEAR_EXPLORE_CLEAR_RADIUS: f64 = 500.0;

/// Two explore assignments in one round must be at least this far apart.
pub const EXPLORE_DECLUTTER_RADIUS: f64 = MOVE_RANGE * 1.5;

// --- Hand-off ---

/// Farthest teammate a carried ghost may be handed to (two stun ranges + one move).
pub const HANDOFF_REACH: f64 = 4320.0;

/// Busted ghost stamina at or above which a busting teammate can take a hand-off.
pub const HANDOFF_MIN_BUSTING_STAMINA: u32 = 6;

/// Stun timeout tolerated when checking whether any hand-off is possible.
pub const HANDOFF_FEASIBLE_STUN_TIMEOUT: u32 = 2;

/// Stun timeout tolerated when picking the hand-off receiver.
pub const HANDOFF_SELECT_STUN_TIMEOUT: u32 = 1;

/// Receiver must be at least this many moves closer to base than the carrier.
pub const HANDOFF_MOVE_ADVANTAGE: u32 = 2;

// --- Scoring ---

/// Score for a pairing that should never be chosen.
pub const UNREACHABLE_SCORE: f64 = 999_999.0;

/// Score of the return task for a unit that carries nothing.
pub const RETURN_IDLE_SCORE: f64 = 99_999_999.0;

/// Score of the return task for a carrying unit.
pub const RETURN_CARRYING_SCORE: f64 = 0.0001;

/// Ghost stamina above this value no longer raises the bust score.
pub const BUST_STAMINA_CAP: u32 = 30;

/// Score per move needed to reach the bust band.
pub const BUST_MOVE_WEIGHT: f64 = 4.0;

/// Score per move for a coverer to reach the carrier.
pub const COVER_MOVE_WEIGHT: f64 = 15.0;

/// Score per move for the carrier to reach base.
pub const COVER_BASE_WEIGHT: f64 = 20.0;

/// Stun tier scores, in tier order.
pub const STUN_FREE_SCORE: f64 = 0.0;
pub const STUN_INTERCEPT_SCORE: f64 = 0.11;
pub const STUN_DENY_CAPTURE_SCORE: f64 = 0.12;
pub const STUN_CHAIN_SCORE: f64 = 0.13;

/// Enemy stunned for longer than this is not worth another stun.
pub const STUN_LONG_TIMEOUT: u32 = 3;

/// Busted ghost stamina below which stunning the buster denies the capture.
pub const STUN_DENY_STAMINA: u32 = 10;

// --- Opening ---

/// Fan-out spots for the opening move, indexed by unit count and unit order.
pub fn opening_positions(unit_count: usize) -> Option<&'static [Position]> {
    const TWO: [Position; 2] = [Position::new(4500, 5500), Position::new(8000, 3500)];
    const THREE: [Position; 3] = [
        Position::new(9000, 3200),
        Position::new(6000, 4500),
        Position::new(3000, 5800),
    ];
    const FOUR: [Position; 4] = [
        Position::new(2000, 7000),
        Position::new(4300, 5250),
        Position::new(6500, 3750),
        Position::new(9200, 2000),
    ];
    const FIVE: [Position; 5] = [
        Position::new(1800, 7000),
        Position::new(3500, 5750),
        Position::new(5200, 4500),
        Position::new(6900, 2250),
        Position::new(8000, 2000),
    ];

    match unit_count {
        2 => Some(&TWO),
        3 => Some(&THREE),
        4 => Some(&FOUR),
        5 => Some(&FIVE),
        _ => None,
    }
}
