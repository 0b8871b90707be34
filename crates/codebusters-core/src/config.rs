//! Agent tuning parameters.
//!
//! Rules of the game are constants; everything here is a knob that changes
//! how the agent plays and may be overridden from a JSON file.

use serde::{Deserialize, Serialize};

use crate::constants::ROUND_COUNT;

/// Configuration for a new agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// RNG seed for exploration targets. Same seed = same game.
    pub seed: u64,
    /// Exploration weight for the last known spot of a ghost that left sight.
    pub out_of_scope_weight: f64,
    /// Exploration weight for a mirrored ghost position.
    pub projected_weight: f64,
    /// Exploration weight for random fallback targets.
    pub explore_weight: f64,
    /// Random explore tasks seeded into the pool at start.
    pub initial_explore_tasks: usize,
    /// Rounds to play before stopping.
    pub round_limit: u32,
    /// Treat ghosts carried by enemies as visible ghosts.
    pub track_carried_ghosts: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            out_of_scope_weight: 12.0,
            projected_weight: 18.0,
            explore_weight: 50.0,
            initial_explore_tasks: 50,
            round_limit: ROUND_COUNT,
            track_carried_ghosts: true,
        }
    }
}
