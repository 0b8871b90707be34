//! Task pool upkeep before scoring.

use rand_chacha::ChaCha8Rng;
use tracing::debug;

use codebusters_core::config::AgentConfig;
use codebusters_core::constants::MOVE_RANGE;
use codebusters_core::enums::TaskKind;
use codebusters_core::state::{GameParams, Snapshot};

use crate::task_pool::TaskPool;

/// Drop explore targets our units are standing on and refill when running low.
pub fn run(
    params: &GameParams,
    config: &AgentConfig,
    snapshot: &Snapshot,
    pool: &mut TaskPool,
    rng: &mut ChaCha8Rng,
) {
    for unit in snapshot.units.values() {
        pool.remove_explore_near(&unit.position, MOVE_RANGE / 2.0);
    }

    let explore_count = pool.count(TaskKind::Explore);
    if explore_count < params.unit_count {
        debug!(explore_count, "refilling explore tasks");
        pool.insert_random_explore(rng, params.unit_count * 3, config.explore_weight);
    }
}
