//! The agent: owns all cross-round state and plays one round at a time.
//!
//! `Agent` is I/O free. Feed it the entity records of a round and it returns
//! one command per own unit, so whole matches can be replayed in tests.

use std::collections::BTreeSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use codebusters_core::commands::Command;
use codebusters_core::config::AgentConfig;
use codebusters_core::error::AgentError;
use codebusters_core::state::{EntityRecord, GameParams, Snapshot};
use codebusters_core::tasks::Task;
use codebusters_core::types::EntityId;

use crate::context::RoundContext;
use crate::systems;
use crate::systems::assignment::Assignments;
use crate::task_pool::TaskPool;
use crate::tracking::TrackingState;

/// The decision-making agent for one match.
pub struct Agent {
    params: GameParams,
    config: AgentConfig,
    rng: ChaCha8Rng,
    snapshot: Snapshot,
    tracking: TrackingState,
    pool: TaskPool,
    assignments: Assignments,
    pending: Assignments,
    openings_done: BTreeSet<EntityId>,
}

impl Agent {
    /// Create an agent with the initial random explore tasks and the
    /// permanent return-to-base task.
    pub fn new(params: GameParams, config: AgentConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut pool = TaskPool::new();
        pool.insert_random_explore(&mut rng, config.initial_explore_tasks, config.explore_weight);
        pool.push(Task::ReturnToBase);

        Self {
            params,
            config,
            rng,
            snapshot: Snapshot::default(),
            tracking: TrackingState::default(),
            pool,
            assignments: Assignments::new(),
            pending: Assignments::new(),
            openings_done: BTreeSet::new(),
        }
    }

    /// Play one round from its observed entities. Returns commands in unit id order.
    pub fn play_round(&mut self, records: &[EntityRecord]) -> Result<Vec<Command>, AgentError> {
        let previous = self.observe(records);
        self.run_systems(&previous)?;

        let commands = systems::execution::run(
            &self.params,
            &mut self.snapshot,
            &mut self.tracking,
            &self.assignments,
            &mut self.pending,
        )?;

        info!(
            round = self.snapshot.round,
            points = self.snapshot.points,
            tasks = self.pool.len(),
            lost = self.tracking.lost_ghosts,
            "round played"
        );
        self.snapshot.round += 1;
        Ok(commands)
    }

    /// Whether the round limit has been reached.
    pub fn is_finished(&self) -> bool {
        self.snapshot.round >= self.config.round_limit
    }

    pub fn params(&self) -> &GameParams {
        &self.params
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// The snapshot of the last played round. Its round counter already
    /// points at the next round.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn tracking(&self) -> &TrackingState {
        &self.tracking
    }

    pub fn pool(&self) -> &TaskPool {
        &self.pool
    }

    /// Assignments executed in the last played round.
    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    /// Follow-ups queued for the next round.
    pub fn pending(&self) -> &Assignments {
        &self.pending
    }

    /// Install this round's records and return last round's snapshot.
    ///
    /// On the first round there is no history, so the current snapshot
    /// doubles as the previous one.
    fn observe(&mut self, records: &[EntityRecord]) -> Snapshot {
        let mut previous = self.snapshot.clone();
        self.snapshot.clear_entities();
        for record in records {
            self.snapshot
                .insert(*record, self.params.team_id, self.config.track_carried_ghosts);
        }
        if self.snapshot.round == 0 {
            previous = self.snapshot.clone();
        }
        previous
    }

    /// Run all systems in order.
    fn run_systems(&mut self, previous: &Snapshot) -> Result<(), AgentError> {
        // 1. Tracking recompute
        systems::diff::run(
            &self.params,
            &self.config,
            previous,
            &mut self.snapshot,
            &mut self.tracking,
            &mut self.pool,
        )?;
        // 2. Pool maintenance
        systems::maintenance::run(
            &self.params,
            &self.config,
            &self.snapshot,
            &mut self.pool,
            &mut self.rng,
        );
        // 3. Openings queue as pending
        systems::assignment::plan_openings(
            &self.params,
            &self.snapshot,
            &mut self.openings_done,
            &mut self.pending,
        )?;
        // 4. Scoring and assignment
        let pending = std::mem::take(&mut self.pending);
        let ctx = RoundContext::new(&self.params, &self.snapshot, &self.tracking);
        self.assignments = systems::assignment::run(&ctx, &self.pool, pending);
        Ok(())
    }
}
