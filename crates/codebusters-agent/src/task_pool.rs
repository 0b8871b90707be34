//! The pool of outstanding tasks.
//!
//! The pool never de-duplicates; the assignment pass decides which copy of
//! a task, if any, a unit takes.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use codebusters_core::constants::{MAP_MAX_X, MAP_MAX_Y};
use codebusters_core::enums::TaskKind;
use codebusters_core::tasks::Task;
use codebusters_core::types::{EntityId, Position};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPool {
    tasks: Vec<Task>,
}

impl TaskPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, task: Task) {
        debug!(?task, "task created");
        self.tasks.push(task);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn count(&self, kind: TaskKind) -> usize {
        self.tasks.iter().filter(|t| t.kind() == kind).count()
    }

    /// Remove every task of `kind` aimed at entity `id`. Returns how many went.
    pub fn remove_targeting(&mut self, kind: TaskKind, id: EntityId) -> usize {
        let before = self.tasks.len();
        self.tasks
            .retain(|t| !(t.kind() == kind && t.target_id() == Some(id)));
        let removed = before - self.tasks.len();
        if removed > 0 {
            debug!(?kind, target = id, removed, "tasks deleted");
        }
        removed
    }

    /// Remove explore tasks within `radius` of `position`. Returns how many went.
    pub fn remove_explore_near(&mut self, position: &Position, radius: f64) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| match t.explore_target() {
            Some(target) => target.distance_to(position) > radius,
            None => true,
        });
        let removed = before - self.tasks.len();
        if removed > 0 {
            debug!(%position, radius, removed, "explore tasks deleted");
        }
        removed
    }

    /// Add `count` explore tasks at uniformly random map positions.
    pub fn insert_random_explore<R: Rng>(&mut self, rng: &mut R, count: usize, weight: f64) {
        for _ in 0..count {
            let target = Position::new(rng.gen_range(0..=MAP_MAX_X), rng.gen_range(0..=MAP_MAX_Y));
            self.tasks.push(Task::Explore { target, weight });
        }
        debug!(count, weight, "random explore tasks added");
    }
}
