//! Candidate objectives and their per-unit assignments.

use serde::{Deserialize, Serialize};

use crate::enums::TaskKind;
use crate::types::{EntityId, Position};

/// One outstanding objective in the task pool.
///
/// Tasks are values; several tasks with the same kind and target may coexist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Task {
    /// Capture a visible ghost.
    Bust { ghost: EntityId },
    /// Stun a visible enemy.
    Stun { enemy: EntityId },
    /// Escort one of our carriers home.
    Cover { carrier: EntityId },
    /// Visit a location; `weight` scales how costly the trip looks.
    Explore { target: Position, weight: f64 },
    /// Bring a carried ghost home. Applies only to carriers.
    ReturnToBase,
    /// Use the one-time sensor sweep.
    SensorSweep,
}

impl Task {
    pub fn kind(&self) -> TaskKind {
        match self {
            Task::Bust { .. } => TaskKind::Bust,
            Task::Stun { .. } => TaskKind::Stun,
            Task::Cover { .. } => TaskKind::Cover,
            Task::Explore { .. } => TaskKind::Explore,
            Task::ReturnToBase => TaskKind::ReturnToBase,
            Task::SensorSweep => TaskKind::SensorSweep,
        }
    }

    /// Entity the task points at, for entity-targeting kinds.
    pub fn target_id(&self) -> Option<EntityId> {
        match *self {
            Task::Bust { ghost } => Some(ghost),
            Task::Stun { enemy } => Some(enemy),
            Task::Cover { carrier } => Some(carrier),
            _ => None,
        }
    }

    /// Location of an explore task.
    pub fn explore_target(&self) -> Option<Position> {
        match *self {
            Task::Explore { target, .. } => Some(target),
            _ => None,
        }
    }
}

/// A task paired with the unit that would execute it.
///
/// Lower score is better.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub task: Task,
    pub unit: EntityId,
    pub score: f64,
}

impl Assignment {
    pub fn new(task: Task, unit: EntityId, score: f64) -> Self {
        Self { task, unit, score }
    }
}
