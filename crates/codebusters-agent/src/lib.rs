//! Decision core for the ghost-hunting agent.
//!
//! Owns the cross-round tracking state and the task pool, runs the per-round
//! systems (diff, pool maintenance, assignment, execution) in order and
//! produces one command per own unit.

pub mod context;
pub mod engine;
pub mod handoff;
pub mod scoring;
pub mod systems;
pub mod task_pool;
pub mod tracking;

pub use codebusters_core as core;
pub use engine::Agent;
