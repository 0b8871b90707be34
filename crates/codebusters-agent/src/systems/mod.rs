//! Per-round systems, run by [`crate::Agent`] in a fixed order.
//!
//! Systems are plain functions over the agent's state. They own nothing;
//! everything that survives a round lives in the agent.

pub mod assignment;
pub mod diff;
pub mod execution;
pub mod maintenance;
