//! Core types and definitions for the ghost-hunting agent.
//!
//! This crate defines the vocabulary shared across all other crates:
//! positions, entities, the per-round snapshot, tasks, commands, constants
//! and tuning config. It has no dependency on the protocol or any runtime.

pub mod commands;
pub mod config;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod error;
pub mod state;
pub mod tasks;
pub mod types;
