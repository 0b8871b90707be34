//! Command-line front end for the ghost-hunting agent.
//!
//! Reads the match protocol from stdin, drives the agent one round at a time
//! and writes one command line per own unit to stdout. Logs go to stderr.

pub mod cli;
pub mod game_loop;
pub mod protocol;

pub use codebusters_core as core;
