//! Match loop: startup line, then one read/play/write cycle per round.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::info;

use codebusters_agent::Agent;
use codebusters_core::config::AgentConfig;
use codebusters_core::state::GameParams;

use crate::protocol::{self, ProtocolReader};

/// Play a whole match over the given streams. Returns the points scored.
///
/// Stops at the round limit or when the input closes between rounds.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, config: AgentConfig) -> Result<u32> {
    let mut reader = ProtocolReader::new(input);
    let startup = reader.read_startup().context("reading startup")?;
    let params = GameParams::new(startup.team_id, startup.unit_count, startup.ghost_count);
    info!(?startup, "match started");

    let mut agent = Agent::new(params, config);
    while !agent.is_finished() {
        let round = agent.snapshot().round;
        let Some(records) = reader
            .read_round()
            .with_context(|| format!("reading round {round}"))?
        else {
            info!(round, "input closed");
            break;
        };
        let commands = agent
            .play_round(&records)
            .with_context(|| format!("playing round {round}"))?;
        protocol::write_commands(&mut output, &commands)
            .with_context(|| format!("writing round {round}"))?;
    }

    Ok(agent.snapshot().points)
}
