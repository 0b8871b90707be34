//! Textual match protocol.
//!
//! Input is whitespace separated integers, so parsing works on tokens and
//! ignores line layout. Output is one `Command` line per own unit.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use thiserror::Error;

use codebusters_core::commands::Command;
use codebusters_core::enums::UnitState;
use codebusters_core::state::EntityRecord;

/// Entity type marker for ghosts; anything else is a team id.
const GHOST_TYPE: i32 = -1;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("unexpected end of input while reading {what}")]
    UnexpectedEof { what: &'static str },

    #[error("malformed {what}: {token:?}")]
    Malformed { what: &'static str, token: String },

    #[error("unknown unit state code {code}")]
    UnknownState { code: u8 },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The three integers sent once before the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Startup {
    pub unit_count: usize,
    pub ghost_count: usize,
    pub team_id: u8,
}

/// Token reader over the referee's input stream.
pub struct ProtocolReader<R> {
    input: R,
    tokens: VecDeque<String>,
}

impl<R: BufRead> ProtocolReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            tokens: VecDeque::new(),
        }
    }

    pub fn read_startup(&mut self) -> Result<Startup, ProtocolError> {
        Ok(Startup {
            unit_count: self.next_value("unit count")?,
            ghost_count: self.next_value("ghost count")?,
            team_id: self.next_value("team id")?,
        })
    }

    /// Read one round of entities. `None` when the input ended cleanly
    /// before the round started.
    pub fn read_round(&mut self) -> Result<Option<Vec<EntityRecord>>, ProtocolError> {
        let Some(token) = self.next_token()? else {
            return Ok(None);
        };
        let count: usize = parse(token, "entity count")?;
        let records = (0..count)
            .map(|_| self.read_entity())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(records))
    }

    fn read_entity(&mut self) -> Result<EntityRecord, ProtocolError> {
        let id = self.next_value("entity id")?;
        let x = self.next_value("x coordinate")?;
        let y = self.next_value("y coordinate")?;
        let entity_type: i32 = self.next_value("entity type")?;

        if entity_type == GHOST_TYPE {
            let stamina = self.next_value("ghost stamina")?;
            let pressure = self.next_value("ghost capture pressure")?;
            return Ok(EntityRecord::ghost(id, x, y, stamina, pressure));
        }

        let team_id = u8::try_from(entity_type).map_err(|_| ProtocolError::Malformed {
            what: "entity type",
            token: entity_type.to_string(),
        })?;
        let code: u8 = self.next_value("unit state")?;
        let state = UnitState::from_code(code).ok_or(ProtocolError::UnknownState { code })?;
        let payload = self.next_value("unit state payload")?;
        Ok(EntityRecord::unit(id, x, y, team_id, state, payload))
    }

    fn next_value<T: FromStr>(&mut self, what: &'static str) -> Result<T, ProtocolError> {
        let token = self
            .next_token()?
            .ok_or(ProtocolError::UnexpectedEof { what })?;
        parse(token, what)
    }

    fn next_token(&mut self) -> Result<Option<String>, ProtocolError> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens
                .extend(line.split_whitespace().map(str::to_owned));
        }
        Ok(self.tokens.pop_front())
    }
}

fn parse<T: FromStr>(token: String, what: &'static str) -> Result<T, ProtocolError> {
    token
        .parse()
        .map_err(|_| ProtocolError::Malformed { what, token })
}

/// Write one line per command and flush, so the referee sees the round at once.
pub fn write_commands<W: Write>(output: &mut W, commands: &[Command]) -> io::Result<()> {
    for command in commands {
        writeln!(output, "{command}")?;
    }
    output.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use codebusters_core::commands::Action;
    use codebusters_core::state::RecordKind;
    use codebusters_core::types::Position;

    fn reader(input: &str) -> ProtocolReader<&[u8]> {
        ProtocolReader::new(input.as_bytes())
    }

    #[test]
    fn test_read_startup() {
        let startup = reader("3\n14\n1\n").read_startup().unwrap();
        assert_eq!(
            startup,
            Startup {
                unit_count: 3,
                ghost_count: 14,
                team_id: 1,
            }
        );
    }

    #[test]
    fn test_read_round() {
        let mut r = reader("2\n7 4000 3000 -1 12 1\n2 1500 800 0 1 7\n");
        let records = r.read_round().unwrap().unwrap();

        assert_eq!(records[0], EntityRecord::ghost(7, 4000, 3000, 12, 1));
        assert_eq!(records[1].position, Position::new(1500, 800));
        assert_eq!(
            records[1].kind,
            RecordKind::Unit {
                team_id: 0,
                state: UnitState::CarryingGhost,
                payload: 7,
            }
        );
        assert!(r.read_round().unwrap().is_none());
    }

    #[test]
    fn test_empty_round() {
        assert_eq!(reader("0\n").read_round().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_truncated_round() {
        let err = reader("1\n7 4000 3000").read_round().unwrap_err();
        assert!(matches!(err, ProtocolError::UnexpectedEof { what: "entity type" }));
    }

    #[test]
    fn test_bad_tokens() {
        let err = reader("1\n7 4000 x -1 12 1\n").read_round().unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed { what: "y coordinate", .. }));

        let err = reader("1\n2 1500 800 0 9 -1\n").read_round().unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownState { code: 9 }));

        let err = reader("1\n2 1500 800 -4 0 -1\n").read_round().unwrap_err();
        assert!(matches!(err, ProtocolError::Malformed { what: "entity type", .. }));
    }

    #[test]
    fn test_write_commands() {
        let mut out = Vec::new();
        write_commands(
            &mut out,
            &[
                Command::new(0, Action::Bust { ghost: 3 }),
                Command::new(1, Action::Release),
            ],
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "BUST 3 Unit #0\nRELEASE Unit #1\n");
    }
}
