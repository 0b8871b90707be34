//! Read-only view of one round, shared by scoring, hand-off and execution.

use codebusters_core::entities::{Ghost, Unit};
use codebusters_core::state::{GameParams, Snapshot};
use codebusters_core::types::EntityId;

use crate::tracking::TrackingState;

#[derive(Debug, Clone, Copy)]
pub struct RoundContext<'a> {
    pub params: &'a GameParams,
    pub snapshot: &'a Snapshot,
    pub tracking: &'a TrackingState,
}

impl<'a> RoundContext<'a> {
    pub fn new(params: &'a GameParams, snapshot: &'a Snapshot, tracking: &'a TrackingState) -> Self {
        Self {
            params,
            snapshot,
            tracking,
        }
    }

    pub fn round(&self) -> u32 {
        self.snapshot.round
    }

    pub fn unit(&self, id: EntityId) -> Option<&'a Unit> {
        self.snapshot.units.get(&id)
    }

    pub fn enemy(&self, id: EntityId) -> Option<&'a Unit> {
        self.snapshot.enemies.get(&id)
    }

    pub fn ghost(&self, id: EntityId) -> Option<&'a Ghost> {
        self.snapshot.ghosts.get(&id)
    }
}
