//! Fundamental geometric types and movement estimates.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{BUST_RANGE_MAX, BUST_RANGE_MIN, MOVE_RANGE};

/// Stable numeric id of an entity, unique within its category.
pub type EntityId = u32;

/// Grid position on the map. Coordinates are never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Position as a floating-point vector for kinematic math.
    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x as f64, self.y as f64)
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Rounds needed to cover `distance` moving in a straight line.
pub fn moves_from_distance(distance: f64) -> u32 {
    (distance / MOVE_RANGE).ceil() as u32
}

/// Rounds needed to get from `distance` into the bust band.
///
/// Too close means backing off the whole distance; too far means reaching
/// the middle of the band.
pub fn bust_moves_from_distance(distance: f64) -> u32 {
    if distance < BUST_RANGE_MIN {
        moves_from_distance(distance)
    } else if distance > BUST_RANGE_MAX {
        moves_from_distance(distance - (BUST_RANGE_MIN + BUST_RANGE_MAX) / 2.0)
    } else {
        0
    }
}
