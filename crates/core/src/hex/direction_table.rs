//! The six unit steps between adjacent tiles, plus helpers for doing math on
//! direction indexes.

use crate::{hex::Hex, unwrap};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// Number of tiles adjacent to any tile. This also doubles as the "no
/// direction" sentinel index, e.g. when asking for the direction from a tile
/// to itself.
pub const DIRECTION_COUNT: usize = 6;

/// Unit vector for each direction, indexed by direction index. Goes
/// counter-clockwise, starting at east.
pub const DIRECTIONS: [Hex; DIRECTION_COUNT] = [
    Hex::EAST,
    Hex::NORTH_EAST,
    Hex::NORTH_WEST,
    Hex::WEST,
    Hex::SOUTH_WEST,
    Hex::SOUTH_EAST,
];

/// The 6 directions in which tiles line up side-to-side. Variant order matches
/// [DIRECTIONS], so `dir as usize` is the direction index.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl Direction {
    /// Index of this direction in [DIRECTIONS], always in `[0, 6)`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Get the direction for an arbitrary index. The index is normalized first
    /// (see [normalize_direction]), so this accepts negative values and values
    /// beyond 6.
    pub fn from_index(index: i32) -> Self {
        let index = normalize_direction(index);
        unwrap!(
            Self::iter().nth(index),
            "Direction index {} out of range",
            index
        )
    }

    /// Get the offset that moves a tile one step in this direction
    pub fn vector(self) -> Hex {
        DIRECTIONS[self.index()]
    }

    /// Find the direction whose unit vector equals the given vector. Returns
    /// `None` if the vector isn't a single step to an adjacent tile.
    pub fn from_vector(vector: Hex) -> Option<Self> {
        Self::iter().find(|dir| dir.vector() == vector)
    }

    /// Get the direction directly opposite this one
    pub fn opposite(self) -> Self {
        Self::from_index(inverse_direction(self.index() as i32) as i32)
    }
}

/// Get the unit vector for a direction index. Any integer is accepted, and
/// will be normalized into `[0, 6)`.
pub fn direction(index: i32) -> Hex {
    DIRECTIONS[normalize_direction(index)]
}

/// Map any integer onto a valid direction index in `[0, 6)`. Rust's `%` is a
/// remainder, not a modulus (`-1 % 6 == -1`), so we shift negative remainders
/// back up into range.
pub fn normalize_direction(index: i32) -> usize {
    let count = DIRECTION_COUNT as i32;
    ((count + index % count) % count) as usize
}

/// Get the index of the direction opposite the given one
pub fn inverse_direction(index: i32) -> usize {
    (normalize_direction(index) + DIRECTION_COUNT / 2) % DIRECTION_COUNT
}
