//! This sub-module contains the basic hex coordinate type. See the parent
//! module documentation for more info on the coordinate system.

use crate::{
    hex::{Direction, LineSign, LineTracer, DIRECTION_COUNT},
    unwrap,
};
use anyhow::anyhow;
use derive_more::{Add, AddAssign, Display, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A tile in the hex grid, in cube coordinates. Each tile has a q, r, and s
/// component, and `q + r + s = 0` for all tiles.
///
/// This struct only stores q and r, since s can be derived from the other two.
/// That means the invariant can't be broken, no matter how a value is built.
/// The same type doubles as a vector between two tiles (e.g. [Hex::EAST] is
/// both the tile east of the origin and the offset that moves one tile east).
///
/// All arithmetic is exact integer math. Nothing guards against overflow, so
/// keep magnitudes well within `i32`. Lines and headings have a tighter
/// limit: they're only exact while every component of both endpoints is
/// within ±[LineTracer::MAX_COMPONENT] (about ±2·10⁶).
///
/// ## Serialization
///
/// A hex serializes as a two-element sequence `[q, r]`. s is never serialized,
/// it gets re-derived on load.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s()")]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    pub const ZERO: Self = Self::new(0, 0);
    pub const EAST: Self = Self::new(1, 0);
    pub const NORTH_EAST: Self = Self::new(1, -1);
    pub const NORTH_WEST: Self = Self::new(0, -1);
    pub const WEST: Self = Self::new(-1, 0);
    pub const SOUTH_WEST: Self = Self::new(-1, 1);
    pub const SOUTH_EAST: Self = Self::new(0, 1);

    /// Construct a new hex with the given q and r. Since q+r+s=0 for all
    /// tiles, we can derive s from q & r.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Construct a hex from all three components. Returns an error if the
    /// components don't fall on the plane `q + r + s = 0`.
    pub fn try_new(q: i32, r: i32, s: i32) -> anyhow::Result<Self> {
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            Err(anyhow!(
                "Invalid hex ({}, {}, {}); must be on the plane q+r+s=0",
                q,
                r,
                s
            ))
        } else {
            Ok(Self::new(q, r))
        }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Get the two independent components, as `[q, r]`
    pub fn to_array(self) -> [i32; 2] {
        [self.q, self.r]
    }

    /// Length of this hex as a vector, i.e. the number of steps it takes to
    /// walk from the origin to this tile.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(self) -> u32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // Two adjacent tiles always differ by 1 in exactly two components
        let [q, r, s] = [self.q, self.r, self.s()].map(i32::unsigned_abs);
        (q + r + s) / 2
    }

    /// Calculate the path distance between two tiles, meaning the number of
    /// hops it takes to get from one to the other. 0 if the tiles are equal,
    /// 1 if the tiles are adjacent, 2 if there is 1 tile between them, etc.
    pub fn distance_to(self, other: Hex) -> u32 {
        (self - other).len()
    }

    /// Get the tile adjacent to this one, in the direction with the given
    /// index. The index is normalized, so negative values are fine.
    pub fn neighbor(self, direction: i32) -> Hex {
        self.adjacent(Direction::from_index(direction))
    }

    /// Get the tile adjacent to this one in a particular direction
    pub fn adjacent(self, direction: Direction) -> Hex {
        self + direction.vector()
    }

    /// Get an iterator of all the tiles directly adjacent to this one. The
    /// iterator will always contain exactly 6 values, in direction order.
    pub fn neighbors(self) -> impl Iterator<Item = Hex> {
        Direction::iter().map(move |dir| self.adjacent(dir))
    }

    /// Trace a line of adjacent tiles from this one to `target`, inclusive on
    /// both ends. See [LineTracer::line] for details on `sign`. The line is
    /// exact as long as all components of both tiles are within
    /// ±[LineTracer::MAX_COMPONENT].
    pub fn line(self, target: Hex, sign: LineSign) -> Vec<Hex> {
        LineTracer::DEFAULT.line(self, target, sign)
    }

    /// Get the direction of the first step along the line from this tile to
    /// `target`. `None` if the two tiles are the same.
    ///
    /// ## Panics
    ///
    /// Panics if the first step isn't adjacent to this tile. That can't happen
    /// while all components of both tiles are within
    /// ±[LineTracer::MAX_COMPONENT], but float error can cause it beyond that.
    pub fn heading(self, target: Hex, sign: LineSign) -> Option<Direction> {
        let step = LineTracer::DEFAULT.first_step(self, target, sign)?;
        Some(unwrap!(
            Direction::from_vector(step - self),
            "First step {} on line from {} to {} is not adjacent; lines are \
            only exact for components within ±{}",
            step,
            self,
            target,
            LineTracer::MAX_COMPONENT
        ))
    }

    /// Same as [Self::heading], but as a direction index. Returns
    /// [DIRECTION_COUNT] if the two tiles are the same. Panics under the
    /// same conditions as [Self::heading].
    pub fn direction_to(self, target: Hex, sign: LineSign) -> usize {
        self.heading(target, sign)
            .map_or(DIRECTION_COUNT, Direction::index)
    }
}

#[cfg(feature = "json")]
impl Hex {
    /// Serialize this hex to a JSON array `[q, r]`
    pub fn to_json(self) -> anyhow::Result<String> {
        use anyhow::Context;
        serde_json::to_string(&self).context("error serializing hex")
    }

    /// Deserialize a hex from a JSON array `[q, r]`. Will fail if the input
    /// is malformed.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        use anyhow::Context;
        serde_json::from_str(json).context("error deserializing hex")
    }
}

impl From<[i32; 2]> for Hex {
    fn from([q, r]: [i32; 2]) -> Self {
        Self::new(q, r)
    }
}

impl From<Hex> for [i32; 2] {
    fn from(hex: Hex) -> Self {
        hex.to_array()
    }
}

impl TryFrom<[i32; 3]> for Hex {
    type Error = anyhow::Error;

    fn try_from([q, r, s]: [i32; 3]) -> Result<Self, Self::Error> {
        Self::try_new(q, r, s)
    }
}
