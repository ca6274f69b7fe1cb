//! This module holds basic types and algorithms for hexagon grids.
//!
//! ## Coordinate System
//!
//! We use the [cube coordinate system defined by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//!
//! The description in the link above is much better than anything I can write
//! here, but here's a TL;DR:
//!
//! Each tile has three components (`q`, `r`, and `s`). **For any tile, all
//! three components are integers and `q + r + s = 0`.** Even though hexagon
//! tiles are laid out in two dimensions, using three components makes the
//! math much simpler. Distance is just half the sum of the absolute component
//! differences, and each of the six neighbors is reached by adding 1 to one
//! component and subtracting 1 from another.
//!
//! Since `s` is always `-q - r`, we only store `q` and `r` (these are the
//! "axial" coordinates), and derive `s` whenever it's needed.
//!
//! ### Directions
//!
//! The six neighbor directions are numbered 0-5, counter-clockwise starting
//! at east:
//!
//! | Index | Direction  | `(q, r)`  |
//! |-------|------------|-----------|
//! | 0     | East       | `(1, 0)`  |
//! | 1     | North-east | `(1, -1)` |
//! | 2     | North-west | `(0, -1)` |
//! | 3     | West       | `(-1, 0)` |
//! | 4     | South-west | `(-1, 1)` |
//! | 5     | South-east | `(0, 1)`  |
//!
//! Index 6 ([DIRECTION_COUNT]) means "no direction", e.g. the direction from
//! a tile to itself.
//!
//! ### Continuous Space
//!
//! Some algorithms (lines, mostly) need to work with points *between* tile
//! centers. Those use the same coordinate system with real-valued components,
//! and get rounded back to the containing tile before they're handed back.

mod data_structure;
mod direction_table;
mod fractional;
mod line;
mod ring;
mod unit;

pub use self::{
    data_structure::*,
    direction_table::*,
    line::{LineSign, LineTracer},
    ring::{area_at_distance, ring_len_at_distance},
    unit::Hex,
};
