//! hexgrid is a library of exact, deterministic geometry for hexagonal tile
//! grids. It covers cube coordinates and their arithmetic, distances, neighbor
//! and ring enumeration, and tracing lines between tiles.
//!
//! ```
//! use hexgrid::{Hex, LineSign};
//!
//! let target = Hex::EAST * 3;
//! let line = Hex::ZERO.line(target, LineSign::Plus);
//! assert_eq!(line, vec![Hex::ZERO, Hex::EAST, Hex::EAST * 2, target]);
//! assert_eq!(Hex::ZERO.distance_to(target), 3);
//! ```
//!
//! See the [hex] module for details on how the coordinate system works.
//!
//! Everything in here is a pure function over `Copy` values, so it's all safe
//! to call from as many threads as you like. The only mutable state is the
//! output buffers you pass to the ring functions.

mod config;
pub mod hex;
mod util;
mod wire;

pub use crate::{
    config::LineConfig,
    hex::{
        area_at_distance, direction, inverse_direction, normalize_direction,
        ring_len_at_distance, serde_hex_map, Direction, Hex, HexMap, HexSet,
        LineSign, LineTracer, DIRECTIONS, DIRECTION_COUNT,
    },
    util::round::round_ties_even,
    wire::HexMessage,
};
