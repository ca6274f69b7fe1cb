//! Tracing straight lines across the grid as sequences of adjacent tiles.

use crate::{
    hex::{fractional::FractionalHex, Hex},
    LineConfig,
};
use anyhow::Context;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Which way to break ties when a line runs exactly along the boundary between
/// two tiles. For example, the line from the origin to `(-1, 2)` passes right
/// through the shared edge of `(-1, 1)` and `(0, 1)`, so either one is an
/// equally good middle step.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum LineSign {
    /// Resolve ties counter-clockwise
    Plus,
    /// Resolve ties clockwise
    Minus,
    /// Don't resolve ties. Only use this if you don't care which side a line
    /// lands on, because on exact boundaries the result comes down to
    /// round-half-to-even on each component.
    #[default]
    Zero,
}

impl LineSign {
    /// Scale factor applied to the tie-breaking nudge
    pub fn factor(self) -> f64 {
        match self {
            Self::Plus => 1.0,
            Self::Minus => -1.0,
            Self::Zero => 0.0,
        }
    }
}

/// Draws lines between tiles. The line between two tile centers is
/// interpolated in continuous space, then each sample is rounded to the tile
/// that contains it.
///
/// Plenty of lines pass exactly over tile edges or vertices, where rounding
/// can't pick a side on its own. To handle that, both endpoints get shifted by
/// a tiny epsilon vector before interpolating, which pushes every sample off
/// the boundary onto a consistent side. The epsilon is rotated to match the
/// line's direction, so "side" is always relative to the direction of travel,
/// and [LineSign] flips which side that is.
///
/// Lines are exact as long as every component (q, r and s) of both endpoints
/// is within ±[LineTracer::MAX_COMPONENT]. Past that, float error on the
/// coordinates starts to compete with the nudge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LineTracer {
    epsilon: FractionalHex,
}

impl LineTracer {
    /// Largest component magnitude for which lines are guaranteed to start
    /// and end on their endpoints, with every step adjacent to the last.
    pub const MAX_COMPONENT: i32 = 1 << 21;

    /// Tracer using the standard `(1e-6, 2e-6)` epsilon
    pub const DEFAULT: Self = Self {
        epsilon: FractionalHex::new(
            LineConfig::DEFAULT_EPSILON_Q,
            LineConfig::DEFAULT_EPSILON_R,
        ),
    };

    /// Build a tracer with a custom epsilon. Returns an error if the given
    /// config is invalid.
    pub fn new(config: &LineConfig) -> anyhow::Result<Self> {
        config.validate().context("invalid line config")?;
        debug!("Building line tracer with config {:?}", config);
        Ok(Self {
            epsilon: FractionalHex::new(config.epsilon_q, config.epsilon_r),
        })
    }

    /// Get every tile on the line from `from` to `to`, inclusive on both ends.
    /// The output always has `distance + 1` tiles, and every tile is adjacent
    /// to the one before it. If the endpoints are equal, the line is just
    /// that one tile.
    pub fn line(&self, from: Hex, to: Hex, sign: LineSign) -> Vec<Hex> {
        let distance = from.distance_to(to);
        trace!(
            "Tracing line from {} to {} ({} steps, {:?})",
            from,
            to,
            distance,
            sign
        );
        if distance == 0 {
            return vec![from];
        }

        let (a, b) = self.nudged_endpoints(from, to, sign);
        let step = 1.0 / f64::from(distance);
        (0..=distance)
            .map(|i| a.lerp(b, step * f64::from(i)).round())
            .collect()
    }

    /// Get just the second tile of [Self::line], i.e. the tile you'd step to
    /// first when walking from `from` to `to`. `None` if the endpoints are
    /// equal, since there's no step to take.
    pub fn first_step(
        &self,
        from: Hex,
        to: Hex,
        sign: LineSign,
    ) -> Option<Hex> {
        let distance = from.distance_to(to);
        if distance == 0 {
            return None;
        }
        let (a, b) = self.nudged_endpoints(from, to, sign);
        let step = 1.0 / f64::from(distance);
        Some(a.lerp(b, step).round())
    }

    /// Shift both ends of a line by the nudge. Interpolating between the
    /// results gives the continuous points to sample. A zero-length line
    /// collapses to the zero point.
    fn nudged_endpoints(
        &self,
        from: Hex,
        to: Hex,
        sign: LineSign,
    ) -> (FractionalHex, FractionalHex) {
        let travel = to - from;
        if travel.len() == 0 {
            return (FractionalHex::ZERO, FractionalHex::ZERO);
        }

        let nudge = self.nudge(travel) * sign.factor();
        (
            FractionalHex::from(from) + nudge,
            FractionalHex::from(to) + nudge,
        )
    }

    /// Rotate the epsilon by the travel vector, treating both (q, r) pairs as
    /// complex numbers. Not normalized, so the magnitude grows with the travel
    /// distance. Only the direction of the nudge matters.
    ///
    /// Every sample on an `n`-step line that isn't exactly on a boundary is at
    /// least `1/2n` away from one, so the nudge is capped at `1/4n`. Scaling
    /// keeps its direction, so ties still break the same way on long lines.
    fn nudge(&self, travel: Hex) -> FractionalHex {
        let (x, y) = (f64::from(travel.q()), f64::from(travel.r()));
        let (eq, er) = (self.epsilon.q(), self.epsilon.r());
        let nudge = FractionalHex::new(x * eq - y * er, x * er + y * eq);

        let limit = 0.25 / f64::from(travel.len());
        let len = nudge.len();
        if len > limit {
            trace!("Capping line nudge {:?} to length {}", nudge, limit);
            nudge * (limit / len)
        } else {
            nudge
        }
    }
}

impl Default for LineTracer {
    fn default() -> Self {
        Self::DEFAULT
    }
}
