//! Hex coordinates with real-valued components. These only exist as
//! intermediate values while interpolating between tiles, and always get
//! rounded back to a [Hex] before leaving the crate.

use crate::{hex::Hex, util::round::round_to_i32};
use derive_more::{Add, Mul, Sub};

/// A point anywhere in the hex grid, not just on a tile center. Like [Hex],
/// only q and r are stored and s is derived, so `q + r + s = 0` (up to float
/// error).
#[derive(Copy, Clone, Debug, Default, PartialEq, Add, Sub, Mul)]
pub(crate) struct FractionalHex {
    q: f64,
    r: f64,
}

impl FractionalHex {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        -self.q - self.r
    }

    /// Length as a vector, in tiles. On the `q + r + s = 0` plane this is the
    /// largest component magnitude.
    pub fn len(self) -> f64 {
        self.q.abs().max(self.r.abs()).max(self.s().abs())
    }

    /// Linearly interpolate between this point and another. `t=0` gives
    /// `self`, `t=1` gives `other`.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(lerp(self.q, other.q, t), lerp(self.r, other.r, t))
    }

    /// Snap this point to the center of the tile that contains it.
    ///
    /// Each component gets rounded on its own, which can knock the result off
    /// the `q + r + s = 0` plane. To fix that, we throw out whichever rounded
    /// component moved the furthest and derive it from the other two.
    /// https://www.redblobgames.com/grids/hexagons/#rounding
    pub fn round(self) -> Hex {
        let (q, r, s) = (self.q, self.r, self.s());
        let mut rq = round_to_i32(q);
        let mut rr = round_to_i32(r);
        let rs = round_to_i32(s);

        let axis = HexAxis::largest_error(
            (q - f64::from(rq)).abs(),
            (r - f64::from(rr)).abs(),
            (s - f64::from(rs)).abs(),
        );
        match axis {
            HexAxis::Q => rq = -rr - rs,
            HexAxis::R => rr = -rq - rs,
            // s is always derived from q and r, so there's nothing to do
            HexAxis::S => {}
        }
        Hex::new(rq, rr)
    }
}

impl From<Hex> for FractionalHex {
    fn from(hex: Hex) -> Self {
        Self::new(f64::from(hex.q()), f64::from(hex.r()))
    }
}

/// The 3 axes in the cube coordinate system
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum HexAxis {
    Q,
    R,
    S,
}

impl HexAxis {
    /// Pick the axis with the largest rounding error. Comparisons are strict,
    /// so ties go to the later axis: q only wins if it beats both others, then
    /// r wins if it beats s, otherwise s.
    pub fn largest_error(dq: f64, dr: f64, ds: f64) -> Self {
        if dq > dr && dq > ds {
            Self::Q
        } else if dr > ds {
            Self::R
        } else {
            Self::S
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}
