use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration for a [LineTracer](crate::LineTracer). The defaults are what
/// [Hex::line](crate::Hex::line) uses, and there's rarely a reason to change
/// them.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LineConfig {
    /// q component of the epsilon vector that nudges lines off of tile
    /// boundaries. This needs to be big enough to survive float error on
    /// coordinates up to [crate::LineTracer::MAX_COMPONENT]. Long lines don't
    /// need a smaller epsilon, since the tracer caps the nudge so it can't
    /// push a sample into another tile.
    #[validate(range(min = 0.00000001, max = 0.001))]
    pub epsilon_q: f64,

    /// r component of the epsilon vector. Defaults to twice
    /// [Self::epsilon_q], which keeps the nudge off of the grid's axes of
    /// symmetry.
    #[validate(range(min = 0.00000001, max = 0.001))]
    pub epsilon_r: f64,
}

impl LineConfig {
    pub const DEFAULT_EPSILON_Q: f64 = 1e-6;
    pub const DEFAULT_EPSILON_R: f64 = 2e-6;
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            epsilon_q: Self::DEFAULT_EPSILON_Q,
            epsilon_r: Self::DEFAULT_EPSILON_R,
        }
    }
}
