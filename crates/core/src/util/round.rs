//! Float rounding primitives used when snapping continuous positions back onto
//! the grid.

/// Number of explicit mantissa bits in an `f64`
const MANTISSA_BITS: u32 = 52;
/// Exponent bias of an `f64`
const EXPONENT_BIAS: u64 = 1023;
const EXPONENT_MASK: u64 = 0x7FF;
const SIGN_MASK: u64 = 1 << 63;
/// Bit pattern of `1.0`
const ONE: u64 = EXPONENT_BIAS << MANTISSA_BITS;

/// Round a float to the nearest integer value, with ties going to the even
/// neighbor (a.k.a. banker's rounding, IEEE-754 `roundTiesToEven`). So `0.5`
/// becomes `0`, `1.5` becomes `2` and `2.5` becomes `2`.
///
/// This works directly on the bit pattern of the float rather than going
/// through any float math, so the result is deterministic across platforms.
/// The sign is always preserved, meaning `-0.4` rounds to `-0.0`. Infinities
/// and `NaN` are returned as-is.
pub fn round_ties_even(x: f64) -> f64 {
    let bits = x.to_bits();
    let exponent = (bits >> MANTISSA_BITS) & EXPONENT_MASK;

    let rounded = if exponent < EXPONENT_BIAS - 1 {
        // |x| < 0.5, including subnormals. Always rounds to zero
        bits & SIGN_MASK
    } else if exponent == EXPONENT_BIAS - 1 {
        // 0.5 <= |x| < 1. Exactly 0.5 is a tie, and zero is the even side
        let mantissa = bits & ((1 << MANTISSA_BITS) - 1);
        if mantissa == 0 {
            bits & SIGN_MASK
        } else {
            (bits & SIGN_MASK) | ONE
        }
    } else if exponent < EXPONENT_BIAS + u64::from(MANTISSA_BITS) {
        // 1 <= |x| < 2^52, so there are some fractional bits to deal with.
        // Every bit below `frac_bits` is fractional, and the bit at
        // `frac_bits` is the lowest integer bit. For |x| in [1, 2) that's the
        // lowest exponent bit, which is conveniently always 1 (odd).
        let frac_bits = MANTISSA_BITS - (exponent - EXPONENT_BIAS) as u32;
        let frac_mask = (1u64 << frac_bits) - 1;
        let half = 1u64 << (frac_bits - 1);
        let fraction = bits & frac_mask;
        let truncated = bits & !frac_mask;
        let is_odd = (truncated >> frac_bits) & 1 == 1;

        if fraction > half || (fraction == half && is_odd) {
            // Overflowing the mantissa carries into the exponent, which is
            // exactly the next power of two
            truncated + (1u64 << frac_bits)
        } else {
            truncated
        }
    } else {
        // Already an integer, or inf/NaN
        bits
    };

    f64::from_bits(rounded)
}

/// [round_ties_even], then cast to an integer. Caller is responsible for the
/// value fitting in an `i32`.
pub fn round_to_i32(x: f64) -> i32 {
    round_ties_even(x) as i32
}
