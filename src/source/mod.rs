//! The bit source capability.
//!
//! Every generator exposes exactly two primitives: a `k`-bit draw and a
//! unit-interval float derived from it. The extended random operations in
//! [`crate::sampling`] are written once against this trait, so generator
//! variants only ever implement the primitives.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

/// Significand width of an `f64`, the draw size behind unit floats.
pub const FLOAT_BITS: u32 = 53;

/// Scale factor mapping a 53-bit draw into `[0.0, 1.0)`.
const FLOAT_RECIP: f64 = 1.0 / 9_007_199_254_740_992.0; // 2^-53

/// A deterministic source of pseudo-random bits.
pub trait BitSource {
    /// Draws the next `k` bits of the stream as an unsigned integer.
    ///
    /// `k` may exceed the width of the underlying digest; the stream
    /// continues seamlessly across internal refills. `next_bits(0)`
    /// returns zero and consumes no state.
    fn next_bits(&mut self, k: u32) -> BigUint;

    /// Draws the next value in `[0.0, 1.0)` with full `f64` resolution.
    fn next_unit_float(&mut self) -> f64 {
        // 53 bits always fit in a u64
        let bits = self.next_bits(FLOAT_BITS).to_u64().unwrap_or(0);
        bits as f64 * FLOAT_RECIP
    }
}
