//! Extended random operations.
//!
//! Bounded integers, range floats, element choice, sampling without
//! replacement, and shuffling, implemented once against the
//! [`BitSource`] primitives. A blanket impl makes every generator pick
//! these up for free, so generator variants only ever supply the two
//! primitives.

use crate::source::BitSource;
use num_traits::ToPrimitive;
use thiserror::Error;

/// Errors from the extended random operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// `below(0)` describes an empty range.
    #[error("bound must be positive")]
    ZeroBound,
    /// A sample larger than its population was requested.
    #[error("sample size {requested} exceeds population size {available}")]
    SampleTooLarge {
        /// Elements requested.
        requested: usize,
        /// Elements available.
        available: usize,
    },
}

/// Uniform draw in `[0, bound)` by rejection sampling.
///
/// Caller guarantees `bound > 0`. Draws just enough bits to cover
/// `bound - 1` and retries until the value lands under the bound, so the
/// result is exactly uniform and at most half the draws are rejected.
fn draw_below<R: BitSource + ?Sized>(rng: &mut R, bound: u64) -> u64 {
    debug_assert!(bound > 0);
    let width = 64 - (bound - 1).leading_zeros();
    loop {
        // width <= 64, so the draw always fits in a u64
        let draw = rng.next_bits(width).to_u64().unwrap_or(0);
        if draw < bound {
            return draw;
        }
    }
}

/// Extended random API over any bit source.
pub trait Random: BitSource {
    /// Uniform integer in `[0, bound)`.
    fn below(&mut self, bound: u64) -> Result<u64, SampleError> {
        if bound == 0 {
            return Err(SampleError::ZeroBound);
        }
        Ok(draw_below(self, bound))
    }

    /// Uniform float in `[low, high)`.
    fn range_f64(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_unit_float()
    }

    /// Uniformly chosen element, or `None` for an empty slice.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = draw_below(self, items.len() as u64) as usize;
        Some(&items[index])
    }

    /// `n` distinct elements drawn without replacement, in draw order.
    ///
    /// Runs a partial Fisher-Yates over an index table, so population
    /// elements are cloned only when picked.
    fn sample<T: Clone>(&mut self, items: &[T], n: usize) -> Result<Vec<T>, SampleError> {
        if n > items.len() {
            return Err(SampleError::SampleTooLarge {
                requested: n,
                available: items.len(),
            });
        }

        let mut indices: Vec<usize> = (0..items.len()).collect();
        let mut picked = Vec::with_capacity(n);
        for i in 0..n {
            let j = i + draw_below(self, (items.len() - i) as u64) as usize;
            indices.swap(i, j);
            picked.push(items[indices[i]].clone());
        }
        Ok(picked)
    }

    /// In-place Fisher-Yates shuffle.
    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = draw_below(self, i as u64 + 1) as usize;
            items.swap(i, j);
        }
    }
}

impl<R: BitSource + ?Sized> Random for R {}
