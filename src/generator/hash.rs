//! Hash-chained bit generator.
//!
//! Stretches an arbitrary entropy seed into an unbounded, deterministic
//! bit stream. Two hash accumulators drive the chain: a hidden state that
//! is re-fed its own digest on every refill, and an output state whose
//! digest is the actual bit source. Because each refill extends an
//! ever-lengthening hash input, the stream never cycles within any
//! realistic number of draws and is reproducible from the seed alone.
//!
//! # Bit ordering
//!
//! Each digest is interpreted as a big-endian unsigned integer and
//! consumed from its least-significant bit upward. Within one draw,
//! earlier-taken chunks land in the more significant positions of the
//! result. Draws resume exactly where the previous one left off, with no
//! bits skipped or duplicated, including across refill boundaries.

use crate::hashing::HashFunction;
use crate::seed::SeedMaterial;
use crate::source::BitSource;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::GeneratorError;

/// A deterministic PRNG built from an iterated hash chain.
///
/// The hash algorithm is a swappable strategy; any [`HashFunction`]
/// with a non-zero digest size works. Instances are single-threaded:
/// every draw mutates the buffer and both accumulators, so concurrent
/// callers must serialize access externally.
pub struct HashGenerator<H: HashFunction> {
    /// Evolving accumulator, never exposed; re-seeded from its own digest.
    hidden: H,
    /// Accumulator whose digest supplies the output bits.
    output: H,
    /// Most recent digest, big-endian, consumed low bits first.
    current_word: BigUint,
    /// Unconsumed bits left in `current_word`.
    remaining_bits: usize,
    /// Digest width in bits, fixed by the chosen hash.
    digest_bits: usize,
    /// Refills performed since construction.
    refills: u64,
    /// Total bits dispensed since construction.
    bits_drawn: u64,
}

impl<H: HashFunction + Default> HashGenerator<H> {
    /// Creates a generator from any byte-convertible seed.
    ///
    /// The seed is normalized per [`SeedMaterial`], absorbed into the
    /// hidden accumulator, and the output accumulator is seeded with the
    /// hidden digest followed by the seed bytes. Fails with
    /// [`GeneratorError::UnusableHash`] when the hash strategy reports a
    /// zero-size digest.
    pub fn new(entropy: &(impl SeedMaterial + ?Sized)) -> Result<Self, GeneratorError> {
        let mut hidden = H::default();
        let mut output = H::default();

        let digest_size = output.digest_size();
        if digest_size == 0 {
            return Err(GeneratorError::UnusableHash);
        }
        let digest_bits = digest_size * 8;

        let seed_bytes = entropy.to_seed_bytes();
        hidden.update(&seed_bytes);
        output.update(&hidden.digest());
        output.update(&seed_bytes);

        let current_word = BigUint::from_bytes_be(&output.digest());

        tracing::debug!(digest_bits, "hash generator constructed");

        Ok(Self {
            hidden,
            output,
            current_word,
            remaining_bits: digest_bits,
            digest_bits,
            refills: 0,
            bits_drawn: 0,
        })
    }
}

impl<H: HashFunction> HashGenerator<H> {
    /// Digest width of the underlying hash, in bits.
    pub fn digest_bits(&self) -> usize {
        self.digest_bits
    }

    /// Number of buffer refills performed so far.
    pub fn refills(&self) -> u64 {
        self.refills
    }

    /// Total bits dispensed so far.
    pub fn bits_drawn(&self) -> u64 {
        self.bits_drawn
    }

    /// Advances the chain and reloads the bit buffer.
    fn refill(&mut self) {
        // The hidden accumulator eats its own previous digest, then the
        // output accumulator eats its previous digest plus the hidden
        // accumulator's new one.
        let hidden_digest = self.hidden.digest();
        self.hidden.update(&hidden_digest);

        let output_digest = self.output.digest();
        self.output.update(&output_digest);
        self.output.update(&self.hidden.digest());

        self.current_word = BigUint::from_bytes_be(&self.output.digest());
        self.remaining_bits = self.digest_bits;
        self.refills += 1;

        tracing::trace!(refills = self.refills, "bit buffer refilled from hash chain");
    }
}

impl<H: HashFunction> BitSource for HashGenerator<H> {
    fn next_bits(&mut self, k: u32) -> BigUint {
        let mut result = BigUint::zero();
        let mut wanted = k as usize;

        while wanted > 0 {
            if self.remaining_bits == 0 {
                self.refill();
            }

            let take = wanted.min(self.remaining_bits);
            let mask = (BigUint::one() << take) - 1u8;
            let chunk = &self.current_word & &mask;
            self.current_word >>= take;
            self.remaining_bits -= take;

            result = (result << take) | chunk;
            wanted -= take;
            self.bits_drawn += take as u64;
        }

        result
    }
}

impl<H: HashFunction> std::fmt::Debug for HashGenerator<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashGenerator")
            .field("digest_bits", &self.digest_bits)
            .field("remaining_bits", &self.remaining_bits)
            .field("refills", &self.refills)
            .finish_non_exhaustive()
    }
}
