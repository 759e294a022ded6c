//! The hash strategy capability.

/// An incremental hash accumulator usable as a generator building block.
///
/// Implementations absorb input with [`update`](HashFunction::update) and
/// report the digest of *everything absorbed so far* with
/// [`digest`](HashFunction::digest). Unlike one-shot hashing APIs, calling
/// `digest` must not reset or consume the accumulator: the hash chain
/// interleaves digest reads with further updates on the same instance.
pub trait HashFunction {
    /// Absorbs `data` into the accumulator.
    fn update(&mut self, data: &[u8]);

    /// Returns the digest of all data absorbed so far.
    ///
    /// The accumulator remains usable; subsequent updates extend the
    /// already-absorbed input.
    fn digest(&self) -> Vec<u8>;

    /// Digest length in bytes.
    ///
    /// Must be constant for the lifetime of the instance. A zero size
    /// makes the hash unusable for bit generation and is rejected at
    /// generator construction.
    fn digest_size(&self) -> usize;
}
