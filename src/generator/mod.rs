//! Pseudo-random bit generators.
//!
//! Two variants share the [`BitSource`](crate::source::BitSource)
//! contract: [`HashGenerator`] stretches a seed into an unbounded stream
//! by iterated hashing, and [`CompoundGenerator`] XOR-pools several
//! independent sources into one stronger stream.

mod compound;
mod hash;

pub use compound::CompoundGenerator;
pub use hash::HashGenerator;

use crate::hashing::{Blake3Function, Sha256Function, Sha3_224Function};

/// Generator construction errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GeneratorError {
    /// The supplied hash strategy reports a zero-size digest.
    #[error("hash function reports a zero-size digest")]
    UnusableHash,
    /// A compound generator was given no sources to pool.
    #[error("compound generator requires at least one source")]
    NoSources,
}

/// Hash generator over SHA-256, the default strategy.
pub type Sha256Generator = HashGenerator<Sha256Function>;
/// Hash generator over SHA3-224.
pub type Sha3_224Generator = HashGenerator<Sha3_224Function>;
/// Hash generator over BLAKE3.
pub type Blake3Generator = HashGenerator<Blake3Function>;
