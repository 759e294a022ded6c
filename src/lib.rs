//! Hashrand
//!
//! Hash-chained pseudo-random bit generators with XOR entropy pooling.
//!
//! # Architecture
//!
//! The core exposes two primitives per generator and layers everything
//! else on top of them:
//!
//! ```text
//! seed → hash chain → bit buffer → next_bits / next_unit_float
//!                                        ↓
//!                        sampling (bounded ints, choice, shuffle)
//! ```
//!
//! - [`HashGenerator`] stretches an arbitrary entropy seed into an
//!   unbounded, deterministic bit stream via iterated hashing.
//! - [`CompoundGenerator`] XOR-pools several independent sources so the
//!   result is at least as unpredictable as its strongest member.
//! - The [`Random`] extension trait adds bounded integers, range floats,
//!   choice, sampling without replacement, and shuffling over any
//!   [`BitSource`].
//!
//! # Design Principles
//!
//! - **Reproducible**: a seed and a hash algorithm pin the stream bit
//!   for bit, verified against known digests
//! - **Pluggable hashing**: any `{update, digest, digest_size}` strategy
//!   works; SHA-256, SHA3-224 and BLAKE3 ship in the box
//! - **No cryptographic claims**: unpredictability is bounded by what
//!   the hash primitive provides; this is not a key-derivation tool
//!
//! # Example
//!
//! ```
//! use hashrand::{
//!     BitSource, CompoundGenerator, HashGenerator, Random,
//!     Sha256Function, Sha3_224Function,
//! };
//!
//! let hello = HashGenerator::<Sha256Function>::new("Hello").unwrap();
//! let world = HashGenerator::<Sha3_224Function>::new("world").unwrap();
//! let mut rng = CompoundGenerator::new(vec![
//!     Box::new(hello),
//!     Box::new(world),
//! ]).unwrap();
//!
//! // Draw raw bits...
//! let bits = rng.next_bits(128);
//! assert!(bits.bits() <= 128);
//!
//! // ...or use the extended operations.
//! let mut deck: Vec<u32> = (0..52).collect();
//! rng.shuffle(&mut deck);
//! let roll = rng.below(6).unwrap() + 1;
//! assert!((1..=6).contains(&roll));
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod generator;
pub mod hashing;
pub mod sampling;
pub mod seed;
pub mod source;

// Re-export commonly used types at crate root
pub use generator::{
    Blake3Generator, CompoundGenerator, GeneratorError, HashGenerator, Sha256Generator,
    Sha3_224Generator,
};
pub use hashing::{Blake3Function, HashFunction, Sha256Function, Sha3_224Function};
pub use sampling::{Random, SampleError};
pub use seed::SeedMaterial;
pub use source::{BitSource, FLOAT_BITS};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
