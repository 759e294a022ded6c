//! Pluggable cryptographic hash strategies.
//!
//! Generators treat the hash algorithm as a swappable strategy so that
//! it can be replaced without touching the chaining logic (algorithm
//! agility, performance experiments).

mod function;
mod standard;

pub use function::HashFunction;
pub use standard::{Blake3Function, Sha256Function, Sha3_224Function};
