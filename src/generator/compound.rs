//! XOR entropy pooling over multiple generators.

use crate::source::BitSource;
use num_bigint::BigUint;
use num_traits::Zero;

use super::GeneratorError;

/// Pools several independent bit sources into one stream by XOR.
///
/// Every draw fans the same width out to each source in order and folds
/// the results with bitwise XOR, so the pooled stream is at least as
/// unpredictable as its strongest single source: compromising all but
/// one source still leaves the output dependent on the uncompromised
/// one. The pool holds no buffer of its own; each source advances its
/// own stream exactly once per call.
pub struct CompoundGenerator {
    sources: Vec<Box<dyn BitSource>>,
}

impl CompoundGenerator {
    /// Creates a pool over the given sources.
    ///
    /// An empty source list would degenerate to a stream of zeros, so it
    /// is rejected with [`GeneratorError::NoSources`].
    pub fn new(sources: Vec<Box<dyn BitSource>>) -> Result<Self, GeneratorError> {
        if sources.is_empty() {
            return Err(GeneratorError::NoSources);
        }

        tracing::debug!(sources = sources.len(), "compound generator constructed");

        Ok(Self { sources })
    }

    /// Number of pooled sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }
}

impl BitSource for CompoundGenerator {
    fn next_bits(&mut self, k: u32) -> BigUint {
        self.sources
            .iter_mut()
            .fold(BigUint::zero(), |acc, source| acc ^ source.next_bits(k))
    }
}

impl std::fmt::Debug for CompoundGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompoundGenerator")
            .field("sources", &self.sources.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::HashGenerator;
    use crate::hashing::{Sha256Function, Sha3_224Function};

    fn hello() -> HashGenerator<Sha256Function> {
        HashGenerator::new("Hello").unwrap()
    }

    fn world() -> HashGenerator<Sha3_224Function> {
        HashGenerator::new("world").unwrap()
    }

    fn hello_world_pool() -> CompoundGenerator {
        CompoundGenerator::new(vec![Box::new(hello()), Box::new(world())]).unwrap()
    }

    fn from_hex(s: &str) -> BigUint {
        BigUint::parse_bytes(s.as_bytes(), 16).unwrap()
    }

    #[test]
    fn test_known_vector_first_draw() {
        let mut pool = hello_world_pool();
        assert_eq!(
            pool.next_bits(256),
            from_hex("0f7bd21d15f08c14b69475985ba7edbef2979665c9030d6d9d6cddf7a9228587")
        );
    }

    #[test]
    fn test_known_vector_second_draw() {
        let mut pool = hello_world_pool();
        pool.next_bits(256);
        assert_eq!(
            pool.next_bits(256),
            from_hex("f7ecbd5fb8429c3552b6d76f4ccb00268aa73909006a230e6a4e624423d927b0")
        );
    }

    #[test]
    fn test_xor_algebra_matches_independent_sources() {
        let mut pool = hello_world_pool();
        let mut a = hello();
        let mut b = world();

        for k in [1u32, 13, 53, 224, 256, 0, 97] {
            assert_eq!(
                pool.next_bits(k),
                a.next_bits(k) ^ b.next_bits(k),
                "diverged at k={k}"
            );
        }
    }

    #[test]
    fn test_single_source_pool_is_identity() {
        let mut pool = CompoundGenerator::new(vec![Box::new(hello())]).unwrap();
        let mut solo = hello();
        assert_eq!(pool.next_bits(300), solo.next_bits(300));
    }

    #[test]
    fn test_pools_nest() {
        let inner = CompoundGenerator::new(vec![Box::new(hello())]).unwrap();
        let mut nested = CompoundGenerator::new(vec![Box::new(inner), Box::new(world())]).unwrap();
        let mut flat = hello_world_pool();
        assert_eq!(nested.next_bits(256), flat.next_bits(256));
    }

    #[test]
    fn test_empty_source_list_rejected() {
        assert!(matches!(
            CompoundGenerator::new(Vec::new()),
            Err(GeneratorError::NoSources)
        ));
    }

    #[test]
    fn test_unit_float_in_range() {
        let mut pool = hello_world_pool();
        for _ in 0..100 {
            let f = pool.next_unit_float();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn test_source_count() {
        assert_eq!(hello_world_pool().source_count(), 2);
    }
}
