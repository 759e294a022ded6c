//! Standard hash algorithm implementations.
//!
//! Each wrapper keeps a live accumulator and produces digests by
//! finalizing a clone, so a digest read never disturbs the running state.

use super::HashFunction;
use blake3::Hasher as Blake3Hasher;
use sha2::{Digest, Sha256};
use sha3::Sha3_224;

/// SHA-256, the default 256-bit strategy.
#[derive(Debug, Clone, Default)]
pub struct Sha256Function {
    inner: Sha256,
}

impl HashFunction for Sha256Function {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.inner, data);
    }

    fn digest(&self) -> Vec<u8> {
        self.inner.clone().finalize().to_vec()
    }

    fn digest_size(&self) -> usize {
        32
    }
}

/// SHA3-224, a 224-bit-class strategy.
#[derive(Debug, Clone, Default)]
pub struct Sha3_224Function {
    inner: Sha3_224,
}

impl HashFunction for Sha3_224Function {
    fn update(&mut self, data: &[u8]) {
        Digest::update(&mut self.inner, data);
    }

    fn digest(&self) -> Vec<u8> {
        self.inner.clone().finalize().to_vec()
    }

    fn digest_size(&self) -> usize {
        28
    }
}

/// BLAKE3 with its default 32-byte output.
#[derive(Debug, Clone)]
pub struct Blake3Function {
    inner: Blake3Hasher,
}

impl Default for Blake3Function {
    fn default() -> Self {
        Self {
            inner: Blake3Hasher::new(),
        }
    }
}

impl HashFunction for Blake3Function {
    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn digest(&self) -> Vec<u8> {
        self.inner.finalize().as_bytes().to_vec()
    }

    fn digest_size(&self) -> usize {
        32
    }
}
