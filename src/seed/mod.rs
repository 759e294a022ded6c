//! Seed normalization.
//!
//! Generators accept any byte-convertible value as entropy. Byte slices
//! pass through unchanged; strings are encoded as UTF-8; numbers are
//! converted through their canonical decimal form, so seeding with `42`
//! and `"42"` produces the same stream.

/// A value usable as generator entropy.
pub trait SeedMaterial {
    /// Returns the normalized byte form of the seed.
    fn to_seed_bytes(&self) -> Vec<u8>;
}

impl SeedMaterial for [u8] {
    fn to_seed_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl<const N: usize> SeedMaterial for [u8; N] {
    fn to_seed_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl SeedMaterial for Vec<u8> {
    fn to_seed_bytes(&self) -> Vec<u8> {
        self.clone()
    }
}

impl SeedMaterial for str {
    fn to_seed_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl SeedMaterial for String {
    fn to_seed_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

macro_rules! seed_via_decimal {
    ($($t:ty),*) => {
        $(
            impl SeedMaterial for $t {
                fn to_seed_bytes(&self) -> Vec<u8> {
                    self.to_string().into_bytes()
                }
            }
        )*
    };
}

seed_via_decimal!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
