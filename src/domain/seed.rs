//! String hashing and the seeded draw function.
//!
//! Every fabricated number on the dashboard comes from `draw(seed + k)` where
//! `seed` is the absolute value of the 32-bit string hash of the query. The
//! generator is stateless: callers own the offset `k`.

/// Hash a string into a signed 32-bit integer.
///
/// Walks UTF-16 code units and accumulates `acc * 31 + unit`, wrapping to
/// 32 bits after every step. The empty string hashes to 0.
pub fn hash(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Draw a value in `[0, 1)` from an integer seed.
///
/// `sin(seed) * 10000` with the integer part discarded. Not uniform and not
/// secure, but reproducible for a given seed.
pub fn draw(seed: i64) -> f64 {
    let x = (seed as f64).sin() * 10_000.0;
    x - x.floor()
}

/// Base seed for a family of draws.
///
/// Stored as `i64` so that `|i32::MIN|` is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed(i64);

impl Seed {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Seed from a raw hash value (absolute value, no overflow).
    pub fn from_hash(hash: i32) -> Self {
        Self((hash as i64).abs())
    }

    /// Seed derived from an input string: `|hash(input)|`.
    pub fn from_input(input: &str) -> Self {
        Self::from_hash(hash(input))
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// Draw at `seed + offset`.
    pub fn draw(self, offset: u32) -> f64 {
        draw(self.0 + offset as i64)
    }
}
