#![crate_name = "share_util"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Utilities for reconstructing additively shared integer vectors.

mod ring;

pub use ring::{Modulus, Ring};

/// Reconstruct a vector from two additive shares.
///
/// Index `i` of the result is `a[i] + b[i]`, where an index past the end of
/// either share contributes zero; the result has length
/// `max(a.len(), b.len())`. Sums use two's-complement wrapping arithmetic.
pub fn combine(a: &[i64], b: &[i64]) -> Vec<i64> {
    Ring::Wrapping64.combine(a, b)
}

/// Inner product of two vectors of the same length, with wrapping arithmetic.
pub fn dot(a: &[i64], b: &[i64]) -> i64 {
    Ring::Wrapping64.dot(a, b)
}
