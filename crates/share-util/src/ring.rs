//! Arithmetic domains in which shares are reconstructed and compared.

use itertools::{EitherOrBoth, Itertools};

/// A modulus usable for [`Ring::Modular`].
///
/// The modulus is at least 2 and at most `i64::MAX`, so that every reduced
/// value is representable as a non-negative `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modulus(u64);

impl Modulus {
    /// Create a modulus, returning `None` if `q < 2` or `q > i64::MAX`.
    pub fn new(q: u64) -> Option<Self> {
        if q < 2 || q > i64::MAX as u64 {
            None
        } else {
            Some(Self(q))
        }
    }

    /// The value of the modulus.
    pub const fn value(&self) -> u64 {
        self.0
    }

    fn wide(&self) -> i128 {
        self.0 as i128
    }
}

/// The arithmetic used to add, multiply and compare reconstructed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ring {
    /// Two's-complement `i64` arithmetic, i.e. the integers modulo 2^64.
    ///
    /// This is the arithmetic of the parties producing the shares; for values
    /// that do not overflow it coincides with plain integer arithmetic.
    #[default]
    Wrapping64,
    /// Arithmetic modulo `q`, with every value kept in `[0, q)`.
    Modular(Modulus),
}

impl Ring {
    /// Bring `a` into the canonical representation of the ring.
    pub fn reduce(&self, a: i64) -> i64 {
        match self {
            Ring::Wrapping64 => a,
            Ring::Modular(q) => (a as i128).rem_euclid(q.wide()) as i64,
        }
    }

    /// Add two values.
    pub fn add(&self, a: i64, b: i64) -> i64 {
        match self {
            Ring::Wrapping64 => a.wrapping_add(b),
            Ring::Modular(q) => ((a as i128) + (b as i128)).rem_euclid(q.wide()) as i64,
        }
    }

    /// Subtract `b` from `a`.
    pub fn sub(&self, a: i64, b: i64) -> i64 {
        match self {
            Ring::Wrapping64 => a.wrapping_sub(b),
            Ring::Modular(q) => ((a as i128) - (b as i128)).rem_euclid(q.wide()) as i64,
        }
    }

    /// Multiply two values.
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        match self {
            Ring::Wrapping64 => a.wrapping_mul(b),
            Ring::Modular(q) => {
                // Reducing first keeps the product below 2^126.
                let a = (a as i128).rem_euclid(q.wide());
                let b = (b as i128).rem_euclid(q.wide());
                (a * b).rem_euclid(q.wide()) as i64
            }
        }
    }

    /// Element-wise sum of two share vectors.
    ///
    /// The result has length `max(a.len(), b.len())`; an index missing on one
    /// side contributes zero.
    pub fn combine(&self, a: &[i64], b: &[i64]) -> Vec<i64> {
        a.iter()
            .zip_longest(b.iter())
            .map(|pair| match pair {
                EitherOrBoth::Both(x, y) => self.add(*x, *y),
                EitherOrBoth::Left(x) | EitherOrBoth::Right(x) => self.reduce(*x),
            })
            .collect()
    }

    /// Inner product of `a` and `b`, which must have the same length.
    pub fn dot(&self, a: &[i64], b: &[i64]) -> i64 {
        debug_assert_eq!(a.len(), b.len());
        a.iter()
            .zip(b.iter())
            .fold(self.reduce(0), |acc, (x, y)| self.add(acc, self.mul(*x, *y)))
    }
}

#[cfg(test)]
mod tests {
    use super::{Modulus, Ring};
    use proptest::collection::vec as prop_vec;
    use proptest::prelude::*;

    #[test]
    fn modulus_bounds() {
        assert!(Modulus::new(0).is_none());
        assert!(Modulus::new(1).is_none());
        assert_eq!(Modulus::new(2).map(|q| q.value()), Some(2));
        assert!(Modulus::new(i64::MAX as u64).is_some());
        assert!(Modulus::new(i64::MAX as u64 + 1).is_none());
        assert!(Modulus::new(u64::MAX).is_none());
    }

    #[test]
    fn wrapping_matches_two_complement() {
        let ring = Ring::Wrapping64;
        assert_eq!(ring.add(i64::MAX, 1), i64::MIN);
        assert_eq!(ring.sub(i64::MIN, 1), i64::MAX);
        assert_eq!(ring.mul(1 << 62, 4), 0);
        assert_eq!(ring.reduce(-17), -17);
    }

    #[test]
    fn modular_reduces_negatives() {
        let ring = Ring::Modular(Modulus::new(7).unwrap());
        assert_eq!(ring.reduce(-1), 6);
        assert_eq!(ring.add(5, 4), 2);
        assert_eq!(ring.sub(2, 5), 4);
        assert_eq!(ring.mul(-3, 3), 5);
        assert_eq!(ring.combine(&[3, -10], &[4]), vec![0, 4]);
        assert_eq!(ring.dot(&[], &[]), 0);
    }

    #[test]
    fn combine_pads_with_zero() {
        let ring = Ring::Wrapping64;
        assert_eq!(ring.combine(&[1, 2, 3], &[10]), vec![11, 2, 3]);
        assert_eq!(ring.combine(&[], &[-4, 5]), vec![-4, 5]);
        assert!(ring.combine(&[], &[]).is_empty());
    }

    #[test]
    fn dot_of_orthogonal_vectors() {
        let ring = Ring::Wrapping64;
        assert_eq!(ring.dot(&[1, 0], &[0, 1]), 0);
        assert_eq!(ring.dot(&[2, -3, 4], &[5, 6, -1]), -12);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn dot_rejects_unequal_lengths() {
        Ring::Wrapping64.dot(&[1, 2], &[3]);
    }

    proptest! {
        #[test]
        fn modular_values_are_canonical(q in 2u64..=(i64::MAX as u64), a in any::<i64>(), b in any::<i64>()) {
            let ring = Ring::Modular(Modulus::new(q).unwrap());
            for x in [ring.reduce(a), ring.add(a, b), ring.sub(a, b), ring.mul(a, b)] {
                prop_assert!(x >= 0);
                prop_assert!((x as u64) < q);
            }
        }

        #[test]
        fn sub_inverts_add(a in any::<i64>(), b in any::<i64>()) {
            let ring = Ring::Wrapping64;
            prop_assert_eq!(ring.sub(ring.add(a, b), b), a);
        }

        #[test]
        fn modular_combine_agrees_with_wide_sum(
            q in 2u64..1_000_000,
            a in prop_vec(any::<i32>(), 0..16),
            b in prop_vec(any::<i32>(), 0..16),
        ) {
            let ring = Ring::Modular(Modulus::new(q).unwrap());
            let a: Vec<i64> = a.into_iter().map(i64::from).collect();
            let b: Vec<i64> = b.into_iter().map(i64::from).collect();
            let combined = ring.combine(&a, &b);
            for (i, c) in combined.iter().enumerate() {
                let sum = a.get(i).copied().unwrap_or(0) + b.get(i).copied().unwrap_or(0);
                prop_assert_eq!(*c, sum.rem_euclid(q as i64));
            }
        }
    }
}
