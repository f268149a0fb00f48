//! The update rule and its verification.
//!
//! Given reconstructed `u` and `v`, the parties are expected to have computed
//! `u[i] + v[i] * (1 - <u, v>)` for every index. [`verify`] recomputes that
//! vector and compares it with the reconstructed result of the parties.

use share_util::Ring;

use crate::{Error, Result};

/// An index at which the reconstructed update differs from the expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    /// Position in the vector.
    pub index: usize,
    /// Value reconstructed from the updated shares.
    pub actual: i64,
    /// Value predicted by the update rule.
    pub expected: i64,
}

impl Mismatch {
    /// Signed difference `actual - expected`.
    pub fn difference(&self) -> i64 {
        self.actual.wrapping_sub(self.expected)
    }
}

/// Outcome of comparing the reconstructed update with the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every index agrees.
    Match,
    /// The indices that disagree, in increasing order.
    Mismatch(Vec<Mismatch>),
}

impl Verdict {
    /// Whether the verification succeeded.
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match)
    }

    /// The disagreeing indices; empty on a match.
    pub fn mismatches(&self) -> &[Mismatch] {
        match self {
            Verdict::Match => &[],
            Verdict::Mismatch(mismatches) => mismatches,
        }
    }
}

/// Everything computed while verifying an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    /// Inner product of `u` and `v`.
    pub dot: i64,
    /// The vector predicted by the update rule.
    pub expected: Vec<i64>,
    /// The comparison result.
    pub verdict: Verdict,
}

/// Apply the update rule, returning `<u, v>` and the updated vector.
///
/// `u` and `v` must have the same length.
pub fn expected_update(ring: Ring, u: &[i64], v: &[i64]) -> (i64, Vec<i64>) {
    let dot = ring.dot(u, v);
    let scale = ring.sub(1, dot);
    let expected = u
        .iter()
        .zip(v.iter())
        .map(|(ui, vi)| ring.add(*ui, ring.mul(*vi, scale)))
        .collect();
    (dot, expected)
}

/// Check `updated` against the update rule applied to `u` and `v`.
///
/// Returns [`Error::DimensionMismatch`] unless the three vectors have the
/// same length. Every disagreeing index is reported.
pub fn verify(ring: Ring, u: &[i64], v: &[i64], updated: &[i64]) -> Result<Verification> {
    if u.len() != v.len() || u.len() != updated.len() {
        return Err(Error::dimension_mismatch(u.len(), v.len(), updated.len()));
    }

    let (dot, expected) = expected_update(ring, u, v);
    let mismatches: Vec<Mismatch> = updated
        .iter()
        .zip(expected.iter())
        .enumerate()
        .filter_map(|(index, (actual, expected))| {
            let actual = ring.reduce(*actual);
            (actual != *expected).then_some(Mismatch {
                index,
                actual,
                expected: *expected,
            })
        })
        .collect();

    let verdict = if mismatches.is_empty() {
        Verdict::Match
    } else {
        Verdict::Mismatch(mismatches)
    };
    tracing::debug!(dot, len = u.len(), matched = verdict.is_match(), "verified update");

    Ok(Verification {
        dot,
        expected,
        verdict,
    })
}
