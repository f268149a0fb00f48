//! The verification run: load, reconstruct, verify, report.

use std::io::Write;

use share_util::Ring;

use crate::config::{SharePairNames, VerifierConfig};
use crate::loader::{SharePair, ShareRole, ShareSource};
use crate::report::Reporter;
use crate::verifier::{verify, Verdict};
use crate::Result;

/// The plaintext vectors recovered from both parties' shares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconstruction {
    /// `u`, from the initial shares.
    pub u: Vec<i64>,
    /// `v`, from the initial shares.
    pub v: Vec<i64>,
    /// The updated `u`, from the updated shares.
    pub updated: Vec<i64>,
}

impl Reconstruction {
    /// Sum the parties' shares.
    ///
    /// Only the first line of the updated share files, the updated `u`, takes
    /// part in the reconstruction.
    pub fn from_shares(ring: Ring, initial: &SharePair, updated: &SharePair) -> Self {
        Self {
            u: combine_logged(ring, "u", &initial.party0.u, &initial.party1.u),
            v: combine_logged(ring, "v", &initial.party0.v, &initial.party1.v),
            updated: combine_logged(ring, "updated u", &updated.party0.u, &updated.party1.u),
        }
    }
}

fn combine_logged(ring: Ring, name: &str, a: &[i64], b: &[i64]) -> Vec<i64> {
    if a.len() != b.len() {
        tracing::warn!(
            vector = name,
            party0_len = a.len(),
            party1_len = b.len(),
            "share lengths differ, padding the shorter share with zeros"
        );
    }
    ring.combine(a, b)
}

/// Process exit status of a verification run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// The reconstructed update equals the expected update.
    Verified,
    /// An input was missing or malformed, or the dimensions disagree.
    Fatal,
    /// Verification completed and found differing indices.
    Mismatch,
}

impl ExitStatus {
    /// The numeric process exit code.
    pub const fn code(self) -> i32 {
        match self {
            ExitStatus::Verified => 0,
            ExitStatus::Fatal => 2,
            ExitStatus::Mismatch => 3,
        }
    }

    /// Map the outcome of [`run`] to an exit status.
    pub fn from_outcome(outcome: &Result<Verdict>) -> Self {
        match outcome {
            Ok(Verdict::Match) => ExitStatus::Verified,
            Ok(Verdict::Mismatch(_)) => ExitStatus::Mismatch,
            Err(_) => ExitStatus::Fatal,
        }
    }
}

fn load_role<S, W>(
    source: &S,
    names: &SharePairNames,
    role: ShareRole,
    reporter: &mut Reporter<W>,
) -> Result<SharePair>
where
    S: ShareSource + ?Sized,
    W: Write,
{
    match source.load_pair(names) {
        Ok(pair) => Ok(pair),
        Err(err) => {
            reporter.load_failure(role, &err)?;
            Err(err)
        }
    }
}

/// Verify the updated shares in `source` against the initial ones.
///
/// The trace of the run is written to `reporter`. The first failure ends the
/// run: its diagnostic is reported and the error returned, and no verdict is
/// printed. A mismatching verdict is a successful run.
pub fn run<S, W>(
    config: &VerifierConfig,
    source: &S,
    reporter: &mut Reporter<W>,
) -> Result<Verdict>
where
    S: ShareSource + ?Sized,
    W: Write,
{
    if let Err(err) = config.validate() {
        reporter.fatal(&err)?;
        return Err(err);
    }

    let initial = load_role(source, &config.initial, ShareRole::Initial, reporter)?;
    let updated = load_role(source, &config.updated, ShareRole::Updated, reporter)?;
    tracing::debug!("loaded initial and updated shares");

    let reconstruction = Reconstruction::from_shares(config.ring, &initial, &updated);

    let verification = match verify(
        config.ring,
        &reconstruction.u,
        &reconstruction.v,
        &reconstruction.updated,
    ) {
        Ok(verification) => verification,
        Err(err) => {
            reporter.fatal(&err)?;
            return Err(err);
        }
    };

    reporter.reconstruction(&reconstruction, &verification)?;
    reporter.verdict(&verification.verdict)?;
    Ok(verification.verdict)
}

/// Run against the directory named by `config`.
pub fn run_from_config<W: Write>(
    config: &VerifierConfig,
    reporter: &mut Reporter<W>,
) -> Result<Verdict> {
    run(config, &config.source(), reporter)
}
