#![crate_name = "share_verify"]
#![crate_type = "lib"]
#![warn(missing_docs, unused_imports)]

//! Verification of an additively shared vector update.
//!
//! Two parties each hold additive shares of integer vectors `u` and `v`, and
//! shares of an updated vector they computed jointly. This crate reconstructs
//! the plaintext vectors from both parties' share files and checks that the
//! updated vector equals `u[i] + v[i] * (1 - <u, v>)` at every index.

/// Configuration of a verification run.
pub mod config;
/// Error types.
pub mod errors;
/// Loading of share files.
pub mod loader;
/// The verification run.
pub mod pipeline;
/// Output of a verification run.
pub mod report;
/// The update rule and its verification.
pub mod verifier;

pub use config::{SharePairNames, VerifierConfig};
pub use errors::{Error, MalformedReason, Result};
pub use loader::{
    load, parse_shares, DirectorySource, MemorySource, PartyShares, SharePair, ShareRole,
    ShareSource,
};
pub use pipeline::{run, run_from_config, ExitStatus, Reconstruction};
pub use report::Reporter;
pub use share_util::{combine, dot, Modulus, Ring};
pub use verifier::{expected_update, verify, Mismatch, Verdict, Verification};
