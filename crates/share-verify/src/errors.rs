//! Error types for share verification.

use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The Result type for share verification.
pub type Result<T> = std::result::Result<T, Error>;

/// Enum encapsulating all the possible errors from this library.
///
/// Every variant is fatal to a verification run. A mismatching verdict is
/// not an error; see [`crate::Verdict`].
#[derive(Debug, Error)]
pub enum Error {
    /// A required share file does not exist.
    #[error("Missing file: {}", .path.display())]
    MissingFile {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// A share file exists but cannot be interpreted.
    #[error("Bad format in {}: {reason}", .path.display())]
    MalformedFile {
        /// Path of the offending file.
        path: PathBuf,
        /// What is wrong with it.
        #[source]
        reason: MalformedReason,
    },

    /// The reconstructed vectors do not share a common length.
    #[error("Dimension mismatch between vectors: len(u)={u} len(v)={v} len(updated)={updated}")]
    DimensionMismatch {
        /// Length of the reconstructed `u`.
        u: usize,
        /// Length of the reconstructed `v`.
        v: usize,
        /// Length of the reconstructed updated `u`.
        updated: usize,
    },

    /// The verifier configuration is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Writing the report failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Reasons for which a share file is rejected.
#[derive(Debug, Error)]
pub enum MalformedReason {
    /// Fewer than two lines remained after stripping surrounding whitespace.
    #[error("expected at least 2 lines, found {found}")]
    TooFewLines {
        /// Number of lines found.
        found: usize,
    },

    /// A token is not a signed 64-bit integer.
    #[error("line {line}: `{token}` is not an integer")]
    InvalidInteger {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        token: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// The file exists but could not be read as UTF-8 text.
    #[error("unreadable: {0}")]
    Unreadable(#[source] std::io::Error),
}

impl Error {
    /// Create a missing file error.
    pub fn missing_file<P: AsRef<Path>>(path: P) -> Self {
        Self::MissingFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a malformed file error.
    pub fn malformed<P: AsRef<Path>>(path: P, reason: MalformedReason) -> Self {
        Self::MalformedFile {
            path: path.as_ref().to_path_buf(),
            reason,
        }
    }

    /// Create a dimension mismatch error.
    pub fn dimension_mismatch(u: usize, v: usize, updated: usize) -> Self {
        Self::DimensionMismatch { u, v, updated }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Whether the error stems from the share files themselves.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MissingFile { .. } | Self::MalformedFile { .. })
    }
}
