//! Configuration and validation for share verification.

use std::path::{Path, PathBuf};

use share_util::Ring;

use crate::loader::DirectorySource;
use crate::{Error, Result};

/// Directory holding the share files when no other root is given.
pub const DEFAULT_ROOT: &str = "output";

/// File names of the two parties' shares for one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePairNames {
    /// Share file of party 0.
    pub party0: String,
    /// Share file of party 1.
    pub party1: String,
}

impl SharePairNames {
    /// Create a pair of file names.
    pub fn new<S: Into<String>>(party0: S, party1: S) -> Self {
        Self {
            party0: party0.into(),
            party1: party1.into(),
        }
    }

    /// Names of the initial share files.
    pub fn initial() -> Self {
        Self::new("share_p0_0.txt", "share_p1_0.txt")
    }

    /// Names of the updated share files.
    pub fn updated() -> Self {
        Self::new("updated_share_p0_0.txt", "updated_share_p1_0.txt")
    }

    fn validate(&self, role: &str) -> Result<()> {
        if self.party0.trim().is_empty() || self.party1.trim().is_empty() {
            return Err(Error::invalid_config(format!(
                "{role} share file names must not be empty"
            )));
        }
        if self.party0 == self.party1 {
            return Err(Error::invalid_config(format!(
                "{role} share files of both parties are both named {}",
                self.party0
            )));
        }
        Ok(())
    }
}

/// Where the share files live and how their values are combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Directory containing the four share files.
    pub root: PathBuf,
    /// Initial share files.
    pub initial: SharePairNames,
    /// Updated share files.
    pub updated: SharePairNames,
    /// Arithmetic used for reconstruction and the update rule.
    pub ring: Ring,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            initial: SharePairNames::initial(),
            updated: SharePairNames::updated(),
            ring: Ring::default(),
        }
    }
}

impl VerifierConfig {
    /// Read the share files from `root` instead of [`DEFAULT_ROOT`].
    pub fn with_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.root = root.as_ref().to_path_buf();
        self
    }

    /// Use `ring` for reconstruction and verification.
    pub fn with_ring(mut self, ring: Ring) -> Self {
        self.ring = ring;
        self
    }

    /// Validates the file names.
    pub fn validate(&self) -> Result<()> {
        self.initial.validate("initial")?;
        self.updated.validate("updated")?;
        Ok(())
    }

    /// A share source reading from the configured root directory.
    pub fn source(&self) -> DirectorySource {
        DirectorySource::new(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use share_util::Modulus;

    #[test]
    fn default_layout() {
        let config = VerifierConfig::default();
        assert_eq!(config.root, PathBuf::from("output"));
        assert_eq!(config.initial.party0, "share_p0_0.txt");
        assert_eq!(config.initial.party1, "share_p1_0.txt");
        assert_eq!(config.updated.party0, "updated_share_p0_0.txt");
        assert_eq!(config.updated.party1, "updated_share_p1_0.txt");
        assert_eq!(config.ring, Ring::Wrapping64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_setters() {
        let ring = Ring::Modular(Modulus::new(97).unwrap());
        let config = VerifierConfig::default()
            .with_root("/tmp/shares")
            .with_ring(ring);
        assert_eq!(config.root, PathBuf::from("/tmp/shares"));
        assert_eq!(config.ring, ring);
        assert_eq!(config.source().root(), Path::new("/tmp/shares"));
    }

    #[test]
    fn invalid_names() {
        let mut config = VerifierConfig::default();
        config.initial.party1 = " ".to_string();
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = VerifierConfig::default();
        config.updated = SharePairNames::new("same.txt", "same.txt");
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }
}
