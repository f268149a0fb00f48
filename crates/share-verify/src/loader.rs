//! Reading of share files.
//!
//! A share file holds one party's shares of the two vectors `u` and `v`: the
//! first line is the share of `u`, the second the share of `v`, each as
//! whitespace-separated signed integers. Whitespace around the whole text is
//! ignored, as is anything after the second line, so leading blank lines do
//! not count. An empty second line followed by more text is an empty share.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::SharePairNames;
use crate::errors::MalformedReason;
use crate::{Error, Result};

/// One party's shares of `u` and `v`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyShares {
    /// Share of `u`.
    pub u: Vec<i64>,
    /// Share of `v`.
    pub v: Vec<i64>,
}

/// The shares of both parties for one role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharePair {
    /// Shares held by party 0.
    pub party0: PartyShares,
    /// Shares held by party 1.
    pub party1: PartyShares,
}

/// Which set of share files is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareRole {
    /// Shares of the vectors before the update.
    Initial,
    /// Shares produced by the update.
    Updated,
}

impl fmt::Display for ShareRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareRole::Initial => f.write_str("initial"),
            ShareRole::Updated => f.write_str("updated"),
        }
    }
}

/// A place share files can be loaded from.
pub trait ShareSource {
    /// Load the share file called `name`.
    fn load(&self, name: &str) -> Result<PartyShares>;

    /// Load both parties' files, stopping at the first failure.
    fn load_pair(&self, names: &SharePairNames) -> Result<SharePair> {
        let party0 = self.load(&names.party0)?;
        let party1 = self.load(&names.party1)?;
        Ok(SharePair { party0, party1 })
    }
}

/// Share files stored in a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source reading files under `root`.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// The directory files are read from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ShareSource for DirectorySource {
    fn load(&self, name: &str) -> Result<PartyShares> {
        load(self.root.join(name))
    }
}

/// Share files held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the file `name`.
    pub fn insert<N: Into<String>, C: Into<String>>(&mut self, name: N, contents: C) {
        self.files.insert(name.into(), contents.into());
    }

    /// Builder-style [`MemorySource::insert`].
    pub fn with_file<N: Into<String>, C: Into<String>>(mut self, name: N, contents: C) -> Self {
        self.insert(name, contents);
        self
    }

    /// Remove the file `name`, if present.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.files.remove(name)
    }
}

impl ShareSource for MemorySource {
    fn load(&self, name: &str) -> Result<PartyShares> {
        let contents = self.files.get(name).ok_or_else(|| Error::missing_file(name))?;
        parse_shares(contents).map_err(|reason| Error::malformed(name, reason))
    }
}

/// Load a share file from disk.
pub fn load<P: AsRef<Path>>(path: P) -> Result<PartyShares> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(Error::missing_file(path)),
        Err(e) => return Err(Error::malformed(path, MalformedReason::Unreadable(e))),
    };
    let shares = parse_shares(&contents).map_err(|reason| Error::malformed(path, reason))?;
    tracing::debug!(
        path = %path.display(),
        u_len = shares.u.len(),
        v_len = shares.v.len(),
        "loaded share file"
    );
    Ok(shares)
}

/// Parse the contents of a share file.
pub fn parse_shares(contents: &str) -> std::result::Result<PartyShares, MalformedReason> {
    let contents = contents.trim();
    let mut lines = contents.lines();
    match (lines.next(), lines.next()) {
        (Some(u), Some(v)) => Ok(PartyShares {
            u: parse_line(u, 1)?,
            v: parse_line(v, 2)?,
        }),
        _ => Err(MalformedReason::TooFewLines {
            found: contents.lines().count(),
        }),
    }
}

fn parse_line(line: &str, number: usize) -> std::result::Result<Vec<i64>, MalformedReason> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|source| MalformedReason::InvalidInteger {
                    line: number,
                    token: token.to_string(),
                    source,
                })
        })
        .collect()
}
