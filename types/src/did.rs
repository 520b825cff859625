//! Decentralized identifier type.
//!
//! Every citizen and validator is identified by a DID of the form
//! `did:<method>:<jurisdiction>:<id>`. The jurisdiction segment drives fee
//! routing and is always re-derived from the DID itself, never taken from a
//! client-supplied tag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed DID. Construction goes through [`Did::parse`], so a held `Did`
/// is always well-formed.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Did {
    raw: String,
    method_end: usize,
    jurisdiction_end: usize,
}

impl Did {
    /// Parse `did:<method>:<jurisdiction>:<id>`.
    ///
    /// All three segments after the `did` scheme must be non-empty. The local
    /// id may itself contain colons.
    pub fn parse(raw: &str) -> Result<Self, DidError> {
        let mut parts = raw.splitn(4, ':');
        let scheme = parts.next().unwrap_or_default();
        if scheme != "did" {
            return Err(DidError::BadScheme(raw.to_string()));
        }
        let method = parts.next().unwrap_or_default();
        let jurisdiction = parts.next().unwrap_or_default();
        let id = parts.next().unwrap_or_default();
        if method.is_empty() || jurisdiction.is_empty() || id.is_empty() {
            return Err(DidError::EmptySegment(raw.to_string()));
        }
        let method_end = 4 + method.len();
        let jurisdiction_end = method_end + 1 + jurisdiction.len();
        Ok(Self {
            raw: raw.to_string(),
            method_end,
            jurisdiction_end,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The DID method (e.g. `vital` in `did:vital:np:alice`).
    pub fn method(&self) -> &str {
        &self.raw[4..self.method_end]
    }

    /// The jurisdiction segment — the source of truth for fee routing.
    pub fn jurisdiction(&self) -> &str {
        &self.raw[self.method_end + 1..self.jurisdiction_end]
    }

    /// The local identifier (everything after the jurisdiction).
    pub fn local_id(&self) -> &str {
        &self.raw[self.jurisdiction_end + 1..]
    }
}

/// Why a raw DID string failed to parse.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DidError {
    #[error("not a did: scheme: {0}")]
    BadScheme(String),
    #[error("DID has an empty segment: {0}")]
    EmptySegment(String),
}

impl FromStr for Did {
    type Err = DidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Did {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
