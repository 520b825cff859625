//! Canonical liveness-proof identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A 32-byte proof hash, the natural key for proofs, votes, and blacklist
/// entries.
///
/// Capture pipelines submit the identifier as a 64-character hex string;
/// [`ProofHash::parse`] is the canonical way in and doubles as the
/// well-formedness check.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProofHash([u8; 32]);

impl ProofHash {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a 64-hex-char identifier. Rejects anything else, including
    /// uppercase-mixed strings of the wrong length and non-hex characters.
    pub fn parse(raw: &str) -> Result<Self, ProofHashError> {
        if raw.len() != 64 {
            return Err(ProofHashError::BadLength(raw.len()));
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(raw, &mut bytes).map_err(|_| ProofHashError::NotHex)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

/// Why a raw proof-hash string failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProofHashError {
    #[error("proof hash must be 64 hex chars, got {0}")]
    BadLength(usize),
    #[error("proof hash contains non-hex characters")]
    NotHex,
}

impl FromStr for ProofHash {
    type Err = ProofHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for ProofHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProofHash({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for ProofHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_hex() {
        let raw = "ab".repeat(32);
        let hash = ProofHash::parse(&raw).unwrap();
        assert_eq!(hash.to_hex(), raw);
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(
            ProofHash::parse("abcd"),
            Err(ProofHashError::BadLength(4))
        );
    }

    #[test]
    fn rejects_non_hex() {
        let raw = "zz".repeat(32);
        assert_eq!(ProofHash::parse(&raw), Err(ProofHashError::NotHex));
    }

    #[test]
    fn roundtrip_via_display() {
        let hash = ProofHash::new([7u8; 32]);
        let again = ProofHash::parse(&hash.to_hex()).unwrap();
        assert_eq!(hash, again);
    }
}
