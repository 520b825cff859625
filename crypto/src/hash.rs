//! Blake2b hashing and proof-identifier derivation.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use vital_types::ProofHash;

type Blake2b256 = Blake2b<U32>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Derive a proof identifier from the raw capture payload.
///
/// Capture pipelines are expected to submit `hex(blake2b_256(payload))` as
/// the proof hash; this helper exists so tests and provisioning tools derive
/// identifiers the same way.
pub fn derive_proof_hash(capture_payload: &[u8]) -> ProofHash {
    ProofHash::new(blake2b_256(capture_payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blake2b_deterministic() {
        let h1 = blake2b_256(b"hello vital");
        let h2 = blake2b_256(b"hello vital");
        assert_eq!(h1, h2);
    }

    #[test]
    fn blake2b_different_inputs() {
        assert_ne!(blake2b_256(b"hello"), blake2b_256(b"world"));
    }

    #[test]
    fn blake2b_multi_equivalent() {
        let single = blake2b_256(b"helloworld");
        let multi = blake2b_256_multi(&[b"hello", b"world"]);
        assert_eq!(single, multi);
    }

    #[test]
    fn derived_hash_parses_as_identifier() {
        let hash = derive_proof_hash(b"capture frame bytes");
        let parsed = ProofHash::parse(&hash.to_hex()).unwrap();
        assert_eq!(hash, parsed);
    }
}
