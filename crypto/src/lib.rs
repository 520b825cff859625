//! Cryptographic primitives for the VITAL kernel.
//!
//! - **Ed25519** for proof signing and verification against a subject's
//!   registered verification key
//! - **Blake2b-256** for deriving proof identifiers from capture payloads

pub mod hash;
pub mod keys;
pub mod sign;

pub use hash::{blake2b_256, blake2b_256_multi, derive_proof_hash};
pub use keys::{generate_keypair, keypair_from_private, keypair_from_seed, public_from_private};
pub use sign::{sign_message, verify_signature};
