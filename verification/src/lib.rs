//! Liveness-proof validation.
//!
//! A proof is acceptable only if it passes the full fail-fast chain: shape,
//! subject identity, score, signature against the subject's registered key,
//! freshness, non-replay, and blacklist membership. The first failing check
//! is the rejection reason; rejection never mutates state.

pub mod error;
pub mod validator;

pub use error::ValidationError;
pub use validator::{ProofValidator, ValidationContext};
