//! Subject verification-key storage trait.

use crate::StoreError;
use vital_types::{Did, PublicKey};

/// Published Ed25519 verification keys, keyed by subject DID.
///
/// Registration happens through the host's identity-onboarding path; the
/// kernel only reads keys to check proof signatures.
pub trait SubjectKeyStore {
    fn put_subject_key(&self, subject: &Did, key: &PublicKey) -> Result<(), StoreError>;
    fn subject_key(&self, subject: &Did) -> Result<Option<PublicKey>, StoreError>;
}
