//! Ed25519 message signing and verification.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use vital_types::{PrivateKey, PublicKey, Signature};

/// Sign a message with a private key, returning the signature.
pub fn sign_message(message: &[u8], private_key: &PrivateKey) -> Signature {
    let signing_key = SigningKey::from_bytes(&private_key.0);
    let sig = signing_key.sign(message);
    Signature(sig.to_bytes())
}

/// Verify a signature against a message and public key.
///
/// Returns `true` if the signature is valid, `false` otherwise. Invalid key
/// bytes and malformed signature lengths verify as `false` rather than
/// erroring, since proof signatures arrive as untrusted opaque bytes.
pub fn verify_signature(message: &[u8], signature: &[u8], public_key: &PublicKey) -> bool {
    let Ok(verifying_key) = VerifyingKey::from_bytes(&public_key.0) else {
        return false;
    };
    let Ok(sig_bytes) = <&[u8; 64]>::try_from(signature) else {
        return false;
    };
    let dalek_sig = ed25519_dalek::Signature::from_bytes(sig_bytes);
    verifying_key.verify(message, &dalek_sig).is_ok()
}
