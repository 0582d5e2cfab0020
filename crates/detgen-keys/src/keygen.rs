//! ed25519 keypair generation and public-key encoding.

use ed25519_dalek::{SigningKey, VerifyingKey};
use pkcs8::EncodePublicKey;
use rand_core::OsRng;

use crate::error::Result;

/// Generate a fresh ed25519 signing key from the OS RNG.
#[must_use]
pub fn generate() -> SigningKey {
    SigningKey::generate(&mut OsRng)
}

/// Encode a verifying key as SubjectPublicKeyInfo DER.
///
/// This is the byte form published in a TLSA record and written to the
/// `.der` key file.
///
/// # Errors
///
/// Returns an error if DER encoding fails.
pub fn public_key_der(key: &VerifyingKey) -> Result<Vec<u8>> {
    Ok(key.to_public_key_der()?.into_vec())
}
