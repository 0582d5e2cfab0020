//! Key-file persistence.
//!
//! A key label maps to three files in one directory: `<label>prv.pem`
//! (PKCS#8 private key), `<label>pub.pem` (SPKI public key), and
//! `<label>pub.der` (the same SPKI, raw DER). Downstream tooling reads
//! the DER file when building TLSA records.

use std::fs;
use std::path::{Path, PathBuf};

use ed25519_dalek::SigningKey;
use pkcs8::{DecodePrivateKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rand_core::OsRng;
use tracing::debug;

use crate::error::Result;

/// Paths of the three key files sharing one label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFileSet {
    /// PKCS#8 private key PEM.
    pub private_pem: PathBuf,
    /// SubjectPublicKeyInfo public key PEM.
    pub public_pem: PathBuf,
    /// SubjectPublicKeyInfo public key DER.
    pub public_der: PathBuf,
}

impl KeyFileSet {
    /// File paths for a key label under `dir`.
    #[must_use]
    pub fn new(dir: &Path, label: &str) -> Self {
        Self {
            private_pem: dir.join(format!("{label}prv.pem")),
            public_pem: dir.join(format!("{label}pub.pem")),
            public_der: dir.join(format!("{label}pub.der")),
        }
    }
}

/// Write the private PEM, public PEM, and public DER for a signing key.
///
/// A non-empty `passphrase` produces an encrypted PKCS#8 private PEM;
/// an empty one writes plain PKCS#8.
///
/// # Errors
///
/// Returns an error if PEM/DER encoding fails or any file cannot be
/// written.
pub fn save_keypair(
    dir: &Path,
    label: &str,
    key: &SigningKey,
    passphrase: &str,
) -> Result<KeyFileSet> {
    let files = KeyFileSet::new(dir, label);

    let private_pem = if passphrase.is_empty() {
        key.to_pkcs8_pem(LineEnding::LF)?
    } else {
        key.to_pkcs8_encrypted_pem(OsRng, passphrase.as_bytes(), LineEnding::LF)?
    };
    fs::write(&files.private_pem, private_pem.as_bytes())?;
    debug!(path = %files.private_pem.display(), "wrote private key PEM");

    let public = key.verifying_key();
    let public_pem = public.to_public_key_pem(LineEnding::LF)?;
    fs::write(&files.public_pem, public_pem.as_bytes())?;
    debug!(path = %files.public_pem.display(), "wrote public key PEM");

    let public_der = public.to_public_key_der()?;
    fs::write(&files.public_der, public_der.as_bytes())?;
    debug!(path = %files.public_der.display(), "wrote public key DER");

    Ok(files)
}

/// Load a signing key from a PKCS#8 private PEM.
///
/// `passphrase` must match how the file was written: empty for plain
/// PKCS#8, the original passphrase for encrypted.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the PEM does not decode
/// to an ed25519 private key under the given passphrase.
pub fn load_signing_key(path: &Path, passphrase: &str) -> Result<SigningKey> {
    let pem = fs::read_to_string(path)?;
    let key = if passphrase.is_empty() {
        SigningKey::from_pkcs8_pem(&pem)?
    } else {
        SigningKey::from_pkcs8_encrypted_pem(&pem, passphrase.as_bytes())?
    };
    debug!(path = %path.display(), "loaded private key PEM");
    Ok(key)
}
