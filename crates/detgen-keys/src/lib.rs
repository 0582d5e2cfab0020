//! ed25519 key material for DET derivation.
//!
//! Generates signing keys and persists them as the three-file set the
//! rest of the tooling expects: PKCS#8 private PEM, SPKI public PEM, and
//! SPKI public DER under a shared label.

pub mod error;
pub mod keyfile;
pub mod keygen;

pub use ed25519_dalek::{SigningKey, VerifyingKey};
pub use error::{KeyError, Result};
pub use keyfile::{KeyFileSet, load_signing_key, save_keypair};
pub use keygen::{generate, public_key_der};
