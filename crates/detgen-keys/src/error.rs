//! Error types for key handling

use thiserror::Error;

/// Errors that can occur generating, saving, or loading key material.
#[derive(Debug, Error)]
pub enum KeyError {
    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PKCS#8 private key encode/decode error
    #[error("PKCS#8 error: {0}")]
    Pkcs8(#[from] pkcs8::Error),

    /// SPKI public key encode/decode error
    #[error("SPKI error: {0}")]
    Spki(#[from] pkcs8::spki::Error),
}

/// Result type for key operations
pub type Result<T> = std::result::Result<T, KeyError>;
