//! Host Identity encoding (RFC 9374 Section 3.4.1.1).
//!
//! A DET binds to a Host Identity: a fixed 4-byte EdDSA algorithm envelope
//! followed by the raw public key. The full encoding feeds the ORCHID hash
//! and is what gets published (base64) in the HIP RR.

use base64::Engine;

/// 4-byte algorithm envelope prepended to the raw public key.
pub const HI_HEADER: [u8; 4] = [0x00, 0x01, 0x00, 0x00];

/// Host Identity: algorithm envelope plus raw public key bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity(Vec<u8>);

impl HostIdentity {
    /// Wrap a raw public key in the EdDSA envelope.
    #[must_use]
    pub fn from_public_key(public_key: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(HI_HEADER.len() + public_key.len());
        bytes.extend_from_slice(&HI_HEADER);
        bytes.extend_from_slice(public_key);
        Self(bytes)
    }

    /// Full encoded identity, envelope included.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The raw public key without the envelope.
    #[must_use]
    pub fn public_key(&self) -> &[u8] {
        &self.0[HI_HEADER.len()..]
    }

    /// Contiguous lowercase hex of the full identity.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Base64 of the full identity, as published in a HIP RR.
    #[must_use]
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.0)
    }
}
