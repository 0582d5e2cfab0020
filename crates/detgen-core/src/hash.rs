//! Keyed identifier hashing (cSHAKE128, NIST SP 800-185).
//!
//! The ORCHID digest keys cSHAKE128 with a 16-byte context identifier as
//! the customization string, absorbs the encoded prefix followed by the
//! Host Identity, and squeezes an 8-byte tag. A fresh hasher is built per
//! call; same inputs always produce the same output.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{CShake128, CShake128Core};

use crate::error::{DetError, Result};
use crate::host_identity::HostIdentity;
use crate::prefix::DetPrefix;

/// Context identifier keying DET derivation (RFC 9374 Section 3.2).
pub const DET_CONTEXT_ID: [u8; 16] = [
    0x00, 0xB5, 0xA6, 0x9C, 0x79, 0x5D, 0xF5, 0xD5, 0xF0, 0x08, 0x7F, 0x56, 0x84, 0x3F, 0x2C,
    0x40,
];

/// Number of bytes squeezed from the XOF.
pub const ORCHID_HASH_LEN: usize = 8;

/// Derive the 8-byte ORCHID hash for a prefix and Host Identity.
///
/// `context` keys the XOF and must be exactly 16 bytes. Derivation always
/// passes [`DET_CONTEXT_ID`]; any other length means the engine was
/// mis-keyed.
///
/// # Errors
///
/// Returns [`DetError::HashEngine`] if `context` is not 16 bytes. This is
/// configuration failure, not input failure; retrying cannot succeed.
pub fn orchid_hash(
    context: &[u8],
    prefix: &DetPrefix,
    hi: &HostIdentity,
) -> Result<[u8; ORCHID_HASH_LEN]> {
    if context.len() != DET_CONTEXT_ID.len() {
        return Err(DetError::HashEngine(format!(
            "context must be {} bytes, got {}",
            DET_CONTEXT_ID.len(),
            context.len()
        )));
    }

    let mut hasher = CShake128::from_core(CShake128Core::new(context));
    hasher.update(prefix.as_bytes());
    hasher.update(hi.as_bytes());

    let mut digest = [0u8; ORCHID_HASH_LEN];
    hasher.finalize_xof().read(&mut digest);
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hid::Hid;
    use crate::suite::HhitSuite;

    fn test_prefix() -> DetPrefix {
        DetPrefix::encode(Hid::new(16376, 20), HhitSuite::Ed25519CShake128).unwrap()
    }

    fn test_hi() -> HostIdentity {
        let key = hex::decode("d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a")
            .unwrap();
        HostIdentity::from_public_key(&key)
    }

    #[test]
    fn test_known_digest() {
        let digest = orchid_hash(&DET_CONTEXT_ID, &test_prefix(), &test_hi()).unwrap();
        assert_eq!(hex::encode(digest), "8f27c2626c100940");
    }

    #[test]
    fn test_deterministic() {
        let d1 = orchid_hash(&DET_CONTEXT_ID, &test_prefix(), &test_hi()).unwrap();
        let d2 = orchid_hash(&DET_CONTEXT_ID, &test_prefix(), &test_hi()).unwrap();
        assert_eq!(d1, d2);
    }

    #[test]
    fn test_prefix_changes_digest() {
        let other = DetPrefix::encode(Hid::new(10, 20), HhitSuite::Ed25519CShake128).unwrap();
        let d1 = orchid_hash(&DET_CONTEXT_ID, &test_prefix(), &test_hi()).unwrap();
        let d2 = orchid_hash(&DET_CONTEXT_ID, &other, &test_hi()).unwrap();
        assert_ne!(d1, d2);
        assert_eq!(hex::encode(d2), "b74b6dd3e35a3c64");
    }

    #[test]
    fn test_context_changes_digest() {
        let other_context = [0xAAu8; 16];
        let d1 = orchid_hash(&DET_CONTEXT_ID, &test_prefix(), &test_hi()).unwrap();
        let d2 = orchid_hash(&other_context, &test_prefix(), &test_hi()).unwrap();
        assert_ne!(d1, d2);
    }

    #[test]
    fn test_minimal_host_identity() {
        let hi = HostIdentity::from_public_key(&[0x01]);
        let digest = orchid_hash(&DET_CONTEXT_ID, &test_prefix(), &hi).unwrap();
        assert_eq!(hex::encode(digest), "dd61499255e487e6");
    }

    #[test]
    fn test_wrong_context_length_is_engine_error() {
        for bad in [&[][..], &[0u8; 15][..], &[0u8; 17][..], &[0u8; 32][..]] {
            let err = orchid_hash(bad, &test_prefix(), &test_hi()).unwrap_err();
            assert!(matches!(err, DetError::HashEngine(_)), "len {}", bad.len());
        }
    }
}
