//! DNS artifact rendering for DETs.
//!
//! Formats the registration FQDN, the HIP and TLSA resource-record
//! presentation blocks, and the `.dat` side file consumed by provisioning
//! scripts. Everything here is a pure function of already-derived values.

use core::fmt;

use crate::det::Det;
use crate::error::{DetError, Result};
use crate::hid::Hid;
use crate::host_identity::HostIdentity;
use crate::prefix::PREFIX_LITERAL;
use crate::suite::HhitSuite;

/// Root zone under which DET registrations are published.
pub const DET_ZONE: &str = "det.uas.";

/// Length of an ed25519 SubjectPublicKeyInfo DER encoding.
const SPKI_DER_LEN: usize = 44;

/// Registration FQDN for a DET.
///
/// Shape: `<orchid hash hex>.<suite %02x>.<raa %04x>.<hda %04x>.2001003.det.uas.`
#[must_use]
pub fn fqdn(det: &Det, suite: HhitSuite, hid: Hid) -> String {
    format!(
        "{}.{:02x}.{:04x}.{:04x}.{:x}.{}",
        hex::encode(det.orchid_hash()),
        suite.oga_id(),
        hid.raa,
        hid.hda,
        PREFIX_LITERAL,
        DET_ZONE
    )
}

/// HIP resource record presentation block for a DET and its Host Identity.
///
/// Carries the suite number, the contiguous DET hex, and the base64 Host
/// Identity on a continuation line.
#[must_use]
pub fn hip_rr(det: &Det, suite: HhitSuite, hi: &HostIdentity) -> String {
    format!(
        "IN  HIP ( {} {}\n        {} )",
        suite.oga_id(),
        det.to_hex(),
        hi.to_base64()
    )
}

/// TLSA resource record presentation block for an SPKI DER public key.
///
/// The record is usage 3 (DANE-EE), selector 1 (SPKI), matching type 0
/// (full data), with the DER hex split across two 44-character lines.
///
/// # Errors
///
/// Returns [`DetError::InvariantViolation`] unless the DER is exactly 44
/// bytes, the size of an ed25519 SubjectPublicKeyInfo. Any other length
/// means the key is not the suite's algorithm.
pub fn tlsa_rr(spki_der: &[u8]) -> Result<String> {
    if spki_der.len() != SPKI_DER_LEN {
        return Err(DetError::InvariantViolation {
            what: "SPKI DER length",
            expected: SPKI_DER_LEN,
            actual: spki_der.len(),
        });
    }
    let hex = hex::encode(spki_der);
    Ok(format!(
        "IN  TLSA 3 1 0 ( {}\n        {} )",
        &hex[..SPKI_DER_LEN],
        &hex[SPKI_DER_LEN..]
    ))
}

/// Contents of the `.dat` side file written next to a key pair.
///
/// The format is consumed by provisioning scripts and is byte-stable:
///
/// ```text
/// DETofC=0x<det hex>
/// HIofC=0x<hi hex>
/// pkeyname="<key label>"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatRecord {
    /// The derived DET.
    pub det: Det,
    /// The Host Identity the DET binds.
    pub host_identity: HostIdentity,
    /// Label of the key files on disk.
    pub key_label: String,
}

impl DatRecord {
    /// Render the side-file text. Each of the three lines ends in a
    /// newline; field order and quoting never change.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "DETofC=0x{}\nHIofC=0x{}\npkeyname=\"{}\"\n",
            self.det.to_hex(),
            self.host_identity.to_hex(),
            self.key_label
        )
    }
}

impl fmt::Display for DatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY_HEX: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
    const TEST_SPKI_HEX: &str =
        "302a300506032b6570032100d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

    fn test_hi() -> HostIdentity {
        HostIdentity::from_public_key(&hex::decode(TEST_KEY_HEX).unwrap())
    }

    fn test_det() -> Det {
        Det::derive(Hid::new(16376, 20), HhitSuite::Ed25519CShake128, &test_hi()).unwrap()
    }

    #[test]
    fn test_fqdn() {
        let name = fqdn(&test_det(), HhitSuite::Ed25519CShake128, Hid::new(16376, 20));
        assert_eq!(name, "8f27c2626c100940.05.3ff8.0014.2001003.det.uas.");
    }

    #[test]
    fn test_fqdn_small_raa_zero_padded() {
        let hid = Hid::new(10, 20);
        let det = Det::derive(hid, HhitSuite::Ed25519CShake128, &test_hi()).unwrap();
        let name = fqdn(&det, HhitSuite::Ed25519CShake128, hid);
        assert_eq!(name, "b74b6dd3e35a3c64.05.000a.0014.2001003.det.uas.");
    }

    #[test]
    fn test_hip_rr() {
        let rr = hip_rr(&test_det(), HhitSuite::Ed25519CShake128, &test_hi());
        assert_eq!(
            rr,
            "IN  HIP ( 5 2001003ffe0014058f27c2626c100940\n        \
             AAEAANdamAGCsQq31Uv+08lkBzoO4XLz2qYjJa8CGmj3B1Ea )"
        );
    }

    #[test]
    fn test_tlsa_rr() {
        let der = hex::decode(TEST_SPKI_HEX).unwrap();
        let rr = tlsa_rr(&der).unwrap();
        assert_eq!(
            rr,
            "IN  TLSA 3 1 0 ( 302a300506032b6570032100d75a980182b10ab7d54b\n        \
             fed3c964073a0ee172f3daa62325af021a68f707511a )"
        );
    }

    #[test]
    fn test_tlsa_rr_rejects_wrong_length() {
        for len in [0usize, 32, 43, 45, 88] {
            let err = tlsa_rr(&vec![0u8; len]).unwrap_err();
            assert!(
                matches!(
                    err,
                    DetError::InvariantViolation {
                        what: "SPKI DER length",
                        ..
                    }
                ),
                "len {len}"
            );
        }
    }

    #[test]
    fn test_dat_record_bytes() {
        let record = DatRecord {
            det: test_det(),
            host_identity: test_hi(),
            key_label: "keyfile".to_string(),
        };
        assert_eq!(
            record.render(),
            "DETofC=0x2001003ffe0014058f27c2626c100940\n\
             HIofC=0x00010000d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a\n\
             pkeyname=\"keyfile\"\n"
        );
    }

    #[test]
    fn test_dat_record_display_matches_render() {
        let record = DatRecord {
            det: test_det(),
            host_identity: test_hi(),
            key_label: "uav7".to_string(),
        };
        assert_eq!(format!("{record}"), record.render());
        assert!(record.render().ends_with('\n'));
        assert_eq!(record.render().lines().count(), 3);
    }
}
