//! Routing hierarchy identifier for DET derivation.
//!
//! RFC 9374 splits the 28-bit Hierarchy ID (HID) into a 14-bit Registered
//! Assigning Authority (RAA) and a 14-bit HHIT Domain Authority (HDA)
//! registered under it. Together they place a DET in the registry tree.

use crate::error::{DetError, Result};

/// 28-bit routing hierarchy: RAA and HDA, 14 bits each.
///
/// Construction is unchecked; [`crate::prefix::DetPrefix::encode`] calls
/// [`Hid::validate`] before any bits are packed, so out-of-range values are
/// representable but never encodable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hid {
    /// Registered Assigning Authority (14 bits).
    pub raa: u16,
    /// HHIT Domain Authority under the RAA (14 bits).
    pub hda: u16,
}

impl Hid {
    /// Largest value a 14-bit field can carry.
    pub const FIELD_MAX: u16 = 0x3FFF;

    /// Create a routing hierarchy pair.
    #[must_use]
    pub const fn new(raa: u16, hda: u16) -> Self {
        Self { raa, hda }
    }

    /// Check both fields against the 14-bit range.
    ///
    /// # Errors
    ///
    /// Returns [`DetError::InvalidRoutingContext`] naming the first field
    /// that exceeds [`Self::FIELD_MAX`].
    pub fn validate(&self) -> Result<()> {
        if self.raa > Self::FIELD_MAX {
            return Err(DetError::InvalidRoutingContext {
                field: "raa",
                value: self.raa,
                max: Self::FIELD_MAX,
            });
        }
        if self.hda > Self::FIELD_MAX {
            return Err(DetError::InvalidRoutingContext {
                field: "hda",
                value: self.hda,
                max: Self::FIELD_MAX,
            });
        }
        Ok(())
    }

    /// Combined 28-bit value, RAA in the high 14 bits.
    #[must_use]
    pub const fn to_bits(self) -> u32 {
        ((self.raa as u32) << 14) | (self.hda as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_in_range() {
        assert!(Hid::new(0, 0).validate().is_ok());
        assert!(Hid::new(16376, 20).validate().is_ok());
        assert!(Hid::new(Hid::FIELD_MAX, Hid::FIELD_MAX).validate().is_ok());
    }

    #[test]
    fn test_validate_raa_out_of_range() {
        let err = Hid::new(0x4000, 20).validate().unwrap_err();
        assert!(matches!(
            err,
            DetError::InvalidRoutingContext {
                field: "raa",
                value: 0x4000,
                max: Hid::FIELD_MAX,
            }
        ));
    }

    #[test]
    fn test_validate_hda_out_of_range() {
        let err = Hid::new(20, u16::MAX).validate().unwrap_err();
        assert!(matches!(
            err,
            DetError::InvalidRoutingContext {
                field: "hda",
                value: u16::MAX,
                max: Hid::FIELD_MAX,
            }
        ));
    }

    #[test]
    fn test_validate_reports_raa_first() {
        // Both fields bad: raa is named
        let err = Hid::new(0x4000, 0x4000).validate().unwrap_err();
        assert!(matches!(
            err,
            DetError::InvalidRoutingContext { field: "raa", .. }
        ));
    }

    #[test]
    fn test_to_bits_layout() {
        assert_eq!(Hid::new(0, 0).to_bits(), 0);
        assert_eq!(Hid::new(1, 0).to_bits(), 1 << 14);
        assert_eq!(Hid::new(0, 1).to_bits(), 1);
        assert_eq!(Hid::new(16376, 20).to_bits(), (16376 << 14) | 20);
        assert_eq!(
            Hid::new(Hid::FIELD_MAX, Hid::FIELD_MAX).to_bits(),
            0x0FFF_FFFF
        );
    }
}
