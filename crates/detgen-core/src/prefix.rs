//! ORCHID prefix encoding and decoding (8 bytes).
//!
//! The DET prefix is a fixed 64-bit structure (RFC 9374 Section 8.2.1):
//!
//! ```text
//!  Bits    Width  Field
//!  63..36  28     IPv6 prefix literal (0x2001003, the 2001:30::/28 block)
//!  35..22  14     RAA
//!  21..8   14     HDA
//!  7..0    8      OGA / HHIT Suite ID
//! ```
//!
//! Fields are packed big-endian with shifts and masks on a `u64`; nothing
//! passes through text formatting, so a value either fits its slot or
//! encoding fails.

use crate::error::Result;
use crate::hid::Hid;
use crate::suite::HhitSuite;

/// 28-bit IPv6 prefix literal allocated for DETs (2001:30::/28).
pub const PREFIX_LITERAL: u32 = 0x2001003;

/// 64-bit DET prefix: literal, routing hierarchy, suite tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DetPrefix([u8; 8]);

impl DetPrefix {
    /// Size of an encoded prefix in bytes.
    pub const SIZE: usize = 8;

    /// Pack the prefix fields into 8 bytes, most significant bit first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DetError::InvalidRoutingContext`] if either HID
    /// field exceeds 14 bits. The check runs before packing; out-of-range
    /// values are never truncated into the layout.
    pub fn encode(hid: Hid, suite: HhitSuite) -> Result<Self> {
        hid.validate()?;
        let value = (u64::from(PREFIX_LITERAL) << 36)
            | (u64::from(hid.raa) << 22)
            | (u64::from(hid.hda) << 8)
            | u64::from(suite.oga_id());
        Ok(Self(value.to_be_bytes()))
    }

    /// Create from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 8] {
        self.0
    }

    /// Get a reference to the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// The 28-bit prefix literal.
    #[must_use]
    pub fn literal(&self) -> u32 {
        (self.value() >> 36) as u32
    }

    /// The routing hierarchy fields.
    #[must_use]
    pub fn hid(&self) -> Hid {
        let v = self.value();
        Hid {
            raa: ((v >> 22) & 0x3FFF) as u16,
            hda: ((v >> 8) & 0x3FFF) as u16,
        }
    }

    /// The 8-bit OGA / suite identifier.
    #[must_use]
    pub fn oga_id(&self) -> u8 {
        (self.value() & 0xFF) as u8
    }

    fn value(&self) -> u64 {
        u64::from_be_bytes(self.0)
    }
}

impl core::fmt::Display for DetPrefix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
