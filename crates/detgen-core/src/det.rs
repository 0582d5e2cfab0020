//! 128-bit DRIP Entity Tag assembly and rendering.
//!
//! A DET is an ORCHID: the 64-bit encoded prefix followed by the 64-bit
//! keyed hash of that prefix and the Host Identity. The same 16 bytes
//! render three ways: contiguous hex, colon-grouped IPv6 form, and the
//! ip6.arpa reverse-lookup name.

use core::fmt;

use crate::error::{DetError, Result};
use crate::hash::{self, DET_CONTEXT_ID, ORCHID_HASH_LEN};
use crate::hid::Hid;
use crate::host_identity::HostIdentity;
use crate::prefix::DetPrefix;
use crate::suite::HhitSuite;

/// Error type for parsing hex-encoded DETs
#[derive(Debug, thiserror::Error)]
pub enum ParseDetError {
    /// Invalid hexadecimal encoding
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Invalid length for a 128-bit tag
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Expected number of bytes
        expected: usize,
        /// Actual number of bytes
        actual: usize,
    },
}

/// 128-bit DRIP Entity Tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Det([u8; 16]);

impl Det {
    /// Size of a DET in bytes.
    pub const SIZE: usize = 16;

    /// Derive a DET from routing context, suite, and Host Identity.
    ///
    /// Runs the full pipeline: prefix encoding, keyed hash under
    /// [`DET_CONTEXT_ID`], assembly.
    ///
    /// # Errors
    ///
    /// Returns [`DetError::InvalidRoutingContext`] if `hid` has an
    /// out-of-range field. The hash engine is never invoked in that case.
    pub fn derive(hid: Hid, suite: HhitSuite, hi: &HostIdentity) -> Result<Self> {
        let prefix = DetPrefix::encode(hid, suite)?;
        let digest = hash::orchid_hash(&DET_CONTEXT_ID, &prefix, hi)?;
        Self::from_parts(prefix.as_bytes(), &digest)
    }

    /// Assemble a DET from an encoded prefix and an ORCHID hash.
    ///
    /// # Errors
    ///
    /// Returns [`DetError::InvariantViolation`] unless `prefix` is exactly
    /// 8 bytes and `digest` is exactly 8 bytes.
    pub fn from_parts(prefix: &[u8], digest: &[u8]) -> Result<Self> {
        if prefix.len() != DetPrefix::SIZE {
            return Err(DetError::InvariantViolation {
                what: "prefix length",
                expected: DetPrefix::SIZE,
                actual: prefix.len(),
            });
        }
        if digest.len() != ORCHID_HASH_LEN {
            return Err(DetError::InvariantViolation {
                what: "orchid hash length",
                expected: ORCHID_HASH_LEN,
                actual: digest.len(),
            });
        }
        let mut bytes = [0u8; Self::SIZE];
        bytes[..DetPrefix::SIZE].copy_from_slice(prefix);
        bytes[DetPrefix::SIZE..].copy_from_slice(digest);
        Ok(Self(bytes))
    }

    /// Create from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Get a reference to the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// The encoded prefix half.
    #[must_use]
    pub fn prefix(&self) -> DetPrefix {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.0[..8]);
        DetPrefix::from_bytes(bytes)
    }

    /// The ORCHID hash half.
    #[must_use]
    pub fn orchid_hash(&self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.0[8..]);
        bytes
    }

    /// Contiguous lowercase hex (32 characters).
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Colon-grouped IPv6 form: eight groups of four hex digits.
    #[must_use]
    pub fn to_colon_hex(&self) -> String {
        self.to_string()
    }

    /// Reverse-lookup name: all 32 nibbles in reverse order, dot-separated,
    /// rooted at `ip6.arpa.`.
    #[must_use]
    pub fn to_reverse_name(&self) -> String {
        let hex = self.to_hex();
        let mut out = String::with_capacity(hex.len() * 2 + 9);
        for nibble in hex.chars().rev() {
            out.push(nibble);
            out.push('.');
        }
        out.push_str("ip6.arpa.");
        out
    }

    /// Parse a DET from hex, accepting contiguous or colon-grouped forms,
    /// with an optional `0x` prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid hexadecimal or does not
    /// decode to exactly 16 bytes.
    pub fn from_hex(input: &str) -> std::result::Result<Self, ParseDetError> {
        let input = input.trim();
        let input = input
            .strip_prefix("0x")
            .or_else(|| input.strip_prefix("0X"))
            .unwrap_or(input);
        let compact: String = input.chars().filter(|c| *c != ':').collect();
        let bytes = hex::decode(compact)?;
        if bytes.len() != Self::SIZE {
            return Err(ParseDetError::InvalidLength {
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        let mut out = [0u8; Self::SIZE];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }
}

impl fmt::Display for Det {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..8 {
            if i > 0 {
                write!(f, ":")?;
            }
            let group = u16::from_be_bytes([self.0[2 * i], self.0[2 * i + 1]]);
            write!(f, "{group:04x}")?;
        }
        Ok(())
    }
}
