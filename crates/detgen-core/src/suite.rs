//! HHIT suite identifiers (RFC 9374 Section 8.2.2).
//!
//! The suite names the hash and signing algorithm pair a DET is bound to.
//! It occupies the 8-bit OGA field of the ORCHID prefix and the algorithm
//! number of the published HIP RR.

use core::fmt;

/// HHIT suite for DET derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HhitSuite {
    /// ED25519/cSHAKE128 (HHIT Suite ID 5).
    Ed25519CShake128,
}

impl HhitSuite {
    /// Return the numeric OGA identifier for prefix encoding.
    #[must_use]
    pub fn oga_id(self) -> u8 {
        match self {
            HhitSuite::Ed25519CShake128 => 5,
        }
    }

    /// Parse a suite from its OGA identifier.
    ///
    /// Returns `None` for unknown identifiers.
    #[must_use]
    pub fn from_oga_id(id: u8) -> Option<Self> {
        match id {
            5 => Some(HhitSuite::Ed25519CShake128),
            _ => None,
        }
    }

    /// Return all defined suites.
    #[must_use]
    pub fn all() -> &'static [HhitSuite] {
        &[HhitSuite::Ed25519CShake128]
    }
}

impl fmt::Display for HhitSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HhitSuite::Ed25519CShake128 => write!(f, "ED25519/cSHAKE128 (5)"),
        }
    }
}
