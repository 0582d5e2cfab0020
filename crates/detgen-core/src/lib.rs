//! DET derivation core.
//!
//! Implements the RFC 9374 DRIP Entity Tag construction: a 64-bit ORCHID
//! prefix (IPv6 literal, routing hierarchy, HHIT suite tag) bound to a
//! Host Identity through a keyed cSHAKE128 digest, plus the DNS artifacts
//! that publish the result.
//!
//! The pipeline is pure and synchronous. Given the same Host Identity,
//! routing hierarchy, and suite, [`Det::derive`] always produces the same
//! 128-bit tag; nothing here touches the filesystem, network, or clock.
//!
//! # Example
//!
//! ```
//! use detgen_core::{Det, Hid, HhitSuite, HostIdentity};
//!
//! let key = [0x42u8; 32];
//! let hi = HostIdentity::from_public_key(&key);
//! let det = Det::derive(Hid::new(16376, 20), HhitSuite::Ed25519CShake128, &hi).unwrap();
//! assert_eq!(det.to_hex().len(), 32);
//! ```

pub mod det;
pub mod error;
pub mod hash;
pub mod hid;
pub mod host_identity;
pub mod prefix;
pub mod records;
pub mod suite;

pub use det::{Det, ParseDetError};
pub use error::{DetError, Result};
pub use hash::{DET_CONTEXT_ID, ORCHID_HASH_LEN, orchid_hash};
pub use hid::Hid;
pub use host_identity::{HI_HEADER, HostIdentity};
pub use prefix::{DetPrefix, PREFIX_LITERAL};
pub use suite::HhitSuite;
