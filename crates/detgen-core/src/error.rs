//! Error types for DET derivation

use thiserror::Error;

/// Errors that can occur while deriving or rendering a DET.
#[derive(Debug, Error)]
pub enum DetError {
    /// A routing-hierarchy field does not fit its 14-bit slot
    #[error("invalid routing context: {field} {value} exceeds 14-bit maximum {max}")]
    InvalidRoutingContext {
        /// Which field was out of range ("raa" or "hda")
        field: &'static str,
        /// The rejected value
        value: u16,
        /// Largest representable value (16383)
        max: u16,
    },

    /// The hash engine was mis-keyed; retrying cannot succeed
    #[error("hash engine misconfigured: {0}")]
    HashEngine(String),

    /// An internal length or shape assumption was violated
    #[error("invariant violated: {what}: expected {expected}, got {actual}")]
    InvariantViolation {
        /// What was being checked
        what: &'static str,
        /// Expected size or count
        expected: usize,
        /// Observed size or count
        actual: usize,
    },
}

/// Result type for DET operations
pub type Result<T> = std::result::Result<T, DetError>;
