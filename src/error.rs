// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

/// The single failure kind surfaced by every cipher call.
///
/// The variant is the reason. A failed call leaves the facade untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherFailure {
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("invalid IV length: expected {expected} bytes, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("invalid input length for decrypt: {len} is not a positive multiple of the block size")]
    InvalidInputLength { len: usize },

    #[error("unsupported AES key size: {bits} bits")]
    UnsupportedKeySize { bits: u32 },

    #[error("cipher primitive failed: {0}")]
    Primitive(&'static str),
}

/// Stable, payload-free reason code for a [`CipherFailure`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureReason {
    InvalidKeyLength,
    InvalidIvLength,
    InvalidInputLength,
    UnsupportedKeySize,
    Primitive,
}

impl CipherFailure {
    pub fn reason(&self) -> FailureReason {
        match self {
            CipherFailure::InvalidKeyLength { .. } => FailureReason::InvalidKeyLength,
            CipherFailure::InvalidIvLength { .. } => FailureReason::InvalidIvLength,
            CipherFailure::InvalidInputLength { .. } => FailureReason::InvalidInputLength,
            CipherFailure::UnsupportedKeySize { .. } => FailureReason::UnsupportedKeySize,
            CipherFailure::Primitive(_) => FailureReason::Primitive,
        }
    }
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
}
