// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: cipher direction,
//! AES key size and how key / IV text is fitted to its byte length.

use serde::{Deserialize, Serialize};

use crate::error::CipherFailure;

/// Which way a buffer goes through the cipher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// AES key-size class. The discriminant is the key length in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AesKeySize {
    Aes128 = 16,
    Aes192 = 24,
    Aes256 = 32,
}

impl AesKeySize {
    /// Key length in bytes
    #[inline]
    pub const fn bytes(self) -> usize {
        self as usize
    }

    /// Key length in bits
    #[inline]
    pub const fn bits(self) -> u32 {
        (self as u32) * 8
    }

    pub fn from_bits(bits: u32) -> Result<Self, CipherFailure> {
        match bits {
            128 => Ok(AesKeySize::Aes128),
            192 => Ok(AesKeySize::Aes192),
            256 => Ok(AesKeySize::Aes256),
            _ => Err(CipherFailure::UnsupportedKeySize { bits }),
        }
    }
}

impl TryFrom<u32> for AesKeySize {
    type Error = CipherFailure;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

/// How key / IV text whose UTF-8 length differs from the required byte
/// length is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitPolicy {
    /// Reject anything but the exact length
    #[default]
    Exact,
    /// Truncate long text, right-pad short text with zero bytes
    ZeroPad,
}
