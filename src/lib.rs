// src/lib.rs
//! aes-cbc-facade — a thin AES-CBC facade over RustCrypto
//!
//! Features:
//! - AES-128/192/256 in CBC mode with PKCS#7 padding
//! - Text keys and IVs, with a configurable fit policy
//! - Hex-encoded random IVs from the OS CSPRNG
//! - A lazily-initialised process-wide instance
//! - Key / IV bytes held in secure-gate (zeroize-on-drop) wrappers

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use crate::config::Config;
pub use crate::core::crypto::{BlockCipherBackend, RustCryptoCbc};
pub use crate::core::{generate_iv, shared, Cryptor};
pub use crate::enums::{AesKeySize, Direction, FitPolicy};
pub use crate::error::{CipherFailure, ConfigError, FailureReason};
