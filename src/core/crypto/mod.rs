// src/core/crypto/mod.rs
//! Pure cryptographic operations — no I/O, no configuration
//!
//! The facade only ever talks to [`BlockCipherBackend`]. Everything here
//! works exclusively on in-memory buffers.
mod aes_cbc;
mod backend;

pub use aes_cbc::RustCryptoCbc;
pub use backend::BlockCipherBackend;
