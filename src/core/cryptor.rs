// src/core/cryptor.rs
//! The cipher facade
//!
//! A [`Cryptor`] holds no mutable state: two fit policies and a backend.
//! Every call derives its key / IV bytes locally and drops (zeroes) them
//! before returning, so one instance can be shared freely across threads.

use std::sync::OnceLock;

use tracing::{debug, warn};

use super::crypto::{BlockCipherBackend, RustCryptoCbc};
use super::iv::generate_iv;
use super::material::{derive_iv, derive_key};
use super::Result;
use crate::config::Config;
use crate::consts::AES_BLOCK_SIZE;
use crate::enums::{AesKeySize, Direction, FitPolicy};
use crate::error::CipherFailure;

#[derive(Debug, Clone)]
pub struct Cryptor<B = RustCryptoCbc> {
    backend: B,
    key_fit: FitPolicy,
    iv_fit: FitPolicy,
}

impl Cryptor<RustCryptoCbc> {
    /// RustCrypto backend, exact-length keys and IVs
    pub fn new() -> Self {
        Self::with_backend(RustCryptoCbc)
    }

    /// RustCrypto backend with the fit policies from `config`
    pub fn with_config(config: &Config) -> Self {
        Self::new().with_fit(config.material.key_fit, config.material.iv_fit)
    }
}

impl Default for Cryptor<RustCryptoCbc> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BlockCipherBackend> Cryptor<B> {
    pub fn with_backend(backend: B) -> Self {
        Cryptor {
            backend,
            key_fit: FitPolicy::default(),
            iv_fit: FitPolicy::default(),
        }
    }

    pub fn with_fit(mut self, key_fit: FitPolicy, iv_fit: FitPolicy) -> Self {
        self.key_fit = key_fit;
        self.iv_fit = iv_fit;
        self
    }

    pub fn key_fit(&self) -> FitPolicy {
        self.key_fit
    }

    pub fn iv_fit(&self) -> FitPolicy {
        self.iv_fit
    }

    /// One-shot AES-CBC / PKCS#7 transform of `data`.
    ///
    /// Encrypt output is always `len + (16 - len % 16)` bytes. Decrypt input
    /// must be a positive multiple of 16 bytes.
    ///
    /// `key` is always taken as its UTF-8 bytes. `iv` is hex-decoded when it
    /// is exactly 32 ASCII hex digits (the form [`generate_iv`] returns), so
    /// such text is never used as 32 raw bytes; any other `iv` is UTF-8.
    pub fn transform(
        &self,
        direction: Direction,
        key: &str,
        key_size: AesKeySize,
        iv: &str,
        data: &[u8],
    ) -> Result<Vec<u8>> {
        debug!(
            ?direction,
            key_bits = key_size.bits(),
            input_len = data.len(),
            "cipher transform"
        );

        let result = self.run(direction, key, key_size, iv, data);
        match &result {
            Ok(out) => debug!(?direction, output_len = out.len(), "cipher transform done"),
            Err(err) => warn!(?direction, reason = ?err.reason(), "cipher transform failed: {err}"),
        }
        result
    }

    fn run(
        &self,
        direction: Direction,
        key: &str,
        key_size: AesKeySize,
        iv: &str,
        data: &[u8],
    ) -> Result<Vec<u8>> {
        let key_bytes = derive_key(key, key_size, self.key_fit)?;
        let iv_bytes = derive_iv(iv, self.iv_fit)?;

        let unaligned = data.is_empty() || data.len() % AES_BLOCK_SIZE != 0;
        if direction == Direction::Decrypt && unaligned {
            return Err(CipherFailure::InvalidInputLength { len: data.len() });
        }

        self.backend.block_cipher_transform(
            direction,
            key_size,
            key_bytes.expose_secret().as_slice(),
            iv_bytes.expose_secret(),
            data,
        )
    }

    #[inline]
    pub fn encrypt(
        &self,
        key: &str,
        key_size: AesKeySize,
        iv: &str,
        data: &[u8],
    ) -> Result<Vec<u8>> {
        self.transform(Direction::Encrypt, key, key_size, iv, data)
    }

    #[inline]
    pub fn decrypt(
        &self,
        key: &str,
        key_size: AesKeySize,
        iv: &str,
        data: &[u8],
    ) -> Result<Vec<u8>> {
        self.transform(Direction::Decrypt, key, key_size, iv, data)
    }

    /// See [`generate_iv`]
    #[inline]
    pub fn generate_iv(&self) -> String {
        generate_iv()
    }
}

static SHARED: OnceLock<Cryptor> = OnceLock::new();

/// The process-wide instance, built on first access with default policies
pub fn shared() -> &'static Cryptor {
    SHARED.get_or_init(Cryptor::new)
}
