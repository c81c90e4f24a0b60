// src/core/material.rs
//! Key and IV text → secret-wrapped bytes
//!
//! Keys are always the UTF-8 bytes of the text. IVs are either 32 hex
//! digits (what `generate_iv` emits) or UTF-8 text; a 16-byte UTF-8 string
//! is never 32 characters long, so the two forms cannot collide.

use crate::aliases::{IvBytes16, KeyMaterial};
use crate::consts::{IV_HEX_LEN, IV_LEN};
use crate::enums::{AesKeySize, FitPolicy};
use crate::error::CipherFailure;

/// Fit `raw` into `out` according to `policy`. Returns false on an exact-length miss.
fn fit_into(raw: &[u8], out: &mut [u8], policy: FitPolicy) -> bool {
    match policy {
        FitPolicy::Exact => {
            if raw.len() != out.len() {
                return false;
            }
            out.copy_from_slice(raw);
        }
        FitPolicy::ZeroPad => {
            let n = raw.len().min(out.len());
            out[..n].copy_from_slice(&raw[..n]);
            out[n..].fill(0);
        }
    }
    true
}

/// Derive key bytes of exactly `key_size.bytes()` from key text
pub fn derive_key(
    text: &str,
    key_size: AesKeySize,
    policy: FitPolicy,
) -> Result<KeyMaterial, CipherFailure> {
    let expected = key_size.bytes();
    let invalid = CipherFailure::InvalidKeyLength {
        expected,
        actual: text.len(),
    };
    if text.is_empty() {
        return Err(invalid);
    }

    let mut bytes = vec![0u8; expected];
    if !fit_into(text.as_bytes(), &mut bytes, policy) {
        return Err(invalid);
    }
    Ok(KeyMaterial::new(bytes))
}

/// Derive the 16 IV bytes from IV text
pub fn derive_iv(text: &str, policy: FitPolicy) -> Result<IvBytes16, CipherFailure> {
    let invalid = CipherFailure::InvalidIvLength {
        expected: IV_LEN,
        actual: text.len(),
    };
    if text.is_empty() {
        return Err(invalid);
    }

    let mut bytes = [0u8; IV_LEN];
    if decode_hex_iv(text, &mut bytes) {
        return Ok(IvBytes16::new(bytes));
    }
    if !fit_into(text.as_bytes(), &mut bytes, policy) {
        return Err(invalid);
    }
    Ok(IvBytes16::new(bytes))
}

fn decode_hex_iv(text: &str, out: &mut [u8; IV_LEN]) -> bool {
    text.len() == IV_HEX_LEN
        && text.bytes().all(|b| b.is_ascii_hexdigit())
        && hex::decode_to_slice(text, out).is_ok()
}
