// src/core/iv.rs
use crate::aliases::{RandomIv16, SecureConversionsExt, SecureRandomExt};

/// Generate a fresh random IV as 32 hex digits.
///
/// The bytes come from the OS CSPRNG; the text is accepted back as the
/// `iv` argument of every transform.
#[inline]
pub fn generate_iv() -> String {
    let random_iv = RandomIv16::new();
    random_iv.expose_secret().to_hex()
}
