// src/core/crypto/backend.rs
use crate::consts::IV_LEN;
use crate::enums::{AesKeySize, Direction};
use crate::error::CipherFailure;

/// One-shot AES-CBC transform with PKCS#7 padding.
///
/// Implementations receive key bytes already fitted to `key_size` (the
/// facade has also rejected empty or unaligned decrypt input) and must
/// report every failure (including a bad pad on decrypt) as a
/// [`CipherFailure`], never as an empty buffer.
pub trait BlockCipherBackend: Send + Sync {
    fn block_cipher_transform(
        &self,
        direction: Direction,
        key_size: AesKeySize,
        key: &[u8],
        iv: &[u8; IV_LEN],
        data: &[u8],
    ) -> Result<Vec<u8>, CipherFailure>;
}
