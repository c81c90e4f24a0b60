// src/core/crypto/aes_cbc.rs
use aes::{Aes128, Aes192, Aes256};
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use super::backend::BlockCipherBackend;
use crate::consts::IV_LEN;
use crate::enums::{AesKeySize, Direction};
use crate::error::CipherFailure;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes128CbcDec = cbc::Decryptor<Aes128>;
type Aes192CbcEnc = cbc::Encryptor<Aes192>;
type Aes192CbcDec = cbc::Decryptor<Aes192>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// AES-CBC backed by the RustCrypto `aes` and `cbc` crates.
///
/// Key length is checked by `new_from_slices`; an unaligned or empty decrypt
/// input fails the unpad step and surfaces as `Primitive`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoCbc;

impl BlockCipherBackend for RustCryptoCbc {
    fn block_cipher_transform(
        &self,
        direction: Direction,
        key_size: AesKeySize,
        key: &[u8],
        iv: &[u8; IV_LEN],
        data: &[u8],
    ) -> Result<Vec<u8>, CipherFailure> {
        match direction {
            Direction::Encrypt => encrypt(key_size, key, iv, data),
            Direction::Decrypt => decrypt(key_size, key, iv, data),
        }
    }
}

fn key_length_error(key_size: AesKeySize, key: &[u8]) -> CipherFailure {
    CipherFailure::InvalidKeyLength {
        expected: key_size.bytes(),
        actual: key.len(),
    }
}

fn encrypt(
    key_size: AesKeySize,
    key: &[u8],
    iv: &[u8; IV_LEN],
    data: &[u8],
) -> Result<Vec<u8>, CipherFailure> {
    let out = match key_size {
        AesKeySize::Aes128 => Aes128CbcEnc::new_from_slices(key, iv)
            .map_err(|_| key_length_error(key_size, key))?
            .encrypt_padded_vec_mut::<Pkcs7>(data),
        AesKeySize::Aes192 => Aes192CbcEnc::new_from_slices(key, iv)
            .map_err(|_| key_length_error(key_size, key))?
            .encrypt_padded_vec_mut::<Pkcs7>(data),
        AesKeySize::Aes256 => Aes256CbcEnc::new_from_slices(key, iv)
            .map_err(|_| key_length_error(key_size, key))?
            .encrypt_padded_vec_mut::<Pkcs7>(data),
    };
    Ok(out)
}

fn decrypt(
    key_size: AesKeySize,
    key: &[u8],
    iv: &[u8; IV_LEN],
    data: &[u8],
) -> Result<Vec<u8>, CipherFailure> {
    let unpadded = match key_size {
        AesKeySize::Aes128 => Aes128CbcDec::new_from_slices(key, iv)
            .map_err(|_| key_length_error(key_size, key))?
            .decrypt_padded_vec_mut::<Pkcs7>(data),
        AesKeySize::Aes192 => Aes192CbcDec::new_from_slices(key, iv)
            .map_err(|_| key_length_error(key_size, key))?
            .decrypt_padded_vec_mut::<Pkcs7>(data),
        AesKeySize::Aes256 => Aes256CbcDec::new_from_slices(key, iv)
            .map_err(|_| key_length_error(key_size, key))?
            .decrypt_padded_vec_mut::<Pkcs7>(data),
    };
    unpadded.map_err(|_| CipherFailure::Primitive("PKCS#7 padding check failed"))
}
