use aes_cbc_facade::{AesKeySize, CipherFailure, Cryptor, Direction, FailureReason, FitPolicy};
use rand::{Rng, RngCore};

use crate::common::{setup, IV, KEY_128, KEY_192, KEY_256};

const SIZES: [(&str, AesKeySize); 3] = [
    (KEY_128, AesKeySize::Aes128),
    (KEY_192, AesKeySize::Aes192),
    (KEY_256, AesKeySize::Aes256),
];

#[test]
fn test_hello_world_scenario() {
    setup();
    let cryptor = Cryptor::new();
    let plaintext = b"Hello, World!";

    let ciphertext = cryptor
        .transform(Direction::Encrypt, KEY_128, AesKeySize::Aes128, IV, plaintext)
        .unwrap();
    assert_eq!(ciphertext.len(), 16);

    let decrypted = cryptor
        .transform(Direction::Decrypt, KEY_128, AesKeySize::Aes128, IV, &ciphertext)
        .unwrap();
    assert_eq!(decrypted.len(), 13);
    assert_eq!(decrypted.as_slice(), plaintext);
}

#[test]
fn test_roundtrip_random_plaintexts_all_key_sizes() {
    setup();
    let cryptor = Cryptor::new();
    let mut rng = rand::rng();

    for (key, size) in SIZES {
        for _ in 0..32 {
            let mut plaintext = vec![0u8; rng.random_range(0..200)];
            rng.fill_bytes(&mut plaintext);

            let ciphertext = cryptor.encrypt(key, size, IV, &plaintext).unwrap();
            let decrypted = cryptor.decrypt(key, size, IV, &ciphertext).unwrap();
            assert_eq!(plaintext, decrypted);
        }
    }
}

#[test]
fn test_empty_plaintext_roundtrips_to_one_padding_block() {
    let cryptor = Cryptor::new();
    for (key, size) in SIZES {
        let ciphertext = cryptor.encrypt(key, size, IV, b"").unwrap();
        assert_eq!(ciphertext.len(), 16);
        assert!(cryptor.decrypt(key, size, IV, &ciphertext).unwrap().is_empty());
    }
}

#[test]
fn test_ciphertext_length_law() {
    let cryptor = Cryptor::new();
    for len in 0..=64usize {
        let ciphertext = cryptor
            .encrypt(KEY_256, AesKeySize::Aes256, IV, &vec![0xA5; len])
            .unwrap();
        assert_eq!(ciphertext.len(), len + (16 - len % 16));
        assert!(ciphertext.len() > len);
        assert_eq!(ciphertext.len() % 16, 0);
    }
}

#[test]
fn test_encrypt_is_deterministic() {
    let cryptor = Cryptor::new();
    let a = cryptor.encrypt(KEY_192, AesKeySize::Aes192, IV, b"same input").unwrap();
    let b = cryptor.encrypt(KEY_192, AesKeySize::Aes192, IV, b"same input").unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_key_size_changes_ciphertext() {
    let cryptor = Cryptor::new().with_fit(FitPolicy::ZeroPad, FitPolicy::Exact);
    let a = cryptor.encrypt(KEY_128, AesKeySize::Aes128, IV, b"data").unwrap();
    let b = cryptor.encrypt(KEY_128, AesKeySize::Aes256, IV, b"data").unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_invalid_key_length() {
    let cryptor = Cryptor::new();
    let err = cryptor
        .encrypt(KEY_128, AesKeySize::Aes256, IV, b"data")
        .unwrap_err();
    assert_eq!(err.reason(), FailureReason::InvalidKeyLength);
    assert_eq!(
        err,
        CipherFailure::InvalidKeyLength {
            expected: 32,
            actual: 16
        }
    );

    let err = cryptor.encrypt("", AesKeySize::Aes128, IV, b"data").unwrap_err();
    assert_eq!(err.reason(), FailureReason::InvalidKeyLength);
}

#[test]
fn test_multibyte_key_counts_utf8_bytes() {
    let cryptor = Cryptor::new();
    // 8 chars, 16 UTF-8 bytes
    let key = "ééééééé\u{e9}";
    assert_eq!(key.len(), 16);
    let ciphertext = cryptor.encrypt(key, AesKeySize::Aes128, IV, b"data").unwrap();
    assert_eq!(
        cryptor.decrypt(key, AesKeySize::Aes128, IV, &ciphertext).unwrap(),
        b"data"
    );
}

#[test]
fn test_invalid_iv_length() {
    let cryptor = Cryptor::new();
    for iv in ["", "short", "abcdef9876543210X"] {
        let err = cryptor
            .encrypt(KEY_128, AesKeySize::Aes128, iv, b"data")
            .unwrap_err();
        assert_eq!(err.reason(), FailureReason::InvalidIvLength);
    }
}

#[test]
fn test_invalid_decrypt_input_length() {
    let cryptor = Cryptor::new();
    for len in [0usize, 1, 13, 15, 17, 33] {
        let err = cryptor
            .decrypt(KEY_128, AesKeySize::Aes128, IV, &vec![0u8; len])
            .unwrap_err();
        assert_eq!(err, CipherFailure::InvalidInputLength { len });
    }
}

#[test]
fn test_bad_padding_is_primitive_failure_and_does_not_poison() {
    let cryptor = Cryptor::new();
    // First block of an encrypted zero block decrypts to a block ending in 0x00
    let ciphertext = cryptor
        .encrypt(KEY_128, AesKeySize::Aes128, IV, &[0u8; 16])
        .unwrap();
    let err = cryptor
        .decrypt(KEY_128, AesKeySize::Aes128, IV, &ciphertext[..16])
        .unwrap_err();
    assert_eq!(err.reason(), FailureReason::Primitive);

    // The same instance still works afterwards
    let again = cryptor
        .decrypt(KEY_128, AesKeySize::Aes128, IV, &ciphertext)
        .unwrap();
    assert_eq!(again, vec![0u8; 16]);
}

#[test]
fn test_zero_pad_matches_explicitly_padded_key() {
    let padded = Cryptor::new().with_fit(FitPolicy::ZeroPad, FitPolicy::ZeroPad);
    let exact = Cryptor::new();

    let short = padded.encrypt("secret", AesKeySize::Aes128, "iv", b"payload").unwrap();
    let explicit = exact
        .encrypt(
            "secret\0\0\0\0\0\0\0\0\0\0",
            AesKeySize::Aes128,
            "iv\0\0\0\0\0\0\0\0\0\0\0\0\0\0",
            b"payload",
        )
        .unwrap();
    assert_eq!(short, explicit);

    let long = padded
        .encrypt(KEY_256, AesKeySize::Aes128, IV, b"payload")
        .unwrap();
    let truncated = exact
        .encrypt(&KEY_256[..16], AesKeySize::Aes128, IV, b"payload")
        .unwrap();
    assert_eq!(long, truncated);
}
