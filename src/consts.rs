// src/consts.rs
//! Shared constants — cipher parameters and defaults

/// AES block size in bytes (independent of key size)
pub const AES_BLOCK_SIZE: usize = 16;

/// CBC IV length — always one block
pub const IV_LEN: usize = AES_BLOCK_SIZE;

/// Length of the hex text produced by `generate_iv`
pub const IV_HEX_LEN: usize = IV_LEN * 2;
