// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! Key and IV bytes live in these wrappers for the length of one call and are
//! zeroed on drop.

pub use secure_gate::{
    dynamic_alias, fixed_alias, random_alias, SecureConversionsExt, SecureRandomExt,
};

// Fixed-size secrets
fixed_alias!(IvBytes16, 16); // one AES block

// Dynamic secrets
dynamic_alias!(KeyMaterial, Vec<u8>); // 16, 24 or 32 bytes depending on AesKeySize

// Random secrets
random_alias!(RandomIv16, 16);
