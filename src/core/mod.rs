// src/core/mod.rs
pub mod crypto;
pub mod cryptor;
pub mod iv;
pub mod material;

pub use cryptor::{shared, Cryptor};
pub use iv::generate_iv;
pub use material::{derive_iv, derive_key};

pub type Result<T> = std::result::Result<T, crate::error::CipherFailure>;
