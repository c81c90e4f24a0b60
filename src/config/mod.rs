// src/config/mod.rs
//! Configuration for aes-cbc-facade
//!
//! Host-driven: the host hands over TOML text or a file path and passes
//! the resulting [`Config`] to `Cryptor::with_config`. Nothing is read
//! from the environment.

pub use app::{from_toml_str, load_from_path, Config, Material};

mod app;
mod defaults;
