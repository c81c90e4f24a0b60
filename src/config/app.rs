// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

use crate::enums::FitPolicy;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_material")]
    pub material: Material,
}

/// How key and IV text become bytes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Material {
    #[serde(default = "default_key_fit")]
    pub key_fit: FitPolicy,
    #[serde(default = "default_iv_fit")]
    pub iv_fit: FitPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            material: default_material(),
        }
    }
}

/// Parse config from TOML text
pub fn from_toml_str(content: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Read config from a TOML file; a missing file yields the built-in defaults
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        warn!(path = %path.display(), "config file not found, using built-in defaults");
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let conf = from_toml_str(&content)?;
    info!(path = %path.display(), ?conf, "loaded config");
    Ok(conf)
}
