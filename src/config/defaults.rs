// src/config/defaults.rs
use crate::config::app::Material;
use crate::enums::FitPolicy;

pub const DEFAULT_KEY_FIT: FitPolicy = FitPolicy::Exact;
pub const DEFAULT_IV_FIT: FitPolicy = FitPolicy::Exact;

pub fn default_material() -> Material {
    Material {
        key_fit: DEFAULT_KEY_FIT,
        iv_fit: DEFAULT_IV_FIT,
    }
}

pub fn default_key_fit() -> FitPolicy {
    DEFAULT_KEY_FIT
}

pub fn default_iv_fit() -> FitPolicy {
    DEFAULT_IV_FIT
}
