//! Service config loader (strict parsing).

pub mod schema;

use std::fs;

use notekeep_core::error::{NotekeepError, Result};

pub use schema::{DatabaseSection, ServerSection, ServiceConfig};

/// Env var naming the config file.
pub const CONFIG_PATH_ENV: &str = "NOTEKEEP_CONFIG";
/// Env var overriding `database.url`.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

pub fn load_from_file(path: &str) -> Result<ServiceConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| NotekeepError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServiceConfig> {
    let cfg: ServiceConfig = serde_yaml::from_str(s)
        .map_err(|e| NotekeepError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the config path from the environment and apply env overrides.
pub fn load_from_env() -> Result<ServiceConfig> {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| "notekeep.yaml".into());
    let mut cfg = load_from_file(&path)?;
    if let Ok(url) = std::env::var(DATABASE_URL_ENV) {
        cfg.database.url = url;
        cfg.validate()?;
    }
    Ok(cfg)
}
