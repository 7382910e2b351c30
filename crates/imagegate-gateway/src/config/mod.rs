//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use imagegate_core::error::{ImageGateError, Result};

pub use schema::{GatewayConfig, GatewaySection, PolicySection};

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ImageGateError::Config(format!("read config failed: {path}: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_json::from_str(s)
        .map_err(|e| ImageGateError::Config(format!("invalid json: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
