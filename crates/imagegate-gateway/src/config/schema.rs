use serde::Deserialize;

use imagegate_core::error::{ImageGateError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    #[serde(default)]
    pub gateway: GatewaySection,

    pub policy: PolicySection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        self.gateway.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct GatewaySection {
    /// Listen address for the daemon-facing authorization-plugin API.
    #[serde(default = "default_plugin_listen")]
    pub plugin_listen: String,

    /// Listen address for the ops endpoints (`/metrics`, `/healthz`).
    #[serde(default = "default_metrics_listen")]
    pub metrics_listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            plugin_listen: default_plugin_listen(),
            metrics_listen: default_metrics_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        for (field, addr) in [
            ("gateway.pluginListen", &self.plugin_listen),
            ("gateway.metricsListen", &self.metrics_listen),
        ] {
            if addr.parse::<std::net::SocketAddr>().is_err() {
                return Err(ImageGateError::Config(format!(
                    "{field} must be a valid HOST:PORT address, got {addr:?}"
                )));
            }
        }
        Ok(())
    }
}

fn default_plugin_listen() -> String {
    "127.0.0.1:9165".into()
}
fn default_metrics_listen() -> String {
    "127.0.0.1:9166".into()
}

/// Whitelist/blacklist rules plus the default policy, in the same shape the
/// admin writes them (`defaultAllow`, ordered pattern lists).
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct PolicySection {
    #[serde(default)]
    pub whitelist: Vec<String>,

    #[serde(default)]
    pub blacklist: Vec<String>,

    #[serde(default)]
    pub default_allow: bool,
}
