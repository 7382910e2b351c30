//! Authorization-plugin wire contract (JSON).
//!
//! The daemon POSTs one [`AuthzRequest`] per intercepted API call and expects
//! an [`AuthzResponse`] back. Field names are PascalCase on the wire; the
//! request body arrives base64-encoded, exactly as the daemon sends it. The
//! request envelope tolerates extra daemon fields (the daemon's surface is
//! not ours to restrict).

use serde::{Deserialize, Serialize};

/// Request-phase authorization payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthzRequest {
    /// Authenticated user, when the daemon knows one.
    #[serde(default)]
    pub user: String,
    /// HTTP method of the intercepted call.
    pub request_method: String,
    /// Request URI of the intercepted call (path + query).
    pub request_uri: String,
    /// Base64-encoded request body, when one was sent.
    #[serde(default)]
    pub request_body: Option<String>,
}

/// Authorization verdict returned to the daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthzResponse {
    /// Whether the intercepted call may proceed.
    pub allow: bool,
    /// Human-readable reason, shown to the API client on denial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    /// Plugin-side failure, distinct from a policy denial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<String>,
}

impl AuthzResponse {
    pub fn allowed() -> Self {
        Self {
            allow: true,
            msg: None,
            err: None,
        }
    }

    pub fn denied(msg: impl Into<String>) -> Self {
        Self {
            allow: false,
            msg: Some(msg.into()),
            err: None,
        }
    }
}

/// Handshake response for `/Plugin.Activate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ActivateResponse {
    /// Plugin capabilities; always `["authz"]`.
    pub implements: [&'static str; 1],
}

impl ActivateResponse {
    pub fn authz() -> Self {
        Self {
            implements: ["authz"],
        }
    }
}
