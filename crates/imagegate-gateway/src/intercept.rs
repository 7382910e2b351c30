//! Request-phase authorization.
//!
//! Responsibilities:
//! - Resolve the intercepted URI to a policed operation (container create)
//! - Extract the image reference from the request body
//! - Classify via the compiled policy store
//! - Record exactly one decision event per policed request

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::Uri;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use regex::Regex;
use serde::Deserialize;

use imagegate_core::decision::{ReasonCode, Verdict};
use imagegate_core::error::{ImageGateError, Result};
use imagegate_core::policy::PolicyStore;
use imagegate_core::protocol::{AuthzRequest, AuthzResponse};

use crate::obs::MetricsHandle;

/// Path of the container-create API call, with an optional version prefix.
const CREATE_PATH: &str = r"^(/v[0-9.]+)?/containers/create$";

/// Authorization seam between the plugin transport and the policy core.
#[async_trait]
pub trait Interceptor: Send + Sync {
    /// Review one request-phase authorization call.
    async fn intercept(&self, req: &AuthzRequest) -> AuthzResponse;
}

/// Policy-backed interceptor: pattern classification plus decision metrics.
pub struct PolicyInterceptor {
    store: Arc<PolicyStore>,
    metrics: MetricsHandle,
    create_path: Regex,
}

impl PolicyInterceptor {
    pub fn new(store: Arc<PolicyStore>, metrics: MetricsHandle) -> Result<Self> {
        let create_path = Regex::new(CREATE_PATH)
            .map_err(|e| ImageGateError::Internal(format!("route pattern: {e}")))?;
        Ok(Self {
            store,
            metrics,
            create_path,
        })
    }

    /// Classify one request: `None` when the request is not policed (passes
    /// through unrecorded), `Some(verdict)` for container-create calls and
    /// for requests that fail URI resolution.
    fn classify(&self, req: &AuthzRequest) -> Option<Verdict> {
        let uri: Uri = match req.request_uri.parse() {
            Ok(uri) => uri,
            Err(_) => return Some(Verdict::deny(ReasonCode::UriError)),
        };

        if req.request_method != "POST" || !self.create_path.is_match(uri.path()) {
            return None;
        }

        let Some(image) = extract_image(req.request_body.as_deref()) else {
            return Some(Verdict::deny(ReasonCode::QueryError));
        };

        let verdict = self.store.evaluate(&image);
        tracing::debug!(
            image = %image,
            user = %req.user,
            reason = verdict.reason.as_label(),
            "image classified"
        );
        Some(verdict)
    }
}

#[async_trait]
impl Interceptor for PolicyInterceptor {
    async fn intercept(&self, req: &AuthzRequest) -> AuthzResponse {
        let Some(verdict) = self.classify(req) else {
            // Not a policed operation: pass through, no decision recorded.
            return AuthzResponse::allowed();
        };

        self.metrics.record(verdict.reason).await;

        match verdict.reason {
            ReasonCode::UriError => AuthzResponse::denied("request URI could not be parsed"),
            ReasonCode::QueryError => {
                AuthzResponse::denied("image reference missing from request")
            }
            ReasonCode::Blacklisted => AuthzResponse::denied("image is blacklisted"),
            ReasonCode::DefaultDeny => AuthzResponse::denied("image not whitelisted"),
            ReasonCode::Whitelisted | ReasonCode::DefaultAllow => AuthzResponse::allowed(),
        }
    }
}

/// Subset of the container-create body the policy cares about. Unknown
/// fields are the daemon's business and are ignored.
#[derive(Debug, Deserialize)]
struct CreateBody {
    #[serde(rename = "Image", default)]
    image: Option<String>,
}

/// Pull the image reference out of a base64-encoded create body.
fn extract_image(body: Option<&str>) -> Option<String> {
    let raw = BASE64.decode(body?).ok()?;
    let body: CreateBody = serde_json::from_slice(&raw).ok()?;
    body.image.filter(|s| !s.is_empty())
}
