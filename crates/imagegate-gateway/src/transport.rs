//! Authorization-plugin HTTP surface.
//!
//! The daemon activates the plugin once (`/Plugin.Activate`) and then POSTs
//! one `AuthZReq` per intercepted API call. The response phase (`AuthZRes`)
//! is a pass-through: policy acts on the request phase only.

use axum::extract::State;
use axum::Json;
use bytes::Bytes;

use imagegate_core::protocol::{ActivateResponse, AuthzRequest, AuthzResponse};

use crate::app_state::AppState;

pub async fn activate() -> Json<ActivateResponse> {
    Json(ActivateResponse::authz())
}

pub async fn authz_req(State(state): State<AppState>, body: Bytes) -> Json<AuthzResponse> {
    let req: AuthzRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            // Undecodable envelope: denied at the edge, no decision recorded
            // (the request never reached operation resolution).
            tracing::warn!(error = %e, "undecodable authorization request");
            return Json(AuthzResponse::denied(
                "authorization request could not be decoded",
            ));
        }
    };

    Json(state.interceptor().intercept(&req).await)
}

pub async fn authz_res() -> Json<AuthzResponse> {
    Json(AuthzResponse::allowed())
}
