//! Axum router wiring.
//!
//! Two surfaces: the authorization-plugin API (daemon-facing) and the ops
//! endpoints (scrape-facing), each bound to its own listen address.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub fn build_plugin_router(state: AppState) -> Router {
    Router::new()
        .route("/Plugin.Activate", post(transport::activate))
        .route("/AuthZPlugin.AuthZReq", post(transport::authz_req))
        .route("/AuthZPlugin.AuthZRes", post(transport::authz_res))
        .with_state(state)
}

pub fn build_ops_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
