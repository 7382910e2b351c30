//! imagegate gateway binary.
//!
//! - Loads the JSON policy config (first CLI argument, default imagegate.json)
//! - Compiles the policy store and spawns the decision-metrics task
//! - Serves the authorization-plugin API and the ops endpoints

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use imagegate_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "imagegate.json".to_string());
    let cfg = config::load_from_file(&config_path).expect("config load failed");

    let plugin_listen: SocketAddr = cfg
        .gateway
        .plugin_listen
        .parse()
        .expect("gateway.pluginListen must be a valid SocketAddr");
    let metrics_listen: SocketAddr = cfg
        .gateway
        .metrics_listen
        .parse()
        .expect("gateway.metricsListen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg).expect("policy compile failed");

    tracing::info!(
        whitelist = state.store().whitelist_len(),
        blacklist = state.store().blacklist_len(),
        default_allow = state.store().default_allow(),
        "imagegate starting"
    );

    let plugin_app = router::build_plugin_router(state.clone());
    let ops_app = router::build_ops_router(state);

    let plugin_listener = tokio::net::TcpListener::bind(plugin_listen)
        .await
        .expect("failed to bind plugin listener");
    let ops_listener = tokio::net::TcpListener::bind(metrics_listen)
        .await
        .expect("failed to bind metrics listener");

    tracing::info!(%plugin_listen, %metrics_listen, "imagegate-gateway listening");

    let (plugin_res, ops_res) = tokio::join!(
        async { axum::serve(plugin_listener, plugin_app).await },
        async { axum::serve(ops_listener, ops_app).await },
    );
    plugin_res.expect("plugin server failed");
    ops_res.expect("metrics server failed");
}
