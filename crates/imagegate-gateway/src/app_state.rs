//! Shared application state for the imagegate gateway.
//!
//! The composition root: compiles the policy store once (fail-fast), spawns
//! the decision-metrics task, and wires the interceptor. No globals; every
//! component is a value owned here and injected where needed.

use std::sync::Arc;

use imagegate_core::error::Result;
use imagegate_core::policy::PolicyStore;

use crate::config::GatewayConfig;
use crate::intercept::{Interceptor, PolicyInterceptor};
use crate::obs::MetricsHandle;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

struct AppStateInner {
    cfg: GatewayConfig,
    store: Arc<PolicyStore>,
    metrics: MetricsHandle,
    interceptor: Arc<dyn Interceptor>,
}

impl AppState {
    /// Build application state. Fails fast on an invalid policy so the
    /// gateway never serves with a partially compiled one.
    ///
    /// Must be called from within a tokio runtime (spawns the metrics task).
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let store = Arc::new(PolicyStore::compile(
            &cfg.policy.whitelist,
            &cfg.policy.blacklist,
            cfg.policy.default_allow,
        )?);

        let metrics = MetricsHandle::spawn();
        let interceptor: Arc<dyn Interceptor> = Arc::new(PolicyInterceptor::new(
            Arc::clone(&store),
            metrics.clone(),
        )?);

        Ok(Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                metrics,
                interceptor,
            }),
        })
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &PolicyStore {
        &self.inner.store
    }

    pub fn metrics(&self) -> &MetricsHandle {
        &self.inner.metrics
    }

    pub fn interceptor(&self) -> Arc<dyn Interceptor> {
        Arc::clone(&self.inner.interceptor)
    }
}
