use std::sync::Arc;

use anyhow::Result;

use crate::allowlist::Allowlist;
use crate::config::AppConfig;
use crate::upstream::UpstreamClient;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<AppConfig>,
    pub allowlist: Arc<Allowlist>,
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(cfg: AppConfig) -> Result<Self> {
        let allowlist = Allowlist::from_config(&cfg.allowlist);
        Self::with_allowlist(cfg, allowlist)
    }

    /// Injection seam: takes an already-resolved allowlist instead of
    /// deriving one from config. Keeps tests independent of process
    /// environment state.
    pub fn with_allowlist(cfg: AppConfig, allowlist: Allowlist) -> Result<Self> {
        let upstream = UpstreamClient::new(&cfg.upstream)?;

        Ok(Self {
            cfg: Arc::new(cfg),
            allowlist: Arc::new(allowlist),
            upstream,
        })
    }
}
