use std::fs;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub listen_addr: String,
    pub log_level: String,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub allowlist: AllowlistConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            telemetry: TelemetryConfig::default(),
            allowlist: AllowlistConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AllowlistConfig {
    /// "static" | "env"
    #[serde(default = "AllowlistConfig::default_source")]
    pub source: String,
    /// `owner:repo` pairs used in static mode.
    #[serde(default = "AllowlistConfig::default_entries")]
    pub entries: Vec<String>,
    /// Environment variable holding `owner1:repo1,owner2:repo2` in env mode.
    #[serde(default = "AllowlistConfig::default_env_var")]
    pub env_var: String,
}

impl Default for AllowlistConfig {
    fn default() -> Self {
        Self {
            source: Self::default_source(),
            entries: Self::default_entries(),
            env_var: Self::default_env_var(),
        }
    }
}

impl AllowlistConfig {
    fn default_source() -> String {
        "static".to_string()
    }

    fn default_entries() -> Vec<String> {
        vec!["pr3y:Bruce".to_string(), "bmorcelli:Launcher".to_string()]
    }

    fn default_env_var() -> String {
        "RELAY_ALLOWED_REPOS".to_string()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "UpstreamConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "UpstreamConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl UpstreamConfig {
    fn default_base_url() -> String {
        "https://github.com".to_string()
    }

    fn default_timeout_secs() -> u64 {
        30
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default)]
    pub json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self { json: false }
    }
}

#[derive(Debug, Clone)]
pub struct Args {
    pub config: Option<String>,
}

impl Args {
    pub fn parse() -> Self {
        let mut config: Option<String> = None;
        let mut it = std::env::args().skip(1);
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "--config" => {
                    if let Some(v) = it.next() {
                        config = Some(v);
                    }
                }
                _ => {}
            }
        }
        Self { config }
    }
}

pub fn load_config(path: Option<&str>) -> Result<AppConfig> {
    match path {
        None => Ok(AppConfig::default()),
        Some(p) => {
            let raw = fs::read_to_string(Path::new(p))?;
            let mut cfg: AppConfig = serde_json::from_str(&raw)
                .map_err(|e| anyhow!("invalid config json: {e}"))?;
            if cfg.listen_addr.trim().is_empty() {
                cfg.listen_addr = AppConfig::default().listen_addr;
            }
            if cfg.log_level.trim().is_empty() {
                cfg.log_level = AppConfig::default().log_level;
            }
            Ok(cfg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_static_variant() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.allowlist.source, "static");
        assert_eq!(cfg.allowlist.entries, vec!["pr3y:Bruce", "bmorcelli:Launcher"]);
        assert_eq!(cfg.upstream.base_url, "https://github.com");
    }

    #[test]
    fn partial_config_json_fills_defaults() {
        let raw = r#"{"listen_addr":"127.0.0.1:9000","log_level":"debug","allowlist":{"source":"env"}}"#;
        let cfg: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
        assert_eq!(cfg.allowlist.source, "env");
        assert_eq!(cfg.allowlist.env_var, "RELAY_ALLOWED_REPOS");
        assert_eq!(cfg.upstream.timeout_secs, 30);
    }
}
