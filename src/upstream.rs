use std::time::Duration;

use axum::body::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

use crate::config::UpstreamConfig;
use crate::dto::requests::ReleaseAssetRequest;
use crate::error::RelayError;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A release asset fetched in full. Bodies are buffered, not streamed.
#[derive(Debug, Clone)]
pub struct FetchedAsset {
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(cfg: &UpstreamConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        let base_url = cfg.base_url.trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// `{base}/{owner}/{repo}/releases/download/{tag}/{filename}`, values
    /// interpolated as-is with no percent-encoding.
    pub fn asset_url(&self, req: &ReleaseAssetRequest) -> String {
        format!(
            "{}/{}/{}/releases/download/{}/{}",
            self.base_url, req.owner, req.repo, req.tag, req.filename
        )
    }

    /// Single GET, no retries. A non-success status becomes
    /// `RelayError::UpstreamStatus` with the body discarded; any transport
    /// failure (including the timeout) maps to `RelayError::Transport`.
    pub async fn fetch_asset(&self, req: &ReleaseAssetRequest) -> Result<FetchedAsset, RelayError> {
        let url = self.asset_url(req);
        debug!(%url, "fetching release asset");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            debug!(%url, %status, "upstream returned non-success");
            return Err(RelayError::UpstreamStatus(status));
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.bytes().await?;

        Ok(FetchedAsset { content_type, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamConfig;
    use crate::dto::requests::ReleaseAssetRequest;

    fn client(base_url: &str) -> UpstreamClient {
        UpstreamClient::new(&UpstreamConfig {
            base_url: base_url.to_string(),
            ..UpstreamConfig::default()
        })
        .unwrap()
    }

    fn request() -> ReleaseAssetRequest {
        ReleaseAssetRequest {
            owner: "pr3y".to_string(),
            repo: "Bruce".to_string(),
            tag: "v1.0".to_string(),
            filename: "firmware.bin".to_string(),
        }
    }

    #[test]
    fn url_follows_the_release_download_template() {
        let url = client("https://github.com").asset_url(&request());
        assert_eq!(url, "https://github.com/pr3y/Bruce/releases/download/v1.0/firmware.bin");
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        let url = client("http://127.0.0.1:9999/").asset_url(&request());
        assert_eq!(url, "http://127.0.0.1:9999/pr3y/Bruce/releases/download/v1.0/firmware.bin");
    }

    #[test]
    fn values_are_interpolated_unencoded() {
        let mut req = request();
        req.tag = "v 1".to_string();
        let url = client("https://github.com").asset_url(&req);
        assert!(url.contains("/releases/download/v 1/firmware.bin"));
    }
}
