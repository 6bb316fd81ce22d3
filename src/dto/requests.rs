use serde::Deserialize;

use crate::error::RelayError;

/// Raw query parameters. Every field is optional so extraction never rejects
/// a request before the presence check runs.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayQuery {
    pub owner: Option<String>,
    #[serde(rename = "repository")]
    pub repo: Option<String>,
    pub tag: Option<String>,
    pub filename: Option<String>,
}

/// A relay request with all four fields present and non-empty.
#[derive(Debug, Clone)]
pub struct ReleaseAssetRequest {
    pub owner: String,
    pub repo: String,
    pub tag: String,
    pub filename: String,
}

impl RelayQuery {
    /// Absent and empty both count as missing, matching the upstream
    /// contract's falsy presence check.
    pub fn validate(self) -> Result<ReleaseAssetRequest, RelayError> {
        let present = |v: Option<String>| v.filter(|s| !s.is_empty());

        match (
            present(self.owner),
            present(self.repo),
            present(self.tag),
            present(self.filename),
        ) {
            (Some(owner), Some(repo), Some(tag), Some(filename)) => Ok(ReleaseAssetRequest {
                owner,
                repo,
                tag,
                filename,
            }),
            _ => Err(RelayError::MissingParameters),
        }
    }
}
