use crate::config::AllowlistConfig;

/// The set of (owner, repo) pairs permitted to be relayed. Resolved once at
/// startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Allowlist {
    entries: Vec<(String, String)>,
}

impl Allowlist {
    /// Resolves the allowlist from config: either the static entry list or a
    /// single environment variable read at startup. An unset variable in env
    /// mode yields an empty allowlist, which rejects everything.
    pub fn from_config(cfg: &AllowlistConfig) -> Self {
        let spec = match cfg.source.as_str() {
            "env" => std::env::var(&cfg.env_var).unwrap_or_default(),
            _ => cfg.entries.join(","),
        };
        Self::parse(&spec)
    }

    /// Parses `owner1:repo1,owner2:repo2`. No whitespace trimming. An entry
    /// without a colon becomes `(entry, "")`, which never matches; segments
    /// past the second are dropped, so `a:b:c` permits `(a, b)`.
    pub fn parse(spec: &str) -> Self {
        let mut entries = Vec::new();
        for entry in spec.split(',') {
            if entry.is_empty() {
                continue;
            }
            let mut parts = entry.split(':');
            let owner = parts.next().unwrap_or("");
            let repo = parts.next().unwrap_or("");
            entries.push((owner.to_string(), repo.to_string()));
        }
        Self { entries }
    }

    /// Exact, case-sensitive match on both owner and repo. Entries with an
    /// empty repo (colon-less config entries) never match.
    pub fn contains(&self, owner: &str, repo: &str) -> bool {
        self.entries
            .iter()
            .any(|(o, r)| !r.is_empty() && o == owner && r == repo)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
