//! Host URL normalization.
//!
//! Turns whatever the user passed via `--host`, `TEMPIC_HOST` or the config
//! file into a clean `scheme://host[:port]` base that endpoint paths can be
//! appended to. Pure string work; nothing here touches the network.

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// Scheme, host characters and optional port; the remainder must be a path,
/// query or fragment (which is dropped) or nothing at all.
const HOST_PATTERN: &str = r"^(https?://[A-Za-z0-9_.\-]+(?::[0-9]+)?)(?:[/?#].*)?$";

fn host_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(HOST_PATTERN).expect("host pattern is valid"))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    #[error("no host given")]
    Empty,
    #[error("not a valid http(s) base URL: {0:?}")]
    Malformed(String),
}

/// Validated base URL of a TemPIC instance, e.g. `https://tempic.example.com:1234`.
///
/// Never carries a trailing slash or path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostUrl(String);

impl HostUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Appends an absolute endpoint path (`/api.php?...`) to the base.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path)
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extracts `scheme://host[:port]` from `raw`, discarding any path or query.
pub fn resolve_host(raw: &str) -> Result<HostUrl, HostError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(HostError::Empty);
    }
    host_regex()
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| HostUrl(m.as_str().to_string()))
        .ok_or_else(|| HostError::Malformed(raw.to_string()))
}
