//! Runtime settings read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

pub const HTTP_ADDR_VAR: &str = "CLUB_SITE_HTTP_ADDR";
pub const SUBMISSIONS_VAR: &str = "CLUB_SITE_SUBMISSIONS";
pub const CONTENT_VAR: &str = "CLUB_SITE_CONTENT";

const DEFAULT_SUBMISSIONS: &str = "submissions.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub http_addr: SocketAddr,
    pub submissions_path: PathBuf,
    /// JSON export of CMS entries, if any.
    pub content_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            http_addr: default_addr(),
            submissions_path: PathBuf::from(DEFAULT_SUBMISSIONS),
            content_path: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        if let Some(raw) = lookup(HTTP_ADDR_VAR) {
            match raw.trim().parse::<SocketAddr>() {
                Ok(addr) => settings.http_addr = addr,
                Err(err) => log::warn!(
                    "ignoring {HTTP_ADDR_VAR}={raw}: {err}; using {}",
                    settings.http_addr
                ),
            }
        }

        if let Some(raw) = lookup(SUBMISSIONS_VAR).filter(|v| !v.trim().is_empty()) {
            settings.submissions_path = PathBuf::from(raw.trim());
        }

        settings.content_path = lookup(CONTENT_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(|v| PathBuf::from(v.trim()));

        settings
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 3000))
}
