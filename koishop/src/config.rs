//! Client configuration, loaded from the environment with sensible defaults.

use std::env;
use std::time::Duration;

/// Default API base URL for local development.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Default per-request timeout. Every call gets a finite bound so a dead
/// server cannot pin a screen's loading state forever.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are joined onto.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// When true, the comment handler rejects a second comment on a koi the
    /// current user has already reviewed. Whether the server also enforces
    /// this is an open product question, so it stays a policy flag here.
    pub single_comment_per_koi: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            single_comment_per_koi: true,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        let base_url = env::var("KOISHOP_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let timeout_secs = env::var("KOISHOP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let single_comment_per_koi = env::var("KOISHOP_SINGLE_COMMENT")
            .map(|v| v != "0")
            .unwrap_or(true);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            single_comment_per_koi,
        }
    }
}
