use std::env;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("lexis/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Entries endpoint, the word is appended as the last path segment
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout of the HTTP transport
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl ApiConfig {
    pub fn new() -> Self {
        let base_url = env::var("DICTIONARY_API_URL").unwrap_or_else(|_| default_base_url());

        let timeout_seconds =
            timeout_from(env::var("DICTIONARY_API_TIMEOUT_SECONDS").ok().as_deref());

        let user_agent =
            env::var("DICTIONARY_API_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self {
            base_url,
            timeout_seconds,
            user_agent,
        }
    }
}

/// A zero timeout would fail every request, so it counts as unset
fn timeout_from(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse().ok())
        .filter(|&seconds: &u64| seconds > 0)
        .unwrap_or_else(default_timeout_seconds)
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}
