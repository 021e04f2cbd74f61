use serde::{Deserialize, Serialize};

use self::api::ApiConfig;
use self::log::LogConfig;
use self::store::StoreConfig;

pub mod api;
pub mod log;
pub mod store;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub store: StoreConfig,
    pub log: LogConfig,
}

impl Config {
    /// Build the configuration from the process environment
    pub fn new() -> Self {
        Config {
            api: ApiConfig::new(),
            store: StoreConfig::new(),
            log: LogConfig::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::log::LogFormat;

    #[test]
    fn partial_document_falls_back_to_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"api": {"timeout_seconds": 5}, "log": {"format": "json"}}"#)
                .unwrap();

        assert_eq!(config.api.timeout_seconds, 5);
        assert_eq!(config.api.base_url, api::DEFAULT_API_URL);
        assert!(config.api.user_agent.starts_with("lexis/"));
        assert_eq!(config.store.path, PathBuf::from("lexis-store.json"));
        assert_eq!(config.log.format, LogFormat::Json);
    }
}
