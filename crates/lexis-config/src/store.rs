use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("lexis-store.json")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON file holding content types and records
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn new() -> Self {
        let path = env::var("LEXIS_STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_path());

        Self { path }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
