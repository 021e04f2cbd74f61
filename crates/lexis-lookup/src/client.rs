use std::time::Duration;

use lexis_config::api::ApiConfig;
use lexis_types::RawLookupResult;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::StatusCode;

use crate::{DictionaryLookup, LookupError};

/// Characters left as-is in the word path segment
const WORD_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

/// Client for the Free Dictionary entries endpoint
#[derive(Clone)]
pub struct DictionaryApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl DictionaryApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Client with the configured endpoint, timeout and user agent
    pub fn from_config(config: &ApiConfig) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    /// Entry URL for `word`
    pub fn word_url(&self, word: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            utf8_percent_encode(word, WORD_SEGMENT)
        )
    }
}

#[async_trait::async_trait]
impl DictionaryLookup for DictionaryApiClient {
    async fn fetch(&self, word: &str) -> Result<Option<RawLookupResult>, LookupError> {
        // No entry can exist for a blank word
        if word.trim().is_empty() {
            tracing::info!("Word not found in external API: {word:?}");
            return Ok(None);
        }

        let url = self.word_url(word);
        tracing::debug!("GET {url}");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Failed to fetch word from API: {word}. Error: {e}");
                return Err(e.into());
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::info!("Word not found in external API: {word}");
            return Ok(None);
        }

        if !status.is_success() {
            tracing::error!("Failed to fetch word from API: {word}. Error: HTTP {status}");
            return Err(LookupError::Status { status, url });
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read API response for {word}: {e}");
            LookupError::from(e)
        })?;

        let entry = first_entry(&body);
        if entry.is_none() {
            tracing::info!("No usable entry in API response for: {word}");
        }

        Ok(entry)
    }
}

/// First element of the response array, `None` for anything else
fn first_entry(body: &[u8]) -> Option<RawLookupResult> {
    let data: serde_json::Value = serde_json::from_slice(body).ok()?;
    let first = data.as_array()?.first()?.clone();

    serde_json::from_value(first).ok()
}
