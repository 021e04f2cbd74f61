mod client;

pub use client::DictionaryApiClient;

use lexis_types::RawLookupResult;

/// Separator between formatted definition lines
const LINE_SEPARATOR: &str = "\n\n";
const UNKNOWN_PART_OF_SPEECH: &str = "unknown";

/// Word lookup against an external dictionary
#[async_trait::async_trait]
pub trait DictionaryLookup: Send + Sync {
    /// Fetch the first entry for `word`, `Ok(None)` when the dictionary has none
    async fn fetch(&self, word: &str) -> Result<Option<RawLookupResult>, LookupError>;

    /// Render a lookup result as a definitions block
    fn transform(&self, result: &RawLookupResult) -> String {
        format_definitions(result)
    }
}

/// One `"<part-of-speech>: <definition>"` line per non-empty definition,
/// meanings and definitions kept in response order, lines separated by a
/// blank line. Empty when nothing usable is present.
pub fn format_definitions(result: &RawLookupResult) -> String {
    let mut lines = Vec::new();

    for meaning in &result.meanings {
        let part_of_speech = meaning
            .part_of_speech
            .as_deref()
            .filter(|pos| !pos.trim().is_empty())
            .unwrap_or(UNKNOWN_PART_OF_SPEECH);

        for entry in &meaning.definitions {
            match entry.definition.as_deref() {
                Some(text) if !text.is_empty() => {
                    lines.push(format!("{part_of_speech}: {text}"));
                }
                _ => {}
            }
        }
    }

    lines.join(LINE_SEPARATOR)
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("External API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("External API request failed: HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}
