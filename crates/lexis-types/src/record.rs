use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dictionary entry as kept in the content store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    /// `None` until the record has been saved
    pub id: Option<RecordId>,
    pub word: String,
    pub title: String,
    pub definitions: String,
    pub published: bool,
}

impl WordRecord {
    /// New published entry titled after its word
    pub fn new(word: &str, definitions: String) -> Self {
        Self {
            id: None,
            word: word.to_string(),
            title: word.to_string(),
            definitions,
            published: true,
        }
    }
}
