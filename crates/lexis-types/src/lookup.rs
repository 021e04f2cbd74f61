use serde::{Deserialize, Serialize};

/// One entry of the dictionary API response array
///
/// Only the parts needed to build a definitions block are modelled, every
/// other field of the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLookupResult {
    pub word: Option<String>,
    pub phonetic: Option<String>,
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: Option<String>,
    pub definitions: Vec<DefinitionEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionEntry {
    pub definition: Option<String>,
    pub example: Option<String>,
}

impl Meaning {
    pub fn new(part_of_speech: &str, definitions: &[&str]) -> Self {
        Self {
            part_of_speech: Some(part_of_speech.to_string()),
            definitions: definitions
                .iter()
                .map(|text| DefinitionEntry {
                    definition: Some(text.to_string()),
                    example: None,
                })
                .collect(),
        }
    }
}
