pub mod lookup;
pub mod record;

pub use lookup::{DefinitionEntry, Meaning, RawLookupResult};
pub use record::{RecordId, WordRecord};

/// Content type holding imported dictionary entries
pub const DICTIONARY_ENTRY: &str = "dictionary_entry";
pub const DICTIONARY_ENTRY_LABEL: &str = "Dictionary Entry";

pub const FIELD_WORD: &str = "word";
pub const FIELD_DEFINITIONS: &str = "definitions";
