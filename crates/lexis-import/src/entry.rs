use lexis_store::{FieldDefinition, FieldKind, Record, RecordAttributes};
use lexis_types::{DICTIONARY_ENTRY, FIELD_DEFINITIONS, FIELD_WORD, WordRecord};

/// Longest word the `word` field accepts
pub const WORD_MAX_LENGTH: usize = 255;

/// Field layout of the dictionary entry content type
pub fn fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition {
            name: FIELD_WORD.to_string(),
            label: "Word".to_string(),
            kind: FieldKind::String {
                max_length: WORD_MAX_LENGTH,
            },
            required: true,
            unique: true,
        },
        FieldDefinition {
            name: FIELD_DEFINITIONS.to_string(),
            label: "Definitions".to_string(),
            kind: FieldKind::TextLong,
            required: false,
            unique: false,
        },
    ]
}

pub fn attributes(entry: &WordRecord) -> RecordAttributes {
    RecordAttributes::new(DICTIONARY_ENTRY, &entry.title)
        .field(FIELD_WORD, entry.word.as_str())
        .field(FIELD_DEFINITIONS, entry.definitions.as_str())
        .published(entry.published)
}

pub fn word_record(record: &Record) -> WordRecord {
    WordRecord {
        id: record.id,
        word: record.get(FIELD_WORD).unwrap_or_default().to_string(),
        title: record.title.clone(),
        definitions: record.get(FIELD_DEFINITIONS).unwrap_or_default().to_string(),
        published: record.published,
    }
}
