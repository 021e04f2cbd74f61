use lexis_types::RecordId;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Unknown content type: {0}")]
    UnknownContentType(String),

    #[error("Content type {content_type} has no field {field}")]
    UnknownField { content_type: String, field: String },

    #[error("Field {field} is required")]
    MissingRequiredField { field: String },

    #[error("Field {field} is longer than {max_length} characters")]
    FieldTooLong { field: String, max_length: usize },

    #[error("A {content_type} record with {field} = {value:?} already exists")]
    Duplicate {
        content_type: String,
        field: String,
        value: String,
    },

    #[error("Record {0} does not exist")]
    RecordNotFound(RecordId),

    #[error("Store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store data is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
