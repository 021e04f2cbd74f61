mod error;
mod json_file;
mod memory;
mod record;
mod schema;
mod state;

pub use error::StoreError;
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{Record, RecordAttributes};
pub use schema::{ContentType, FieldDefinition, FieldKind};

use lexis_types::RecordId;

/// Generic content storage
///
/// Records belong to a provisioned [`ContentType`] and carry their values as
/// named text fields. `create` only builds a record; nothing is stored until
/// `save`.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// First record (lowest id) of `content_type` whose `field` equals `value` exactly
    async fn find_one(
        &self,
        content_type: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Record>, StoreError>;

    /// Every record of `content_type` whose `field` equals `value`, in id order
    async fn find_all(
        &self,
        content_type: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Record>, StoreError>;

    async fn load(&self, id: RecordId) -> Result<Option<Record>, StoreError>;

    /// Build an unsaved record of a provisioned content type
    async fn create(&self, attributes: RecordAttributes) -> Result<Record, StoreError>;

    /// Validate and persist, assigning an id on first save
    async fn save(&self, record: &mut Record) -> Result<RecordId, StoreError>;

    async fn content_type(&self, id: &str) -> Result<Option<ContentType>, StoreError>;

    /// Insert or replace a content type definition
    async fn save_content_type(&self, content_type: ContentType) -> Result<(), StoreError>;
}
