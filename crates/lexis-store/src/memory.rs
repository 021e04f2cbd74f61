use lexis_types::RecordId;
use tokio::sync::RwLock;

use crate::state::StoreState;
use crate::{ContentType, Record, RecordAttributes, RecordStore, StoreError};

/// Store kept entirely in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<StoreState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl RecordStore for MemoryStore {
    async fn find_one(
        &self,
        content_type: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Record>, StoreError> {
        self.state.read().await.find_one(content_type, field, value)
    }

    async fn find_all(
        &self,
        content_type: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Record>, StoreError> {
        self.state.read().await.find_all(content_type, field, value)
    }

    async fn load(&self, id: RecordId) -> Result<Option<Record>, StoreError> {
        Ok(self.state.read().await.load(id))
    }

    async fn create(&self, attributes: RecordAttributes) -> Result<Record, StoreError> {
        self.state.read().await.create(attributes)
    }

    async fn save(&self, record: &mut Record) -> Result<RecordId, StoreError> {
        let id = self.state.write().await.save(record)?;
        record.id = Some(id);
        Ok(id)
    }

    async fn content_type(&self, id: &str) -> Result<Option<ContentType>, StoreError> {
        Ok(self.state.read().await.content_type(id))
    }

    async fn save_content_type(&self, content_type: ContentType) -> Result<(), StoreError> {
        self.state.write().await.save_content_type(content_type);
        Ok(())
    }
}
