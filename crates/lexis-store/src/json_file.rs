use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use fs4::fs_std::FileExt;
use lexis_types::RecordId;

use crate::state::StoreState;
use crate::{ContentType, Record, RecordAttributes, RecordStore, StoreError};

/// Store persisted as a single pretty-printed JSON document
///
/// Every operation reads the document under a lock on a sibling `.lock`
/// file: shared for reads, exclusive for mutations. A mutation re-reads the
/// file, applies the change and replaces the file before releasing the lock,
/// so several handles or processes on one path never overwrite each other.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store at `path`, a missing file is an empty store
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self { path: path.into() };

        // Surface a corrupt document now rather than on first use
        store.read(|_| Ok(())).await?;

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&StoreState) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let path = self.path.clone();

        blocking(move || {
            if !path.exists() {
                tracing::debug!("No store at {}, reading as empty", path.display());
                return f(&StoreState::default());
            }

            let lock = open_lock(&path)?;
            FileExt::lock_shared(&lock)?;

            f(&load(&path)?)
        })
        .await
    }

    async fn update<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut StoreState) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let path = self.path.clone();

        blocking(move || {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }

            let lock = open_lock(&path)?;
            FileExt::lock_exclusive(&lock)?;

            let mut state = load(&path)?;
            let out = f(&mut state)?;
            persist(&path, &state)?;

            Ok(out)
        })
        .await
    }
}

async fn blocking<T, F>(f: F) -> Result<T, StoreError>
where
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StoreError::Io(std::io::Error::other(e)))?
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.to_path_buf().into_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// The lock lives beside the document because the document itself is
/// replaced by rename on every write.
fn open_lock(path: &Path) -> Result<File, StoreError> {
    let lock = OpenOptions::new()
        .create(true)
        .read(true)
        .write(true)
        .truncate(false)
        .open(sibling(path, ".lock"))?;

    Ok(lock)
}

fn load(path: &Path) -> Result<StoreState, StoreError> {
    match fs::read(path) {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(StoreState::default()),
        Err(e) => Err(e.into()),
    }
}

/// Write to a sibling temp file, then rename over the store
fn persist(path: &Path, state: &StoreState) -> Result<(), StoreError> {
    let data = serde_json::to_vec_pretty(state)?;
    let tmp = sibling(path, ".tmp");

    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;

    tracing::debug!("Store written to {}", path.display());
    Ok(())
}

#[async_trait::async_trait]
impl RecordStore for JsonFileStore {
    async fn find_one(
        &self,
        content_type: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Record>, StoreError> {
        let (content_type, field, value) =
            (content_type.to_string(), field.to_string(), value.to_string());
        self.read(move |state| state.find_one(&content_type, &field, &value))
            .await
    }

    async fn find_all(
        &self,
        content_type: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Record>, StoreError> {
        let (content_type, field, value) =
            (content_type.to_string(), field.to_string(), value.to_string());
        self.read(move |state| state.find_all(&content_type, &field, &value))
            .await
    }

    async fn load(&self, id: RecordId) -> Result<Option<Record>, StoreError> {
        self.read(move |state| Ok(state.load(id))).await
    }

    async fn create(&self, attributes: RecordAttributes) -> Result<Record, StoreError> {
        self.read(move |state| state.create(attributes)).await
    }

    async fn save(&self, record: &mut Record) -> Result<RecordId, StoreError> {
        let pending = record.clone();
        let id = self.update(move |state| state.save(&pending)).await?;

        record.id = Some(id);
        Ok(id)
    }

    async fn content_type(&self, id: &str) -> Result<Option<ContentType>, StoreError> {
        let id = id.to_string();
        self.read(move |state| Ok(state.content_type(&id))).await
    }

    async fn save_content_type(&self, content_type: ContentType) -> Result<(), StoreError> {
        self.update(move |state| {
            state.save_content_type(content_type);
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::{FieldDefinition, FieldKind};

    fn note_type(unique: bool) -> ContentType {
        let mut content_type = ContentType::new("note", "Note");
        content_type.fields.push(FieldDefinition {
            name: "text".to_string(),
            label: "Text".to_string(),
            kind: FieldKind::TextLong,
            required: true,
            unique,
        });
        content_type
    }

    async fn save_note(store: &JsonFileStore, text: &str) -> Result<RecordId, StoreError> {
        let mut record = store
            .create(RecordAttributes::new("note", text).field("text", text))
            .await?;
        store.save(&mut record).await
    }

    #[tokio::test]
    async fn missing_file_opens_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("store.json")).await.unwrap();

        assert!(store.content_type("note").await.unwrap().is_none());
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn records_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let id = {
            let store = JsonFileStore::open(&path).await.unwrap();
            store.save_content_type(note_type(false)).await.unwrap();
            save_note(&store, "kept on disk").await.unwrap()
        };

        let reopened = JsonFileStore::open(&path).await.unwrap();
        let record = reopened.load(id).await.unwrap().unwrap();

        assert_eq!(record.title, "kept on disk");
        assert_eq!(record.get("text"), Some("kept on disk"));
        assert_eq!(
            reopened.content_type("note").await.unwrap(),
            Some(note_type(false))
        );
    }

    #[tokio::test]
    async fn two_handles_on_one_file_keep_each_others_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let setup = JsonFileStore::open(&path).await.unwrap();
        setup.save_content_type(note_type(true)).await.unwrap();

        let first = JsonFileStore::open(&path).await.unwrap();
        let second = JsonFileStore::open(&path).await.unwrap();

        let apple = save_note(&first, "apple").await.unwrap();
        let banana = save_note(&second, "banana").await.unwrap();
        assert_ne!(apple, banana);

        let reopened = JsonFileStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.find_one("note", "text", "apple").await.unwrap().unwrap().id,
            Some(apple)
        );
        assert_eq!(
            reopened.find_one("note", "text", "banana").await.unwrap().unwrap().id,
            Some(banana)
        );

        // Each handle sees what the other wrote
        assert!(first.find_one("note", "text", "banana").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn unique_value_is_checked_against_other_handles() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");

        let first = JsonFileStore::open(&path).await.unwrap();
        first.save_content_type(note_type(true)).await.unwrap();
        let second = JsonFileStore::open(&path).await.unwrap();

        save_note(&first, "same").await.unwrap();

        assert!(matches!(
            save_note(&second, "same").await,
            Err(StoreError::Duplicate { .. })
        ));
        assert_eq!(first.find_all("note", "text", "same").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn concurrent_saves_through_separate_handles_are_all_kept() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        JsonFileStore::open(&path)
            .await
            .unwrap()
            .save_content_type(note_type(false))
            .await
            .unwrap();

        let mut tasks = tokio::task::JoinSet::new();
        for n in 0..8 {
            let path = path.clone();
            tasks.spawn(async move {
                let store = JsonFileStore::open(&path).await.unwrap();
                save_note(&store, &format!("note {n}")).await.unwrap()
            });
        }

        let mut ids = Vec::new();
        while let Some(id) = tasks.join_next().await {
            ids.push(id.unwrap());
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);

        let store = JsonFileStore::open(&path).await.unwrap();
        for n in 0..8 {
            let text = format!("note {n}");
            assert!(store.find_one("note", "text", &text).await.unwrap().is_some());
        }
    }

    #[tokio::test]
    async fn rejected_save_leaves_file_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let store = JsonFileStore::open(&path).await.unwrap();
        store.save_content_type(note_type(false)).await.unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let mut record = store
            .create(RecordAttributes::new("note", "empty"))
            .await
            .unwrap();

        assert!(store.save(&mut record).await.is_err());
        assert!(record.id.is_none());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn corrupt_file_is_a_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            JsonFileStore::open(&path).await,
            Err(StoreError::Serialization(_))
        ));
    }
}
