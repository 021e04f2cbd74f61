pub mod entry;
pub mod setup;

#[cfg(test)]
mod tests;

pub use setup::{SetupAction, SetupReport, SetupStep, provision};

use lexis_lookup::{DictionaryLookup, LookupError};
use lexis_store::{RecordStore, StoreError};
use lexis_types::{DICTIONARY_ENTRY, FIELD_DEFINITIONS, FIELD_WORD, RecordId, WordRecord};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Created(RecordId),
    Updated(RecordId),
    /// The dictionary has no entry for the word
    NotFound,
    /// An entry exists but carries no usable definition text
    NoDefinitions,
}

impl ImportOutcome {
    pub fn is_imported(&self) -> bool {
        matches!(self, ImportOutcome::Created(_) | ImportOutcome::Updated(_))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Imports dictionary words into a record store
pub struct Importer<L, S> {
    lookup: L,
    store: S,
    /// Serializes find-or-create so one importer never duplicates a word
    upsert: Mutex<()>,
}

impl<L, S> Importer<L, S>
where
    L: DictionaryLookup,
    S: RecordStore,
{
    pub fn new(lookup: L, store: S) -> Self {
        Self {
            lookup,
            store,
            upsert: Mutex::new(()),
        }
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Import `word`, `Ok(false)` when there was nothing to import
    pub async fn import_word(&self, word: &str) -> Result<bool, ImportError> {
        Ok(self.import(word).await?.is_imported())
    }

    /// Fetch `word` and create or update its dictionary entry
    ///
    /// Makes exactly one lookup request and at most one record write. Lookup
    /// and store failures are returned as errors; a missing word or an entry
    /// without definitions is reported through the outcome.
    pub async fn import(&self, word: &str) -> Result<ImportOutcome, ImportError> {
        let Some(result) = self.lookup.fetch(word).await? else {
            tracing::warn!("Cannot import word - not found in external API: {word}");
            return Ok(ImportOutcome::NotFound);
        };

        let definitions = self.lookup.transform(&result);
        if definitions.is_empty() {
            tracing::warn!("No definitions found for word: {word}");
            return Ok(ImportOutcome::NoDefinitions);
        }

        let _guard = self.upsert.lock().await;

        match self.store.find_one(DICTIONARY_ENTRY, FIELD_WORD, word).await? {
            Some(mut record) => {
                record.set(FIELD_DEFINITIONS, definitions);
                let id = self.store.save(&mut record).await?;
                tracing::info!("Updated existing dictionary entry: {word} (id {id})");
                Ok(ImportOutcome::Updated(id))
            }
            None => {
                let entry = WordRecord::new(word, definitions);
                let mut record = self.store.create(entry::attributes(&entry)).await?;
                let id = self.store.save(&mut record).await?;
                tracing::info!("Created new dictionary entry: {word} (id {id})");
                Ok(ImportOutcome::Created(id))
            }
        }
    }

    /// Stored entry for `word`, if any
    pub async fn entry(&self, word: &str) -> Result<Option<WordRecord>, ImportError> {
        let record = self.store.find_one(DICTIONARY_ENTRY, FIELD_WORD, word).await?;
        Ok(record.as_ref().map(entry::word_record))
    }
}
