use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use lexis_lookup::{DictionaryLookup, LookupError, format_definitions};
use lexis_store::MemoryStore;
use lexis_types::{Meaning, RawLookupResult};

use crate::{Importer, provision};

#[derive(Clone)]
pub enum Reply {
    Found(RawLookupResult),
    NotFound,
    Unavailable,
}

/// Lookup double answering every fetch with the configured reply
pub struct StubLookup {
    reply: Mutex<Reply>,
    pub fetches: AtomicUsize,
    pub transforms: AtomicUsize,
}

impl StubLookup {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply: Mutex::new(reply),
            fetches: AtomicUsize::new(0),
            transforms: AtomicUsize::new(0),
        }
    }

    pub fn set(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn transform_count(&self) -> usize {
        self.transforms.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl DictionaryLookup for StubLookup {
    async fn fetch(&self, word: &str) -> Result<Option<RawLookupResult>, LookupError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        let reply = self.reply.lock().unwrap().clone();

        match reply {
            Reply::Found(result) => Ok(Some(result)),
            Reply::NotFound => Ok(None),
            Reply::Unavailable => Err(LookupError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                url: format!("http://dictionary.test/{word}"),
            }),
        }
    }

    fn transform(&self, result: &RawLookupResult) -> String {
        self.transforms.fetch_add(1, Ordering::SeqCst);
        format_definitions(result)
    }
}

pub fn lookup_result(word: &str, meanings: Vec<Meaning>) -> RawLookupResult {
    RawLookupResult {
        word: Some(word.to_string()),
        phonetic: None,
        meanings,
    }
}

pub fn hello() -> RawLookupResult {
    lookup_result(
        "hello",
        vec![
            Meaning::new("noun", &["A greeting"]),
            Meaning::new("verb", &["To greet someone"]),
        ],
    )
}

/// Importer over a memory store with the dictionary entry type provisioned
pub async fn importer(reply: Reply) -> Importer<StubLookup, MemoryStore> {
    let store = MemoryStore::new();
    provision(&store).await.unwrap();

    Importer::new(StubLookup::new(reply), store)
}
