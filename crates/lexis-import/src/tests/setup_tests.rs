use lexis_store::{FieldKind, MemoryStore, RecordStore};
use lexis_types::{DICTIONARY_ENTRY, FIELD_DEFINITIONS, FIELD_WORD};

use crate::{SetupAction, provision};

#[tokio::test]
async fn provisions_content_type_and_fields() {
    let store = MemoryStore::new();

    let report = provision(&store).await.unwrap();

    assert!(report.changed());
    let lines: Vec<_> = report.steps.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            "Created Dictionary Entry content type",
            "Created word field",
            "Created definitions field",
        ]
    );

    let content_type = store.content_type(DICTIONARY_ENTRY).await.unwrap().unwrap();
    let word = content_type.field(FIELD_WORD).unwrap();
    assert!(word.required);
    assert!(word.unique);
    assert_eq!(word.kind, FieldKind::String { max_length: 255 });

    let definitions = content_type.field(FIELD_DEFINITIONS).unwrap();
    assert!(!definitions.required);
    assert_eq!(definitions.kind, FieldKind::TextLong);
}

#[tokio::test]
async fn second_run_changes_nothing() {
    let store = MemoryStore::new();
    provision(&store).await.unwrap();
    let before = store.content_type(DICTIONARY_ENTRY).await.unwrap();

    let report = provision(&store).await.unwrap();

    assert!(!report.changed());
    assert!(
        report
            .steps
            .iter()
            .all(|s| s.action == SetupAction::AlreadyExists)
    );
    assert_eq!(report.steps[0].to_string(), "Dictionary Entry content type already exists");
    assert_eq!(store.content_type(DICTIONARY_ENTRY).await.unwrap(), before);
}

#[tokio::test]
async fn missing_field_is_added_to_existing_type() {
    let store = MemoryStore::new();
    provision(&store).await.unwrap();

    let mut content_type = store.content_type(DICTIONARY_ENTRY).await.unwrap().unwrap();
    content_type.fields.retain(|f| f.name != FIELD_DEFINITIONS);
    store.save_content_type(content_type).await.unwrap();

    let report = provision(&store).await.unwrap();

    let actions: Vec<_> = report.steps.iter().map(|s| s.action).collect();
    assert_eq!(
        actions,
        vec![
            SetupAction::AlreadyExists,
            SetupAction::AlreadyExists,
            SetupAction::Created,
        ]
    );
    assert!(
        store
            .content_type(DICTIONARY_ENTRY)
            .await
            .unwrap()
            .unwrap()
            .field(FIELD_DEFINITIONS)
            .is_some()
    );
}
