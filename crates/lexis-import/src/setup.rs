use std::fmt;

use lexis_store::{ContentType, RecordStore, StoreError};
use lexis_types::{DICTIONARY_ENTRY, DICTIONARY_ENTRY_LABEL};

use crate::entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupAction {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupStep {
    pub subject: String,
    pub action: SetupAction,
}

impl fmt::Display for SetupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            SetupAction::Created => write!(f, "Created {}", self.subject),
            SetupAction::AlreadyExists => write!(f, "{} already exists", self.subject),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupReport {
    pub steps: Vec<SetupStep>,
}

impl SetupReport {
    /// Whether anything was provisioned on this run
    pub fn changed(&self) -> bool {
        self.steps.iter().any(|s| s.action == SetupAction::Created)
    }

    fn push(&mut self, subject: String, action: SetupAction) {
        tracing::info!("{}", SetupStep { subject: subject.clone(), action });
        self.steps.push(SetupStep { subject, action });
    }
}

/// Make sure the dictionary entry content type and its fields exist
///
/// Existing definitions are left alone, so running this repeatedly is safe.
pub async fn provision<S>(store: &S) -> Result<SetupReport, StoreError>
where
    S: RecordStore + ?Sized,
{
    let mut report = SetupReport::default();
    let type_subject = format!("{DICTIONARY_ENTRY_LABEL} content type");

    let mut content_type = match store.content_type(DICTIONARY_ENTRY).await? {
        Some(existing) => {
            report.push(type_subject, SetupAction::AlreadyExists);
            existing
        }
        None => {
            let created = ContentType::new(DICTIONARY_ENTRY, DICTIONARY_ENTRY_LABEL);
            store.save_content_type(created.clone()).await?;
            report.push(type_subject, SetupAction::Created);
            created
        }
    };

    for field in entry::fields() {
        let subject = format!("{} field", field.name);

        if content_type.field(&field.name).is_some() {
            report.push(subject, SetupAction::AlreadyExists);
            continue;
        }

        content_type.fields.push(field);
        store.save_content_type(content_type.clone()).await?;
        report.push(subject, SetupAction::Created);
    }

    Ok(report)
}
