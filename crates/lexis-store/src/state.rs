use std::collections::BTreeMap;

use lexis_types::RecordId;
use serde::{Deserialize, Serialize};

use crate::{ContentType, FieldKind, Record, RecordAttributes, StoreError};

/// Everything a store holds, shared by the memory and file backends
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct StoreState {
    /// Last id handed out
    last_id: u64,
    content_types: BTreeMap<String, ContentType>,
    records: BTreeMap<RecordId, Record>,
}

impl StoreState {
    pub fn find_all(
        &self,
        content_type: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<Record>, StoreError> {
        let definition = self.require_content_type(content_type)?;
        if definition.field(field).is_none() {
            return Err(StoreError::UnknownField {
                content_type: content_type.to_string(),
                field: field.to_string(),
            });
        }

        Ok(self
            .records
            .values()
            .filter(|r| r.content_type == content_type && r.get(field) == Some(value))
            .cloned()
            .collect())
    }

    pub fn find_one(
        &self,
        content_type: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Record>, StoreError> {
        Ok(self.find_all(content_type, field, value)?.into_iter().next())
    }

    pub fn load(&self, id: RecordId) -> Option<Record> {
        self.records.get(&id).cloned()
    }

    pub fn create(&self, attributes: RecordAttributes) -> Result<Record, StoreError> {
        self.require_content_type(&attributes.content_type)?;
        Ok(Record::from(attributes))
    }

    /// Store `record`, returning the id it is stored under
    ///
    /// The caller's record is left untouched so a failed persist can be
    /// rolled back by discarding the state.
    pub fn save(&mut self, record: &Record) -> Result<RecordId, StoreError> {
        self.validate(record)?;

        let id = match record.id {
            Some(id) => {
                if !self.records.contains_key(&id) {
                    return Err(StoreError::RecordNotFound(id));
                }
                id
            }
            None => {
                self.last_id += 1;
                RecordId(self.last_id)
            }
        };

        let mut stored = record.clone();
        stored.id = Some(id);
        self.records.insert(id, stored);

        Ok(id)
    }

    pub fn content_type(&self, id: &str) -> Option<ContentType> {
        self.content_types.get(id).cloned()
    }

    pub fn save_content_type(&mut self, content_type: ContentType) {
        self.content_types
            .insert(content_type.id.clone(), content_type);
    }

    fn require_content_type(&self, id: &str) -> Result<&ContentType, StoreError> {
        self.content_types
            .get(id)
            .ok_or_else(|| StoreError::UnknownContentType(id.to_string()))
    }

    fn validate(&self, record: &Record) -> Result<(), StoreError> {
        let content_type = self.require_content_type(&record.content_type)?;

        if record.title.trim().is_empty() {
            return Err(StoreError::MissingRequiredField {
                field: "title".to_string(),
            });
        }

        if let Some(name) = record
            .fields
            .keys()
            .find(|name| content_type.field(name).is_none())
        {
            return Err(StoreError::UnknownField {
                content_type: content_type.id.clone(),
                field: name.clone(),
            });
        }

        for field in &content_type.fields {
            let value = record.get(&field.name).unwrap_or_default();

            if field.required && value.trim().is_empty() {
                return Err(StoreError::MissingRequiredField {
                    field: field.name.clone(),
                });
            }

            if let FieldKind::String { max_length } = field.kind {
                if value.chars().count() > max_length {
                    return Err(StoreError::FieldTooLong {
                        field: field.name.clone(),
                        max_length,
                    });
                }
            }

            // A value the record already held is not a new duplicate, even if
            // the store holds older duplicates of it
            let unchanged = record
                .id
                .and_then(|id| self.records.get(&id))
                .is_some_and(|stored| stored.get(&field.name) == Some(value));

            if field.unique && !value.is_empty() && !unchanged {
                let taken = self.records.values().any(|other| {
                    other.id != record.id
                        && other.content_type == record.content_type
                        && other.get(&field.name) == Some(value)
                });

                if taken {
                    return Err(StoreError::Duplicate {
                        content_type: content_type.id.clone(),
                        field: field.name.clone(),
                        value: value.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
