use std::collections::BTreeMap;

use lexis_types::RecordId;
use serde::{Deserialize, Serialize};

/// Values for a record that has not been created yet
#[derive(Debug, Clone, PartialEq)]
pub struct RecordAttributes {
    pub content_type: String,
    pub title: String,
    pub published: bool,
    pub fields: BTreeMap<String, String>,
}

impl RecordAttributes {
    pub fn new(content_type: &str, title: &str) -> Self {
        Self {
            content_type: content_type.to_string(),
            title: title.to_string(),
            published: true,
            fields: BTreeMap::new(),
        }
    }

    pub fn field(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: Option<RecordId>,
    pub content_type: String,
    pub title: String,
    pub published: bool,
    #[serde(default)]
    pub fields: BTreeMap<String, String>,
}

impl Record {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.fields.insert(field.to_string(), value.into());
    }
}

impl From<RecordAttributes> for Record {
    fn from(attributes: RecordAttributes) -> Self {
        Self {
            id: None,
            content_type: attributes.content_type,
            title: attributes.title,
            published: attributes.published,
            fields: attributes.fields,
        }
    }
}
