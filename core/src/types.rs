//! The todo record.
//!
//! # Design
//! A todo is an open mapping rather than a closed struct: `title`, `date` and
//! `is_completed` are required at creation, but any other caller-supplied
//! field is stored and returned verbatim. `serde_json` is built with
//! `preserve_order`, so keys keep their insertion order on the way in and out
//! of the records file.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

pub const ID: &str = "id";
pub const TITLE: &str = "title";
pub const DATE: &str = "date";
pub const IS_COMPLETED: &str = "is_completed";

/// A single todo record, exactly as it is stored on one line of the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Todo(Map<String, Value>);

impl Todo {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The record's `id` when it is a string. Ids are compared as strings;
    /// a record whose `id` was overwritten with a non-string never matches.
    pub fn id(&self) -> Option<&str> {
        self.0.get(ID).and_then(Value::as_str)
    }

    pub fn has_id(&self, id: &str) -> bool {
        self.id() == Some(id)
    }

    /// Assign a freshly generated id. An existing `id` key keeps its position.
    pub fn assign_new_id(&mut self) -> &str {
        self.0
            .insert(ID.to_string(), Value::String(Uuid::new_v4().to_string()));
        self.id().unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn date(&self) -> Option<&Value> {
        self.0.get(DATE)
    }

    /// Shallow merge: every key in `patch` overwrites (or is appended to) this
    /// record, `id` included.
    pub fn merge(&mut self, patch: Map<String, Value>) {
        for (key, value) in patch {
            self.0.insert(key, value);
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}
