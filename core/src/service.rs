//! The five todo operations, independent of any transport.
//!
//! # Design
//! `TodoService` holds only a handle to the store and keeps nothing between
//! calls: every operation re-reads the full record set. Update and delete are
//! read-modify-write sequences with no coordination between callers.

use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use crate::error::TodoError;
use crate::query::ListQuery;
use crate::store::TodoStore;
use crate::types::Todo;
use crate::validate::validate;

#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// Validate `fields`, give them a fresh id and append them.
    pub async fn create(&self, fields: Map<String, Value>) -> Result<Todo, TodoError> {
        if let Some(message) = validate(&fields).message() {
            return Err(TodoError::MissingOrInvalidField(message));
        }

        let mut todo = Todo::new(fields);
        todo.assign_new_id();
        self.store.append_one(&todo).await?;

        info!(id = todo.id().unwrap_or_default(), "created todo");
        Ok(todo)
    }

    /// The single record carrying `id`. Zero or several matches are both
    /// reported as not found.
    pub async fn get(&self, id: &str) -> Result<Todo, TodoError> {
        let records = self.store.load_all().await?;
        let mut matches = records.into_iter().filter(|t| t.has_id(id));
        match (matches.next(), matches.next()) {
            (Some(todo), None) => Ok(todo),
            _ => Err(TodoError::RecordNotFound),
        }
    }

    pub async fn list(&self, query: ListQuery) -> Result<Vec<Todo>, TodoError> {
        let records = self.store.load_all().await?;
        if records.is_empty() {
            return Err(TodoError::RecordsUnavailable);
        }
        Ok(query.apply(records))
    }

    /// Merge `patch` over the first record carrying `id`. The result is not
    /// re-validated, and a patch may replace the `id` itself.
    pub async fn update(&self, id: &str, patch: Map<String, Value>) -> Result<Todo, TodoError> {
        let mut records = self.store.load_all().await?;
        let todo = records
            .iter_mut()
            .find(|t| t.has_id(id))
            .ok_or(TodoError::RecordNotFound)?;
        todo.merge(patch);
        let updated = todo.clone();

        self.store.replace_all(&records).await?;
        info!(id, "updated todo");
        Ok(updated)
    }

    /// Remove the first record carrying `id` and return it.
    pub async fn delete(&self, id: &str) -> Result<Todo, TodoError> {
        let mut records = self.store.load_all().await?;
        let index = records
            .iter()
            .position(|t| t.has_id(id))
            .ok_or(TodoError::RecordNotFound)?;
        let removed = records.remove(index);

        self.store.replace_all(&records).await?;
        info!(id, "deleted todo");
        Ok(removed)
    }
}
