use std::io;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::codec;
use crate::error::StoreError;
use crate::store::TodoStore;
use crate::types::Todo;

/// The records file held in memory.
///
/// Keeps the encoded text rather than decoded records so that it fails and
/// succeeds exactly where `FileStore` would: `None` is a file that was never
/// created, and damaged text fails to load.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: RwLock<Option<String>>,
}

impl MemoryStore {
    /// A store whose file does not exist yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose file already holds `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RwLock::new(Some(contents.into())),
        }
    }

    pub fn with_records(records: &[Todo]) -> Self {
        Self::with_contents(codec::encode(records))
    }

    /// Current file text, `None` if never written.
    pub async fn contents(&self) -> Option<String> {
        self.contents.read().await.clone()
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn load_all(&self) -> Result<Vec<Todo>, StoreError> {
        let contents = self.contents.read().await;
        let text = contents
            .as_deref()
            .ok_or_else(|| StoreError::Unavailable(io::Error::from(io::ErrorKind::NotFound)))?;
        Ok(codec::decode(text)?)
    }

    async fn append_one(&self, record: &Todo) -> Result<(), StoreError> {
        self.contents
            .write()
            .await
            .get_or_insert_with(String::new)
            .push_str(&codec::encode_line(record));
        Ok(())
    }

    async fn replace_all(&self, records: &[Todo]) -> Result<(), StoreError> {
        *self.contents.write().await = Some(codec::encode(records));
        Ok(())
    }
}
