use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tracing::{debug, error};

use crate::codec;
use crate::error::StoreError;
use crate::store::TodoStore;
use crate::types::Todo;

/// Records kept in one flat file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl TodoStore for FileStore {
    async fn load_all(&self) -> Result<Vec<Todo>, StoreError> {
        let contents = fs::read_to_string(&self.path)
            .await
            .map_err(StoreError::Unavailable)?;
        let records = codec::decode(&contents).map_err(|err| {
            error!(path = %self.path.display(), error = %err, "records file does not decode");
            err
        })?;
        debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    async fn append_one(&self, record: &Todo) -> Result<(), StoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(StoreError::Unavailable)?;
        file.write_all(codec::encode_line(record).as_bytes())
            .await
            .map_err(StoreError::Unavailable)?;
        file.flush().await.map_err(StoreError::Unavailable)?;
        debug!(path = %self.path.display(), "appended record");
        Ok(())
    }

    async fn replace_all(&self, records: &[Todo]) -> Result<(), StoreError> {
        fs::write(&self.path, codec::encode(records))
            .await
            .map_err(StoreError::Write)?;
        debug!(path = %self.path.display(), count = records.len(), "rewrote records");
        Ok(())
    }
}
