//! Persistence of the record set.
//!
//! # Design
//! The whole dataset is one line-delimited text file. A store can only read
//! everything, append one record, or replace everything; there is no partial
//! rewrite. Backends do no locking, so overlapping read-modify-write
//! sequences are last-writer-wins.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::Todo;

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Read and decode every record, in file order.
    async fn load_all(&self) -> Result<Vec<Todo>, StoreError>;

    /// Append one record without reading the existing contents.
    async fn append_one(&self, record: &Todo) -> Result<(), StoreError>;

    /// Overwrite the dataset with `records`.
    async fn replace_all(&self, records: &[Todo]) -> Result<(), StoreError>;
}
