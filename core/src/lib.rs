//! Storage and operations for todo records kept in a line-delimited JSON file.
//!
//! # Overview
//! Each line of the records file is one self-contained JSON object. The crate
//! provides the line codec, creation-time validation, the `TodoStore`
//! abstraction with file and in-memory backends, and `TodoService`, which
//! implements create, get, list, update and delete on top of a store.
//!
//! # Design
//! - Todos are open mappings: unknown fields pass through untouched.
//! - Nothing is cached; every operation reads the whole store.
//! - No HTTP types appear here. The server crate maps `TodoError` onto its
//!   response envelope.

pub mod codec;
pub mod date;
pub mod error;
pub mod query;
pub mod service;
pub mod store;
pub mod types;
pub mod validate;

pub use error::{DecodeError, StoreError, TodoError};
pub use query::ListQuery;
pub use service::TodoService;
pub use store::{FileStore, MemoryStore, TodoStore};
pub use types::Todo;
pub use validate::{validate, Validation};
