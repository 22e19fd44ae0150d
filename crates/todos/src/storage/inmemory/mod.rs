//! In-memory storage backend.
//!
//! Keeps tables in `BTreeMap`s behind an `Arc<RwLock<_>>`, ordered by
//! `(partition key, sort key)` like a DynamoDB table. Used by tests and by
//! builds without the `dynamodb` feature. Data is lost when the process exits.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryBackend;
//!
//! let backend = InMemoryBackend::new();
//! backend.ensure_table(&TableSchema::todos("todos")).await?;
//! let store = backend.store("todos", 100);
//! ```

mod store;

pub use store::{InMemoryBackend, InMemoryItemStore};
