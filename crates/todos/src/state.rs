//! Shared application state.
//!
//! Built once in `main` after the repository is initialized and cloned into
//! every request handler.

use std::sync::Arc;

use todos_core::id::IdGenerator;
use todos_core::storage::TodoRepository;

#[derive(Clone)]
pub struct AppState {
    /// Todo repository over the configured backend.
    pub todo_repo: TodoRepository,
    /// Id source for new todos.
    pub id_generator: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn new(todo_repo: TodoRepository, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            todo_repo,
            id_generator,
        }
    }

    /// State over a fresh in-memory table, for tests.
    #[cfg(test)]
    pub async fn in_memory() -> Self {
        use todos_core::id::NanoIdGenerator;
        use todos_core::storage::TableSchema;

        use crate::storage::inmemory::InMemoryBackend;

        let backend = InMemoryBackend::new();
        let repo = TodoRepository::init(
            Arc::new(backend.store("todos", 100)),
            &backend,
            &TableSchema::todos("todos"),
        )
        .await
        .expect("in-memory table creation cannot fail");

        Self::new(repo, Arc::new(NanoIdGenerator))
    }
}
