//! Todo repository: the entry point the HTTP layer uses.

use std::collections::HashMap;
use std::sync::Arc;

use crate::Todo;

use super::keys::{self, SORT_KEY_ATTR, TITLE_ATTR};
use super::{ItemStore, ProvisionOutcome, RepositoryError, Result, TableProvisioner, TableSchema};

/// Domain-level operations over an [`ItemStore`].
///
/// Cheap to clone; clones share the underlying store.
#[derive(Clone)]
pub struct TodoRepository {
    store: Arc<dyn ItemStore>,
}

impl TodoRepository {
    /// Wraps a store whose table is known to exist.
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// Ensures the backing table exists and returns a ready repository.
    ///
    /// Must complete before any other operation is used.
    pub async fn init(
        store: Arc<dyn ItemStore>,
        provisioner: &dyn TableProvisioner,
        schema: &TableSchema,
    ) -> Result<Self> {
        match provisioner.ensure_table(schema).await? {
            ProvisionOutcome::Created => {
                tracing::info!(table = %schema.table_name, "Created table");
            }
            ProvisionOutcome::AlreadyExists => {
                tracing::info!(table = %schema.table_name, "Table already exists");
            }
        }

        Ok(Self::new(store))
    }

    /// Stores a todo under its user's partition. Overwrites silently.
    pub async fn insert_todo(&self, todo: &Todo) -> Result<()> {
        let pk = keys::user_pk(&todo.user_id);
        let sk = keys::todo_sk(todo.timestamp, &todo.id);
        let attributes = HashMap::from([(TITLE_ATTR.to_string(), todo.title.clone())]);

        tracing::debug!(pk = %pk, sk = %sk, "Inserting todo");
        self.store.put(&pk, &sk, attributes).await
    }

    /// Lists a user's todos ordered by sort key.
    ///
    /// Fails as a whole if any stored sort key cannot be decoded.
    pub async fn list_user_todos(&self, user_id: &str) -> Result<Vec<Todo>> {
        let pk = keys::user_pk(user_id);
        tracing::debug!(pk = %pk, "Listing todos");

        let items = self
            .store
            .query_by_partition(&pk, &[SORT_KEY_ATTR, TITLE_ATTR])
            .await?;

        items
            .into_iter()
            .map(|item| {
                let (timestamp, id) = keys::decode_todo_sk(&item.sort_key)?;
                let title = item.attribute(TITLE_ATTR).ok_or_else(|| {
                    RepositoryError::MalformedItem(format!(
                        "item {} has no {TITLE_ATTR} attribute",
                        item.sort_key
                    ))
                })?;

                Ok(Todo {
                    id,
                    user_id: user_id.to_string(),
                    title: title.to_string(),
                    timestamp,
                })
            })
            .collect()
    }
}
