//! In-memory table provisioner and item store.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use todos_core::storage::schema::{calculate_provision_plan, ProvisionPlan};
use todos_core::storage::{
    ItemStore, ProvisionOutcome, RepositoryError, Result, StoredItem, TableProvisioner,
    TableSchema,
};

type Table = BTreeMap<(String, String), HashMap<String, String>>;

/// A set of named in-memory tables.
///
/// Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBackend {
    tables: Arc<RwLock<HashMap<String, Table>>>,
}

impl InMemoryBackend {
    /// Creates a backend with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an item store bound to one table.
    pub fn store(&self, table_name: impl Into<String>, query_limit: usize) -> InMemoryItemStore {
        InMemoryItemStore {
            backend: self.clone(),
            table_name: table_name.into(),
            query_limit,
        }
    }

    /// Names of the existing tables.
    #[cfg(test)]
    pub async fn table_names(&self) -> Vec<String> {
        self.tables.read().await.keys().cloned().collect()
    }
}

#[async_trait]
impl TableProvisioner for InMemoryBackend {
    async fn ensure_table(&self, schema: &TableSchema) -> Result<ProvisionOutcome> {
        let mut tables = self.tables.write().await;
        let existing: Vec<&String> = tables.keys().collect();

        match calculate_provision_plan(&existing, schema) {
            ProvisionPlan::AlreadyExists { .. } => Ok(ProvisionOutcome::AlreadyExists),
            ProvisionPlan::CreateTable { schema } => {
                tables.insert(schema.table_name, Table::new());
                Ok(ProvisionOutcome::Created)
            }
        }
    }
}

/// Item store over one in-memory table.
#[derive(Debug, Clone)]
pub struct InMemoryItemStore {
    backend: InMemoryBackend,
    table_name: String,
    query_limit: usize,
}

impl InMemoryItemStore {
    fn table_not_found(&self) -> RepositoryError {
        RepositoryError::BackendRequestFailure(format!("Table not found: {}", self.table_name))
    }
}

#[async_trait]
impl ItemStore for InMemoryItemStore {
    async fn put(
        &self,
        partition_key: &str,
        sort_key: &str,
        attributes: HashMap<String, String>,
    ) -> Result<()> {
        let mut tables = self.backend.tables.write().await;
        let table = tables
            .get_mut(&self.table_name)
            .ok_or_else(|| self.table_not_found())?;

        table.insert((partition_key.to_string(), sort_key.to_string()), attributes);
        Ok(())
    }

    async fn query_by_partition(
        &self,
        partition_key: &str,
        projection: &[&str],
    ) -> Result<Vec<StoredItem>> {
        let tables = self.backend.tables.read().await;
        let table = tables
            .get(&self.table_name)
            .ok_or_else(|| self.table_not_found())?;

        let mut rows = table
            .range((partition_key.to_string(), String::new())..)
            .take_while(|((pk, _), _)| pk == partition_key);

        let items: Vec<StoredItem> = rows
            .by_ref()
            .take(self.query_limit)
            .map(|((_, sk), attributes)| StoredItem {
                sort_key: sk.clone(),
                attributes: attributes
                    .iter()
                    .filter(|(name, _)| projection.contains(&name.as_str()))
                    .map(|(name, value)| (name.clone(), value.clone()))
                    .collect(),
            })
            .collect();

        if rows.next().is_some() {
            tracing::debug!(
                pk = %partition_key,
                limit = self.query_limit,
                "Query page truncated, remaining items not returned"
            );
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use todos_core::storage::TodoRepository;
    use todos_core::Todo;

    use super::*;

    async fn ready_backend() -> (InMemoryBackend, InMemoryItemStore) {
        let backend = InMemoryBackend::new();
        backend
            .ensure_table(&TableSchema::todos("todos"))
            .await
            .unwrap();
        let store = backend.store("todos", 100);
        (backend, store)
    }

    fn title(value: &str) -> HashMap<String, String> {
        HashMap::from([("title".to_string(), value.to_string())])
    }

    #[tokio::test]
    async fn ensure_table_is_idempotent() {
        let backend = InMemoryBackend::new();
        let schema = TableSchema::todos("todos");

        assert_eq!(
            backend.ensure_table(&schema).await,
            Ok(ProvisionOutcome::Created)
        );
        assert_eq!(
            backend.ensure_table(&schema).await,
            Ok(ProvisionOutcome::AlreadyExists)
        );
        assert_eq!(backend.table_names().await, vec!["todos".to_string()]);
    }

    #[tokio::test]
    async fn ensure_table_keeps_existing_rows() {
        let (backend, store) = ready_backend().await;
        store.put("U#u1", "T#1000#a", title("keep")).await.unwrap();

        backend
            .ensure_table(&TableSchema::todos("todos"))
            .await
            .unwrap();

        assert_eq!(store.query_by_partition("U#u1", &["title"]).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn put_without_table_fails() {
        let store = InMemoryBackend::new().store("missing", 100);

        let result = store.put("U#u1", "T#1000#a", title("x")).await;
        assert!(matches!(
            result,
            Err(RepositoryError::BackendRequestFailure(msg)) if msg.contains("missing")
        ));
    }

    #[tokio::test]
    async fn put_overwrites_same_key() {
        let (_, store) = ready_backend().await;
        store.put("U#u1", "T#1000#a", title("first")).await.unwrap();
        store.put("U#u1", "T#1000#a", title("second")).await.unwrap();

        let items = store.query_by_partition("U#u1", &["title"]).await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].attribute("title"), Some("second"));
    }

    #[tokio::test]
    async fn query_returns_only_matching_partition_in_sort_order() {
        let (_, store) = ready_backend().await;
        store.put("U#u1", "T#2000#b", title("two")).await.unwrap();
        store.put("U#u10", "T#1500#z", title("other")).await.unwrap();
        store.put("U#u1", "T#1000#a", title("one")).await.unwrap();
        store.put("U#u0", "T#0500#y", title("other")).await.unwrap();

        let items = store.query_by_partition("U#u1", &["title"]).await.unwrap();
        let keys: Vec<&str> = items.iter().map(|i| i.sort_key.as_str()).collect();
        assert_eq!(keys, vec!["T#1000#a", "T#2000#b"]);
    }

    #[tokio::test]
    async fn query_applies_projection() {
        let (_, store) = ready_backend().await;
        let mut attributes = title("one");
        attributes.insert("note".to_string(), "hidden".to_string());
        store.put("U#u1", "T#1000#a", attributes).await.unwrap();

        let items = store.query_by_partition("U#u1", &["SK", "title"]).await.unwrap();
        assert_eq!(items[0].attributes, title("one"));
    }

    #[tokio::test]
    async fn query_stops_at_limit() {
        let backend = InMemoryBackend::new();
        backend
            .ensure_table(&TableSchema::todos("todos"))
            .await
            .unwrap();
        let store = backend.store("todos", 2);
        for i in 0..5 {
            store
                .put("U#u1", &format!("T#100{i}#a"), title("x"))
                .await
                .unwrap();
        }

        let items = store.query_by_partition("U#u1", &["title"]).await.unwrap();
        let keys: Vec<&str> = items.iter().map(|i| i.sort_key.as_str()).collect();
        assert_eq!(keys, vec!["T#1000#a", "T#1001#a"]);
    }

    #[tokio::test]
    async fn repository_round_trip_orders_by_timestamp_then_id() {
        let (backend, store) = ready_backend().await;
        let repo = TodoRepository::init(
            Arc::new(store),
            &backend,
            &TableSchema::todos("todos"),
        )
        .await
        .unwrap();

        repo.insert_todo(&Todo::new("id-b", "u1", "Same time b", 1500))
            .await
            .unwrap();
        repo.insert_todo(&Todo::new("id-z", "u1", "Walk dog", 2000))
            .await
            .unwrap();
        repo.insert_todo(&Todo::new("id-a", "u1", "Same time a", 1500))
            .await
            .unwrap();
        repo.insert_todo(&Todo::new("id-m", "u1", "Buy milk", 1000))
            .await
            .unwrap();

        let titles: Vec<String> = repo
            .list_user_todos("u1")
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Buy milk", "Same time a", "Same time b", "Walk dog"]
        );
    }

    #[tokio::test]
    async fn repository_end_to_end_two_users() {
        let (backend, store) = ready_backend().await;
        let schema = TableSchema::todos("todos");
        let repo = TodoRepository::init(Arc::new(store), &backend, &schema)
            .await
            .unwrap();

        repo.insert_todo(&Todo::new("a1", "u1", "Buy milk", 1000))
            .await
            .unwrap();
        repo.insert_todo(&Todo::new("a2", "u1", "Walk dog", 2000))
            .await
            .unwrap();

        let u1 = repo.list_user_todos("u1").await.unwrap();
        assert_eq!(
            u1,
            vec![
                Todo::new("a1", "u1", "Buy milk", 1000),
                Todo::new("a2", "u1", "Walk dog", 2000),
            ]
        );
        assert!(repo.list_user_todos("u2").await.unwrap().is_empty());

        // A second init against the same backend is a no-op.
        assert_eq!(
            backend.ensure_table(&schema).await,
            Ok(ProvisionOutcome::AlreadyExists)
        );
        assert_eq!(repo.list_user_todos("u1").await.unwrap().len(), 2);
    }
}
