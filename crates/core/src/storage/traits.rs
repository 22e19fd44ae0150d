use std::collections::HashMap;

use async_trait::async_trait;

use super::{ProvisionOutcome, Result, TableSchema};

/// A row returned by a partition query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredItem {
    pub sort_key: String,
    /// Projected non-key attributes.
    pub attributes: HashMap<String, String>,
}

impl StoredItem {
    /// Returns a projected attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Put and range-query primitives over a two-part key.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Writes a row, replacing any row with the same key.
    async fn put(
        &self,
        partition_key: &str,
        sort_key: &str,
        attributes: HashMap<String, String>,
    ) -> Result<()>;

    /// Returns the rows of one partition in ascending sort key order.
    ///
    /// Only the first page is read; `projection` names the non-key attributes
    /// to return.
    async fn query_by_partition(
        &self,
        partition_key: &str,
        projection: &[&str],
    ) -> Result<Vec<StoredItem>>;
}

/// Makes sure the backing table exists.
#[async_trait]
pub trait TableProvisioner: Send + Sync {
    /// Creates the table unless a table with the same name already exists.
    ///
    /// Does not wait for a newly created table to become active.
    async fn ensure_table(&self, schema: &TableSchema) -> Result<ProvisionOutcome>;
}
