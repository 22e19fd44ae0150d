//! DynamoDB item store.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use todos_core::storage::keys::PARTITION_KEY_ATTR;
use todos_core::storage::{ItemStore, Result, StoredItem};

use super::conversions::{item_to_stored, projection_expression, to_item};
use super::error::{map_put_item_error, map_query_error};

/// Put and query access to one DynamoDB table.
#[derive(Debug, Clone)]
pub struct DynamoDbItemStore {
    client: Client,
    table_name: String,
    query_limit: usize,
}

impl DynamoDbItemStore {
    /// Creates a store for `table_name` reading at most `query_limit` items
    /// per query.
    pub fn new(client: Client, table_name: impl Into<String>, query_limit: usize) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            query_limit,
        }
    }
}

#[async_trait]
impl ItemStore for DynamoDbItemStore {
    async fn put(
        &self,
        partition_key: &str,
        sort_key: &str,
        attributes: HashMap<String, String>,
    ) -> Result<()> {
        let item = to_item(partition_key, sort_key, attributes);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn query_by_partition(
        &self,
        partition_key: &str,
        projection: &[&str],
    ) -> Result<Vec<StoredItem>> {
        let (projection, mut names) = projection_expression(projection);
        names.insert("#pk".to_string(), PARTITION_KEY_ATTR.to_string());

        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .key_condition_expression("#pk = :pk")
            .set_expression_attribute_names(Some(names))
            .expression_attribute_values(":pk", AttributeValue::S(partition_key.to_string()))
            .set_projection_expression((!projection.is_empty()).then_some(projection))
            .limit(i32::try_from(self.query_limit).unwrap_or(i32::MAX))
            .send()
            .await
            .map_err(map_query_error)?;

        if result.last_evaluated_key.is_some() {
            tracing::debug!(
                pk = %partition_key,
                limit = self.query_limit,
                "Query page truncated, continuation key not followed"
            );
        }

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_stored).collect()
    }
}
