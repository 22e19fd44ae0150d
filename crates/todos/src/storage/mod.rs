//! Storage backend implementations.
//!
//! Concrete implementations of the `ItemStore` and `TableProvisioner` traits
//! defined in `todos_core::storage`, selected at compile time.
//!
//! # Feature Flags
//!
//! - `dynamodb` (default): AWS DynamoDB backend using `aws-sdk-dynamodb`
//! - without it: in-memory tables, lost on exit
//!
//! Build with the in-memory backend:
//! ```bash
//! cargo build -p todos --no-default-features
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

// Only the tests use it when DynamoDB is enabled.
#[cfg_attr(feature = "dynamodb", allow(dead_code))]
pub mod inmemory;

use std::sync::Arc;

use todos_core::storage::{RepositoryError, Result, TableSchema, TodoRepository};

use crate::config::Config;

/// Reads configuration from the environment and connects.
pub async fn init() -> Result<TodoRepository> {
    let config =
        Config::from_env().map_err(|e| RepositoryError::Configuration(e.to_string()))?;
    connect(&config).await
}

/// Connects to the configured backend and ensures the table exists.
///
/// This is the one-time startup barrier: callers must not serve requests
/// before it returns `Ok`.
#[cfg(feature = "dynamodb")]
pub async fn connect(config: &Config) -> Result<TodoRepository> {
    tracing::info!(
        table = %config.table_name,
        target = %config.target_display(),
        "Initializing repository"
    );

    let client = dynamodb::create_client(config).await;
    let store = dynamodb::DynamoDbItemStore::new(
        client.clone(),
        config.table_name.clone(),
        config.query_limit,
    );
    let provisioner = dynamodb::DynamoDbProvisioner::new(client);

    TodoRepository::init(
        Arc::new(store),
        &provisioner,
        &TableSchema::todos(config.table_name.clone()),
    )
    .await
}

/// Connects to the configured backend and ensures the table exists.
///
/// This is the one-time startup barrier: callers must not serve requests
/// before it returns `Ok`.
#[cfg(not(feature = "dynamodb"))]
pub async fn connect(config: &Config) -> Result<TodoRepository> {
    tracing::info!(
        table = %config.table_name,
        target = "in-memory",
        "Initializing repository"
    );

    let backend = inmemory::InMemoryBackend::new();
    let store = backend.store(config.table_name.clone(), config.query_limit);

    TodoRepository::init(
        Arc::new(store),
        &backend,
        &TableSchema::todos(config.table_name.clone()),
    )
    .await
}
