//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to `RepositoryError` from `todos_core::storage`.
//! Table listing and creation failures are `BackendUnavailable`; item
//! reads and writes are `BackendRequestFailure`.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::list_tables::ListTablesError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::query::QueryError;
use todos_core::storage::RepositoryError;

/// Map a PutItem SDK error to RepositoryError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
) -> RepositoryError {
    let message = match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => "Table not found".to_string(),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            "Throughput exceeded".to_string()
        }
        PutItemError::RequestLimitExceeded(_) => "Request limit exceeded".to_string(),
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            "Item collection size limit exceeded".to_string()
        }
        PutItemError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!("PutItem failed: {:?}", err),
    };
    RepositoryError::BackendRequestFailure(message)
}

/// Map a Query SDK error to RepositoryError.
pub fn map_query_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<QueryError, R>,
) -> RepositoryError {
    let message = match err.into_service_error() {
        QueryError::ResourceNotFoundException(_) => "Table not found".to_string(),
        QueryError::ProvisionedThroughputExceededException(_) => {
            "Throughput exceeded".to_string()
        }
        QueryError::RequestLimitExceeded(_) => "Request limit exceeded".to_string(),
        QueryError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!("Query failed: {:?}", err),
    };
    RepositoryError::BackendRequestFailure(message)
}

/// Map a ListTables SDK error to RepositoryError.
pub fn map_list_tables_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ListTablesError, R>,
) -> RepositoryError {
    let message = match err.into_service_error() {
        ListTablesError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!("ListTables failed: {:?}", err),
    };
    RepositoryError::BackendUnavailable(message)
}

/// Map a CreateTable SDK error to RepositoryError.
pub fn map_create_table_error(err: CreateTableError, table_name: &str) -> RepositoryError {
    let message = match err {
        CreateTableError::LimitExceededException(_) => {
            format!("Table limit exceeded while creating {table_name}")
        }
        CreateTableError::InternalServerError(_) => "DynamoDB internal server error".to_string(),
        err => format!("CreateTable {table_name} failed: {:?}", err),
    };
    RepositoryError::BackendUnavailable(message)
}

/// Map a request builder error to RepositoryError.
pub fn map_build_error(err: impl std::fmt::Display) -> RepositoryError {
    RepositoryError::BackendUnavailable(format!("Invalid request: {err}"))
}
