//! DynamoDB storage backend.
//!
//! Implements [`ItemStore`](todos_core::storage::ItemStore) and
//! [`TableProvisioner`](todos_core::storage::TableProvisioner) with
//! `aws-sdk-dynamodb`.

mod client;
mod conversions;
mod error;
mod provisioner;
mod store;

pub use client::create_client;
pub use provisioner::DynamoDbProvisioner;
pub use store::DynamoDbItemStore;
