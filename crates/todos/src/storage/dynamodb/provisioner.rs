//! Table provisioning against DynamoDB.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use todos_core::storage::schema::{
    self, calculate_provision_plan, AttributeType, KeyAttribute, ProvisionPlan,
};
use todos_core::storage::{ProvisionOutcome, Result, TableProvisioner, TableSchema};

use super::error::{map_build_error, map_create_table_error, map_list_tables_error};

/// Creates the todos table when it is missing.
#[derive(Debug, Clone)]
pub struct DynamoDbProvisioner {
    client: Client,
}

impl DynamoDbProvisioner {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists every table name, following `ListTables` pagination.
    async fn list_table_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut start_table_name: Option<String> = None;

        loop {
            let response = self
                .client
                .list_tables()
                .set_exclusive_start_table_name(start_table_name.take())
                .send()
                .await
                .map_err(map_list_tables_error)?;

            names.extend(response.table_names().iter().cloned());

            match response.last_evaluated_table_name() {
                Some(name) if !name.is_empty() => start_table_name = Some(name.to_string()),
                _ => break,
            }
        }

        Ok(names)
    }

    /// Issues the CreateTable request. Returns once DynamoDB accepts it; the
    /// table may still be in `CREATING` state.
    async fn create_table(&self, schema: &TableSchema) -> Result<ProvisionOutcome> {
        let key_schema = vec![
            key_schema_element(&schema.partition_key, KeyType::Hash)?,
            key_schema_element(&schema.sort_key, KeyType::Range)?,
        ];
        let attribute_definitions = vec![
            attribute_definition(&schema.partition_key)?,
            attribute_definition(&schema.sort_key)?,
        ];

        let result = self
            .client
            .create_table()
            .table_name(&schema.table_name)
            .set_key_schema(Some(key_schema))
            .set_attribute_definitions(Some(attribute_definitions))
            .billing_mode(to_billing_mode(schema.billing_mode))
            .send()
            .await;

        match result {
            Ok(_) => Ok(ProvisionOutcome::Created),
            Err(err) => {
                let err = err.into_service_error();
                // Another instance created it between our listing and now.
                if err.is_resource_in_use_exception() {
                    Ok(ProvisionOutcome::AlreadyExists)
                } else {
                    Err(map_create_table_error(err, &schema.table_name))
                }
            }
        }
    }
}

#[async_trait]
impl TableProvisioner for DynamoDbProvisioner {
    async fn ensure_table(&self, schema: &TableSchema) -> Result<ProvisionOutcome> {
        let existing = self.list_table_names().await?;

        match calculate_provision_plan(&existing, schema) {
            ProvisionPlan::AlreadyExists { .. } => Ok(ProvisionOutcome::AlreadyExists),
            ProvisionPlan::CreateTable { schema } => {
                tracing::info!(table = %schema.table_name, "Creating table");
                self.create_table(&schema).await
            }
        }
    }
}

fn key_schema_element(attribute: &KeyAttribute, key_type: KeyType) -> Result<KeySchemaElement> {
    KeySchemaElement::builder()
        .attribute_name(&attribute.name)
        .key_type(key_type)
        .build()
        .map_err(map_build_error)
}

fn attribute_definition(attribute: &KeyAttribute) -> Result<AttributeDefinition> {
    AttributeDefinition::builder()
        .attribute_name(&attribute.name)
        .attribute_type(to_scalar_type(attribute.attribute_type))
        .build()
        .map_err(map_build_error)
}

fn to_scalar_type(attribute_type: AttributeType) -> ScalarAttributeType {
    match attribute_type {
        AttributeType::String => ScalarAttributeType::S,
    }
}

fn to_billing_mode(billing_mode: schema::BillingMode) -> BillingMode {
    match billing_mode {
        schema::BillingMode::PayPerRequest => BillingMode::PayPerRequest,
    }
}
