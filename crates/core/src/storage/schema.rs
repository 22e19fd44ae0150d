//! Table schema and provisioning plans (pure data, no I/O).

use super::keys::{PARTITION_KEY_ATTR, SORT_KEY_ATTR};

/// Schema of the backing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// Scalar attribute types usable in a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

/// Capacity mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableSchema {
    /// Returns the todos table schema: string `PK` hash key, string `SK`
    /// range key, on-demand capacity.
    pub fn todos(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            partition_key: KeyAttribute {
                name: PARTITION_KEY_ATTR.to_string(),
                attribute_type: AttributeType::String,
            },
            sort_key: KeyAttribute {
                name: SORT_KEY_ATTR.to_string(),
                attribute_type: AttributeType::String,
            },
            billing_mode: BillingMode::PayPerRequest,
        }
    }
}

/// What needs to happen for the table to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { schema: TableSchema },
    /// Table is already there, nothing to do.
    AlreadyExists { table_name: String },
}

/// Result of an `ensure_table` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created,
    AlreadyExists,
}

/// Pure function: decide whether the desired table must be created, given
/// the names of the tables that currently exist.
pub fn calculate_provision_plan<S: AsRef<str>>(
    existing_tables: &[S],
    desired: &TableSchema,
) -> ProvisionPlan {
    let exists = existing_tables
        .iter()
        .any(|name| name.as_ref() == desired.table_name);

    if exists {
        ProvisionPlan::AlreadyExists {
            table_name: desired.table_name.clone(),
        }
    } else {
        ProvisionPlan::CreateTable {
            schema: desired.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todos_schema_uses_string_composite_key() {
        let schema = TableSchema::todos("todos");
        assert_eq!(schema.table_name, "todos");
        assert_eq!(schema.partition_key.name, "PK");
        assert_eq!(schema.partition_key.attribute_type, AttributeType::String);
        assert_eq!(schema.sort_key.name, "SK");
        assert_eq!(schema.sort_key.attribute_type, AttributeType::String);
        assert_eq!(schema.billing_mode, BillingMode::PayPerRequest);
    }

    #[test]
    fn plan_creates_missing_table() {
        let schema = TableSchema::todos("todos");
        let plan = calculate_provision_plan(&["other", "more"], &schema);
        assert_eq!(plan, ProvisionPlan::CreateTable { schema });
    }

    #[test]
    fn plan_creates_when_no_tables_exist() {
        let schema = TableSchema::todos("todos");
        let existing: Vec<String> = Vec::new();
        assert!(matches!(
            calculate_provision_plan(&existing, &schema),
            ProvisionPlan::CreateTable { .. }
        ));
    }

    #[test]
    fn plan_skips_existing_table() {
        let schema = TableSchema::todos("todos");
        let existing = vec!["audit".to_string(), "todos".to_string()];
        assert_eq!(
            calculate_provision_plan(&existing, &schema),
            ProvisionPlan::AlreadyExists {
                table_name: "todos".to_string()
            }
        );
    }

    #[test]
    fn plan_matches_names_exactly() {
        let schema = TableSchema::todos("todos");
        assert!(matches!(
            calculate_provision_plan(&["todos-dev", "Todos"], &schema),
            ProvisionPlan::CreateTable { .. }
        ));
    }
}
