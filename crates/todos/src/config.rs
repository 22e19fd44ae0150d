use std::env;

use thiserror::Error;

/// Default number of items read per partition query.
pub const DEFAULT_QUERY_LIMIT: usize = 100;

const DEFAULT_REGION: &str = "us-east-1";

/// Errors raised while loading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("env variable not set: {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {name}: {value:?}")]
    InvalidVar { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Name of the backing table (required)
    pub table_name: String,
    /// Custom DynamoDB endpoint, e.g. a local DynamoDB (default: none)
    pub dynamodb_endpoint: Option<String>,
    /// AWS region (default: "us-east-1")
    pub region: String,
    /// Maximum items read by one partition query (default: 100)
    pub query_limit: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `TABLE_NAME` - Backing table name (required)
    /// - `AWS_DYNAMODB_ENDPOINT` - DynamoDB endpoint override (optional)
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `QUERY_LIMIT` - Items per partition query (default: 100)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let table_name = var("TABLE_NAME").ok_or(ConfigError::MissingVar("TABLE_NAME"))?;

        let query_limit = match var("QUERY_LIMIT") {
            None => DEFAULT_QUERY_LIMIT,
            Some(value) => match value.parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    return Err(ConfigError::InvalidVar {
                        name: "QUERY_LIMIT",
                        value,
                    })
                }
            },
        };

        Ok(Self {
            table_name,
            dynamodb_endpoint: var("AWS_DYNAMODB_ENDPOINT"),
            region: var("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            query_limit,
        })
    }

    /// Returns a display string for the target backend.
    #[cfg_attr(not(feature = "dynamodb"), allow(dead_code))]
    pub fn target_display(&self) -> String {
        match &self.dynamodb_endpoint {
            Some(url) => format!("Local DynamoDB ({url})"),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}
