mod error;
mod http_mapping;
pub mod keys;
mod repository;
pub mod schema;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use repository::TodoRepository;
pub use schema::{ProvisionOutcome, ProvisionPlan, TableSchema};
pub use traits::{ItemStore, StoredItem, TableProvisioner};
