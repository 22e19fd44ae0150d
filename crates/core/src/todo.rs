use serde::{Deserialize, Serialize};

/// A single todo owned by one user.
///
/// Todos are created once and never updated; `timestamp` (milliseconds since
/// the Unix epoch) is the only ordering criterion within a user's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub timestamp: i64,
}

impl Todo {
    /// Creates a new todo.
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        title: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            title: title.into(),
            timestamp,
        }
    }
}
