//! Key codec for the single-table layout.
//!
//! Pure functions for building and parsing partition and sort keys.
//! The field order below is persisted in every stored row; changing it breaks
//! reads of existing data.
//!
//! Components are joined without escaping, so a user id or todo id containing
//! [`SEPARATOR`] does not round-trip.

use super::{RepositoryError, Result};

// ============================================================================
// Attribute names
// ============================================================================

pub const PARTITION_KEY_ATTR: &str = "PK";
pub const SORT_KEY_ATTR: &str = "SK";
pub const TITLE_ATTR: &str = "title";

// ============================================================================
// Key prefixes
// ============================================================================

pub const SEPARATOR: char = '#';
pub const USER_PREFIX: &str = "U";
pub const TODO_PREFIX: &str = "T";

/// Generate the partition key holding all of a user's todos.
///
/// Pattern: `U#<user_id>`
pub fn user_pk(user_id: &str) -> String {
    format!("{USER_PREFIX}{SEPARATOR}{user_id}")
}

/// Generate the sort key for a todo.
///
/// Pattern: `T#<timestamp>#<todo_id>`
///
/// The timestamp is rendered in plain decimal, so lexicographic order matches
/// numeric order only between timestamps with the same number of digits.
pub fn todo_sk(timestamp: i64, todo_id: &str) -> String {
    format!("{TODO_PREFIX}{SEPARATOR}{timestamp}{SEPARATOR}{todo_id}")
}

/// Parse a todo sort key back into `(timestamp, todo_id)`.
pub fn decode_todo_sk(sort_key: &str) -> Result<(i64, String)> {
    let fields: Vec<&str> = sort_key.split(SEPARATOR).collect();

    let [prefix, timestamp, todo_id] = fields.as_slice() else {
        return Err(RepositoryError::malformed_key(
            sort_key,
            format!("expected 3 fields, found {}", fields.len()),
        ));
    };

    if *prefix != TODO_PREFIX {
        return Err(RepositoryError::malformed_key(
            sort_key,
            format!("expected prefix {TODO_PREFIX:?}, found {prefix:?}"),
        ));
    }

    let timestamp = timestamp.parse::<i64>().map_err(|e| {
        RepositoryError::malformed_key(sort_key, format!("invalid timestamp {timestamp:?}: {e}"))
    })?;

    Ok((timestamp, (*todo_id).to_string()))
}
