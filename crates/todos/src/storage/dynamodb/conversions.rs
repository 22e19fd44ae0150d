//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between `AttributeValue` maps and the
//! string rows the item store works with.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use todos_core::storage::keys::{PARTITION_KEY_ATTR, SORT_KEY_ATTR};
use todos_core::storage::{RepositoryError, StoredItem};

/// Build a full DynamoDB item from its keys and string attributes.
pub fn to_item(
    partition_key: &str,
    sort_key: &str,
    attributes: HashMap<String, String>,
) -> HashMap<String, AttributeValue> {
    let mut item: HashMap<String, AttributeValue> = attributes
        .into_iter()
        .map(|(name, value)| (name, AttributeValue::S(value)))
        .collect();

    // Keys
    item.insert(
        PARTITION_KEY_ATTR.to_string(),
        AttributeValue::S(partition_key.to_string()),
    );
    item.insert(
        SORT_KEY_ATTR.to_string(),
        AttributeValue::S(sort_key.to_string()),
    );

    item
}

/// Placeholder-based projection expression and its attribute names.
///
/// Placeholders keep attribute names clear of DynamoDB reserved words.
pub fn projection_expression(projection: &[&str]) -> (String, HashMap<String, String>) {
    let names: HashMap<String, String> = projection
        .iter()
        .enumerate()
        .map(|(i, name)| (format!("#p{i}"), (*name).to_string()))
        .collect();

    let expression = (0..projection.len())
        .map(|i| format!("#p{i}"))
        .collect::<Vec<_>>()
        .join(",");

    (expression, names)
}

/// Convert a queried DynamoDB item to a [`StoredItem`].
///
/// Key attributes are dropped from `attributes`; every other attribute must
/// be a string.
pub fn item_to_stored(
    item: &HashMap<String, AttributeValue>,
) -> Result<StoredItem, RepositoryError> {
    let sort_key = get_string(item, SORT_KEY_ATTR)?;

    let attributes = item
        .iter()
        .filter(|(name, _)| name.as_str() != PARTITION_KEY_ATTR && name.as_str() != SORT_KEY_ATTR)
        .map(|(name, value)| {
            value
                .as_s()
                .map(|s| (name.clone(), s.clone()))
                .map_err(|_| not_a_string(&sort_key, name))
        })
        .collect::<Result<HashMap<_, _>, _>>()?;

    Ok(StoredItem {
        sort_key,
        attributes,
    })
}

fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .ok_or_else(|| RepositoryError::MalformedItem(format!("missing attribute {key}")))?
        .as_s()
        .cloned()
        .map_err(|_| RepositoryError::MalformedItem(format!("attribute {key} is not a string")))
}

fn not_a_string(sort_key: &str, name: &str) -> RepositoryError {
    RepositoryError::MalformedItem(format!(
        "attribute {name} of item {sort_key} is not a string"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> AttributeValue {
        AttributeValue::S(value.to_string())
    }

    #[test]
    fn test_to_item_adds_keys_and_attributes() {
        let item = to_item(
            "U#u1",
            "T#1000#abc",
            HashMap::from([("title".to_string(), "Buy milk".to_string())]),
        );

        assert_eq!(item.len(), 3);
        assert_eq!(item.get("PK"), Some(&s("U#u1")));
        assert_eq!(item.get("SK"), Some(&s("T#1000#abc")));
        assert_eq!(item.get("title"), Some(&s("Buy milk")));
    }

    #[test]
    fn test_to_item_keys_win_over_attributes() {
        let item = to_item(
            "U#u1",
            "T#1000#abc",
            HashMap::from([("PK".to_string(), "spoofed".to_string())]),
        );

        assert_eq!(item.get("PK"), Some(&s("U#u1")));
    }

    #[test]
    fn test_projection_expression() {
        let (expression, names) = projection_expression(&["SK", "title"]);

        assert_eq!(expression, "#p0,#p1");
        assert_eq!(names.get("#p0").map(String::as_str), Some("SK"));
        assert_eq!(names.get("#p1").map(String::as_str), Some("title"));
    }

    #[test]
    fn test_item_to_stored() {
        let item = HashMap::from([
            ("SK".to_string(), s("T#1000#abc")),
            ("title".to_string(), s("Buy milk")),
        ]);

        let stored = item_to_stored(&item).unwrap();
        assert_eq!(stored.sort_key, "T#1000#abc");
        assert_eq!(stored.attribute("title"), Some("Buy milk"));
        assert_eq!(stored.attributes.len(), 1);
    }

    #[test]
    fn test_item_to_stored_drops_partition_key() {
        let item = HashMap::from([
            ("PK".to_string(), s("U#u1")),
            ("SK".to_string(), s("T#1000#abc")),
        ]);

        assert!(item_to_stored(&item).unwrap().attributes.is_empty());
    }

    #[test]
    fn test_item_to_stored_missing_sort_key() {
        let item = HashMap::from([("title".to_string(), s("Buy milk"))]);

        assert!(matches!(
            item_to_stored(&item),
            Err(RepositoryError::MalformedItem(_))
        ));
    }

    #[test]
    fn test_item_to_stored_non_string_attribute() {
        let item = HashMap::from([
            ("SK".to_string(), s("T#1000#abc")),
            ("title".to_string(), AttributeValue::N("42".to_string())),
        ]);

        assert!(matches!(
            item_to_stored(&item),
            Err(RepositoryError::MalformedItem(msg)) if msg.contains("title")
        ));
    }
}
