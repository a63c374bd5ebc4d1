use serde::{Deserialize, Serialize};

use super::types::Item;

/// Request body for creating or replacing an item.
///
/// `id` is accepted so that clients may echo a full item back, but the store
/// never honours it: create assigns the next id and update uses the path id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl ItemPayload {
    /// Creates a payload with no id and no description.
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            price,
        }
    }

    /// Sets the description for this payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Converts the payload into an item carrying `id`, discarding any payload id.
    pub fn into_item(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_item_ignores_payload_id() {
        let payload = ItemPayload {
            id: Some(42),
            name: "Lamp".to_string(),
            description: Some("Desk lamp".to_string()),
            price: 19.5,
        };

        let item = payload.into_item(3);

        assert_eq!(item.id, 3);
        assert_eq!(item.name, "Lamp");
        assert_eq!(item.description.as_deref(), Some("Desk lamp"));
        assert_eq!(item.price, 19.5);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let payload: ItemPayload =
            serde_json::from_str(r#"{"name": "Chair", "price": 10}"#).unwrap();

        assert_eq!(payload, ItemPayload::new("Chair", 10.0));
    }

    #[test]
    fn test_deserialize_with_null_id_and_description() {
        let payload: ItemPayload = serde_json::from_str(
            r#"{"id": null, "name": "Chair", "description": null, "price": 10.25}"#,
        )
        .unwrap();

        assert_eq!(payload.id, None);
        assert_eq!(payload.description, None);
    }

    #[test]
    fn test_deserialize_rejects_missing_price() {
        let result = serde_json::from_str::<ItemPayload>(r#"{"name": "Chair"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_price() {
        let result = serde_json::from_str::<ItemPayload>(r#"{"name": "Chair", "price": "ten"}"#);
        assert!(result.is_err());
    }
}
