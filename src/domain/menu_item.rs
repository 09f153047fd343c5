use serde::{Deserialize, Deserializer, Serialize};

/// Signed so that any integer in a request path parses; the store only hands
/// out positive ids, so negative ones are simply never found.
pub type MenuItemId = i64;

/// A dish on the restaurant menu.
///
/// Every field is optional on the wire: a missing field deserializes to its
/// default, an explicit `null` does too, and `id` is absent until the store
/// assigns one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuItem {
    pub id: Option<MenuItemId>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl MenuItem {
    /// Creates a new MenuItem instance.
    ///
    /// # Notes
    /// The `id` field starts out empty and is set by the store on insert.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
        }
    }
}

/// Items inserted at startup, in insertion order.
pub fn seed_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(
            "Margherita Pizza",
            "Classic pizza with tomato sauce, mozzarella, and fresh basil",
            12.99,
            "Main Course",
        ),
        MenuItem::new(
            "Caesar Salad",
            "Crisp romaine lettuce with parmesan cheese and croutons",
            8.99,
            "Appetizer",
        ),
        MenuItem::new(
            "Grilled Salmon",
            "Fresh Atlantic salmon with lemon butter sauce and vegetables",
            18.99,
            "Main Course",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let item: MenuItem = serde_json::from_str(r#"{"name":"Iced Tea","price":2.5}"#).unwrap();
        assert_eq!(item.id, None);
        assert_eq!(item.name, "Iced Tea");
        assert_eq!(item.description, "");
        assert_eq!(item.price, 2.5);
        assert_eq!(item.category, "");
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let item: MenuItem =
            serde_json::from_str(r#"{"name":"x","description":null,"price":null,"category":null}"#)
                .unwrap();
        assert_eq!(item.name, "x");
        assert_eq!(item.description, "");
        assert_eq!(item.price, 0.0);
        assert_eq!(item.category, "");
    }

    #[test]
    fn test_wrongly_typed_price_is_rejected() {
        assert!(serde_json::from_str::<MenuItem>(r#"{"price":"free"}"#).is_err());
    }

    #[test]
    fn test_serializes_with_id() {
        let mut item = MenuItem::new("Soup", "Hot", 4.0, "Starter");
        item.id = Some(7);
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 7,
                "name": "Soup",
                "description": "Hot",
                "price": 4.0,
                "category": "Starter"
            })
        );
    }
}
