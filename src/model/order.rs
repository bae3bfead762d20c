/// Represents a customer order as seen by the receipt renderers.
///
/// An order is an identifier plus an open set of string fields (`item`,
/// `quantity`, `customer`, ...). Renderers decide which fields they need;
/// the order itself imposes no schema.
///
/// Orders are immutable once built: there are no setters, and renderers only
/// ever receive `&Order`.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    fields: BTreeMap<String, String>,
}

impl Order {
    /// Creates a new Order from an identifier and a complete field set.
    ///
    /// # Arguments
    /// * `id` - Order identifier
    /// * `fields` - Key/value pairs describing the purchase
    pub fn new<K, V>(id: u32, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            id: OrderId(id),
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Starts building an order field by field.
    pub fn builder(id: u32) -> OrderBuilder {
        OrderBuilder {
            id: OrderId(id),
            fields: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Looks up a single field by name (case-sensitive).
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Iterates over all fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Builder for [`Order`]. Later calls to [`field`](OrderBuilder::field) with
/// the same key replace the earlier value.
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    id: OrderId,
    fields: BTreeMap<String, String>,
}

impl OrderBuilder {
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Order {
        Order {
            id: self.id,
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_fields() {
        let order = Order::builder(101)
            .field("item", "Laptop")
            .field("quantity", "1")
            .build();

        assert_eq!(order.id(), OrderId(101));
        assert_eq!(order.field("item"), Some("Laptop"));
        assert_eq!(order.field("quantity"), Some("1"));
        assert_eq!(order.field("Item"), None);
        assert_eq!(order.len(), 2);
    }

    #[test]
    fn test_builder_last_field_wins() {
        let order = Order::builder(7)
            .field("item", "Pen")
            .field("item", "Pencil")
            .build();

        assert_eq!(order.field("item"), Some("Pencil"));
        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_fields_iterate_in_key_order() {
        let order = Order::new(5, [("zeta", "z"), ("alpha", "a"), ("mid", "m")]);
        let keys: Vec<&str> = order.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_order_without_fields() {
        let order = Order::builder(1).build();
        assert!(order.is_empty());
        assert_eq!(order.id().to_string(), "1");
    }
}
