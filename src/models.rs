//! Frontend Models
//!
//! Data structures matching the items API.

use serde::{Deserialize, Serialize};

/// Item data structure (matches the server's records)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub count: i32,
}

/// Envelope for GET /api/items; a missing `items` field means an empty list
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemsResponse {
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Envelope for GET /api/items/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct ItemResponse {
    pub item: Item,
}

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPayload {
    pub name: String,
    pub price: f64,
    pub count: i32,
}

/// Remove one item from a fetched collection by id
///
/// The list page patches its local state with this after a confirmed
/// delete, without a re-fetch. An unknown id leaves the list unchanged.
pub fn remove_item(items: &mut Vec<Item>, id: u32) {
    items.retain(|item| item.id != id);
}

/// Shown when a required field is left empty
pub const REQUIRED_FIELDS_MSG: &str = "All fields are required.";

/// Raw text-field values from the create/edit forms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub price: String,
    pub count: String,
}

impl ItemDraft {
    pub fn new(name: String, price: String, count: String) -> Self {
        Self { name, price, count }
    }

    /// Validate non-emptiness and coerce the numeric fields.
    ///
    /// Numeric parse failures are not rejected here: a bad `price` becomes
    /// NaN (serialized as null) and a bad `count` becomes 0, both sent to
    /// the server as-is. The number inputs keep those paths unreachable
    /// through normal use.
    pub fn validate(&self) -> Result<ItemPayload, String> {
        if self.name.is_empty() || self.price.is_empty() || self.count.is_empty() {
            return Err(REQUIRED_FIELDS_MSG.to_string());
        }
        Ok(ItemPayload {
            name: self.name.clone(),
            price: self.price.parse().unwrap_or(f64::NAN),
            count: self.count.parse().unwrap_or(0),
        })
    }
}

/// Per-operation async status
///
/// Each async flow on a page holds its own status signal so an in-flight
/// fetch and an in-flight submit cannot clobber each other's indicator.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<String> {
        match self {
            LoadStatus::Failed(msg) => Some(msg.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_any_empty_field() {
        let drafts = [
            ItemDraft::new("".into(), "1.5".into(), "2".into()),
            ItemDraft::new("A".into(), "".into(), "2".into()),
            ItemDraft::new("A".into(), "1.5".into(), "".into()),
        ];
        for draft in drafts {
            let err = draft.validate().unwrap_err();
            assert_eq!(err, REQUIRED_FIELDS_MSG);
        }
    }

    #[test]
    fn validate_coerces_numeric_fields() {
        let draft = ItemDraft::new("A".into(), "1.5".into(), "2".into());
        let payload = draft.validate().unwrap();
        assert_eq!(payload.name, "A");
        assert_eq!(payload.price, 1.5);
        assert_eq!(payload.count, 2);
    }

    #[test]
    fn payload_serializes_with_numeric_coercion() {
        let payload = ItemDraft::new("A".into(), "1.5".into(), "2".into())
            .validate()
            .unwrap();
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":"A","price":1.5,"count":2}"#);
    }

    #[test]
    fn bad_price_falls_through_as_nan() {
        let draft = ItemDraft::new("A".into(), "abc".into(), "2".into());
        let payload = draft.validate().unwrap();
        assert!(payload.price.is_nan());
        // serde_json writes non-finite floats as null
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":"A","price":null,"count":2}"#);
    }

    #[test]
    fn items_envelope_defaults_to_empty() {
        let parsed: ItemsResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.items.is_empty());

        let parsed: ItemsResponse = serde_json::from_str(r#"{"items":[]}"#).unwrap();
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn items_envelope_parses_records() {
        let parsed: ItemsResponse =
            serde_json::from_str(r#"{"items":[{"id":1,"name":"Widget","price":9.99,"count":5}]}"#)
                .unwrap();
        assert_eq!(parsed.items.len(), 1);
        let item = &parsed.items[0];
        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Widget");
        assert_eq!(item.price, 9.99);
        assert_eq!(item.count, 5);
    }

    #[test]
    fn item_envelope_parses_record() {
        let parsed: ItemResponse =
            serde_json::from_str(r#"{"item":{"id":7,"name":"Gadget","price":3.0,"count":1}}"#)
                .unwrap();
        assert_eq!(parsed.item.id, 7);
        assert_eq!(parsed.item.name, "Gadget");
    }

    fn sample_item(id: u32, name: &str) -> Item {
        Item {
            id,
            name: name.into(),
            price: 9.99,
            count: 5,
        }
    }

    #[test]
    fn remove_item_drops_only_the_matching_id() {
        let mut items = vec![sample_item(1, "Widget"), sample_item(2, "Gadget")];
        remove_item(&mut items, 1);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 2);
        assert_eq!(items[0].name, "Gadget");
    }

    #[test]
    fn remove_item_with_unknown_id_keeps_the_list() {
        let mut items = vec![sample_item(1, "Widget"), sample_item(2, "Gadget")];
        remove_item(&mut items, 99);
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn load_status_accessors() {
        assert!(LoadStatus::Loading.is_loading());
        assert!(!LoadStatus::Idle.is_loading());
        assert!(!LoadStatus::Loaded.is_loading());
        assert_eq!(LoadStatus::Failed("boom".into()).error().as_deref(), Some("boom"));
        assert_eq!(LoadStatus::Loaded.error(), None);
    }
}
