//! Types for ActionKit event API responses

use serde::{Deserialize, Deserializer};
use serde_json::Value;

// =============================================================================
// API Response Types (Deserialization)
// =============================================================================

/// One page of `GET /rest/v1/event/` results
///
/// Records are kept as raw JSON so that a record missing a field fails on its
/// own, with its position and id, instead of failing the whole page.
#[derive(Debug, Deserialize, Clone)]
pub struct EventPage {
    pub objects: Vec<serde_json::Value>,
    #[serde(default)]
    pub meta: PageMeta,
}

/// Pagination metadata of a page
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct PageMeta {
    /// Server-relative URL of the next page
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total_count: Option<u64>,
}

/// A single event record
///
/// Title, address and coordinate values are carried as raw JSON so they reach
/// the output unchanged, whatever their type. Only an absent key is an error.
/// `ends_at_utc` may be absent, `null` or empty.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ActionKitEvent {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(deserialize_with = "required")]
    pub title: Value,
    #[serde(deserialize_with = "required")]
    pub address1: Value,
    #[serde(deserialize_with = "required")]
    pub address2: Value,
    #[serde(deserialize_with = "required")]
    pub city: Value,
    #[serde(deserialize_with = "required")]
    pub state: Value,
    #[serde(deserialize_with = "required")]
    pub zip: Value,
    #[serde(deserialize_with = "required")]
    pub latitude: Value,
    #[serde(deserialize_with = "required")]
    pub longitude: Value,
    pub starts_at_utc: String,
    #[serde(default)]
    pub ends_at_utc: Option<String>,
}

/// Deserialize a key that must exist, even when its value is `null`.
///
/// Using `deserialize_with` stops serde from accepting an absent key.
fn required<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_event_json() -> serde_json::Value {
        json!({
            "id": 42,
            "title": "Rally",
            "address1": "1 Main St",
            "address2": null,
            "city": "San Francisco",
            "state": "CA",
            "zip": "94110",
            "latitude": 37.8,
            "longitude": -122.4,
            "starts_at_utc": "2021-01-01T18:00:00",
            "ends_at_utc": null,
            "resource_uri": "/rest/v1/event/42/"
        })
    }

    #[test]
    fn test_event_allows_null_values() {
        let event: ActionKitEvent = serde_json::from_value(sample_event_json()).unwrap();

        assert_eq!(event.id, Some(42));
        assert_eq!(event.address2, Value::Null);
        assert_eq!(event.ends_at_utc, None);
        assert_eq!(event.longitude, json!(-122.4));
    }

    #[test]
    fn test_event_allows_absent_end_time() {
        let mut value = sample_event_json();
        value.as_object_mut().unwrap().remove("ends_at_utc");

        let event: ActionKitEvent = serde_json::from_value(value).unwrap();
        assert_eq!(event.ends_at_utc, None);
    }

    #[test]
    fn test_event_keeps_values_of_any_type() {
        let mut value = sample_event_json();
        let object = value.as_object_mut().unwrap();
        object.insert("zip".to_string(), json!(94110));
        object.insert("latitude".to_string(), Value::Null);
        object.insert("longitude".to_string(), json!(-122));

        let event: ActionKitEvent = serde_json::from_value(value).unwrap();
        assert_eq!(event.zip, json!(94110));
        assert_eq!(event.latitude, Value::Null);
        assert_eq!(event.longitude, json!(-122));
    }

    #[test]
    fn test_event_rejects_absent_coordinate() {
        let mut value = sample_event_json();
        value.as_object_mut().unwrap().remove("latitude");

        let err = serde_json::from_value::<ActionKitEvent>(value).unwrap_err();
        assert!(err.to_string().contains("latitude"), "{err}");
    }

    #[test]
    fn test_event_rejects_absent_address_key() {
        let mut value = sample_event_json();
        value.as_object_mut().unwrap().remove("address2");

        let err = serde_json::from_value::<ActionKitEvent>(value).unwrap_err();
        assert!(err.to_string().contains("address2"), "{err}");
    }

    #[test]
    fn test_event_rejects_absent_title() {
        let mut value = sample_event_json();
        value.as_object_mut().unwrap().remove("title");

        let err = serde_json::from_value::<ActionKitEvent>(value).unwrap_err();
        assert!(err.to_string().contains("title"), "{err}");
    }

    #[test]
    fn test_page_without_meta() {
        let page: EventPage = serde_json::from_value(json!({ "objects": [] })).unwrap();

        assert!(page.objects.is_empty());
        assert_eq!(page.meta, PageMeta::default());
    }

    #[test]
    fn test_page_with_null_next() {
        let page: EventPage = serde_json::from_value(json!({
            "meta": { "next": null, "total_count": 1, "limit": 20, "offset": 0 },
            "objects": [sample_event_json()]
        }))
        .unwrap();

        assert_eq!(page.objects.len(), 1);
        assert_eq!(page.meta.next, None);
        assert_eq!(page.meta.total_count, Some(1));
    }

    #[test]
    fn test_page_requires_objects() {
        let result = serde_json::from_value::<EventPage>(json!({ "meta": {} }));
        assert!(result.is_err());
    }
}
