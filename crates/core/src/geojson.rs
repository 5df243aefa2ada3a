//! GeoJSON output types and the ActionKit event → Feature transform

use crate::actionkit::ActionKitEvent;
use serde::Serialize;
use serde_json::Value;

/// Error raised when a record cannot be mapped to a Feature
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Invalid event at position {position}{}: {source}", describe_id(.id))]
    InvalidEvent {
        position: usize,
        id: Option<u64>,
        #[source]
        source: serde_json::Error,
    },
}

fn describe_id(id: &Option<u64>) -> String {
    id.map(|id| format!(" (id {id})")).unwrap_or_default()
}

// =============================================================================
// Output Domain Types (GeoJSON)
// =============================================================================

/// Value of the GeoJSON `type` member
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum GeoJsonType {
    Feature,
    FeatureCollection,
    Point,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub kind: GeoJsonType,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: GeoJsonType,
    pub geometry: Geometry,
    pub properties: EventProperties,
}

/// Point geometry. Coordinates are `[longitude, latitude]`, as received.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: GeoJsonType,
    pub coordinates: [Value; 2],
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EventProperties {
    pub title: Value,
    pub address: Address,
    pub time: EventTime,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Address {
    pub address1: Value,
    pub address2: Value,
    pub city: Value,
    pub state: Value,
    pub zip: Value,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EventTime {
    pub starts_at: String,
    pub ends_at: Option<String>,
}

impl Geometry {
    pub fn point(longitude: Value, latitude: Value) -> Self {
        Self {
            kind: GeoJsonType::Point,
            coordinates: [longitude, latitude],
        }
    }
}

impl FeatureCollection {
    pub fn new() -> Self {
        Self {
            kind: GeoJsonType::FeatureCollection,
            features: Vec::new(),
        }
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Serialize without insignificant whitespace
    pub fn to_compact_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Pure Transformation Functions
// =============================================================================

/// Mark a naive UTC timestamp as UTC with a trailing `Z`
pub fn utc_timestamp(naive: &str) -> String {
    format!("{naive}Z")
}

/// Map a typed event to a Feature
///
/// An empty, null or absent `ends_at_utc` becomes a null `ends_at`.
pub fn event_to_feature(event: ActionKitEvent) -> Feature {
    let ends_at = event
        .ends_at_utc
        .as_deref()
        .filter(|ends| !ends.is_empty())
        .map(utc_timestamp);

    Feature {
        kind: GeoJsonType::Feature,
        geometry: Geometry::point(event.longitude, event.latitude),
        properties: EventProperties {
            title: event.title,
            address: Address {
                address1: event.address1,
                address2: event.address2,
                city: event.city,
                state: event.state,
                zip: event.zip,
            },
            time: EventTime {
                starts_at: utc_timestamp(&event.starts_at_utc),
                ends_at,
            },
        },
    }
}

/// Map a raw record from an [`EventPage`](crate::actionkit::EventPage) to a Feature
///
/// # Arguments
/// * `record` - The raw JSON record
/// * `position` - Zero-based position of the record across all pages, used in errors
pub fn transform_event(
    record: serde_json::Value,
    position: usize,
) -> Result<Feature, TransformError> {
    let id = record.get("id").and_then(serde_json::Value::as_u64);
    let event: ActionKitEvent = serde_json::from_value(record)
        .map_err(|source| TransformError::InvalidEvent {
            position,
            id,
            source,
        })?;

    Ok(event_to_feature(event))
}
