//! Core library for ak2geojson
//!
//! This crate implements the **Functional Core** of the ak2geojson application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`ak2geojson_core`** (this crate): Pure transformation functions with zero I/O
//! - **`ak2geojson`**: HTTP fetching, S3 uploads and orchestration (the Imperative Shell)
//!
//! Everything here can be tested with fixture data; no mocking required.
//!
//! # Module Organization
//!
//! - [`actionkit`]: Wire types for the ActionKit event REST API
//! - [`geojson`]: GeoJSON output types and the event → Feature transform
//! - [`pagination`]: Building the first page URL and resolving `meta.next` links
//! - [`destination`]: Parsing `s3://bucket/key` destinations
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use ak2geojson_core::actionkit::EventPage;
//! use ak2geojson_core::geojson::{transform_event, FeatureCollection};
//!
//! let page: EventPage = serde_json::from_str(body)?;
//! let mut collection = FeatureCollection::new();
//! for event in page.objects {
//!     let position = collection.len();
//!     collection.push(transform_event(event, position)?);
//! }
//! let bytes = collection.to_compact_json()?;
//! ```

pub mod actionkit;
pub mod destination;
pub mod geojson;
pub mod pagination;
