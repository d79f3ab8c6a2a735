//! Tri-state properties for serde.
//!
//! This crate provides [`Property`], a value that tells apart the three ways
//! a key can show up in a JSON object:
//!
//! - [`Property::Absent`] - the key was missing
//! - [`Property::Null`] - the key was present with `null`
//! - [`Property::Value`] - the key was present with a value
//!
//! Standard binders collapse the first two into `None`, which breaks
//! PATCH-style APIs where "omitted" means "leave alone" and `null` means
//! "clear".
//!
//! # Architecture
//!
//! ```text
//! property-core (this crate)
//!    │
//!    ├─── property  (the tri-state value)
//!    ├─── de        (absent-value entry + Deserialize)
//!    └─── ser       (omit predicate + Serialize)
//!
//! property-json  (named field codecs and registry over serde_json::Map)
//! ```
//!
//! # Registration
//!
//! serde dispatches on types at compile time, so registering a
//! `Property<T>` field amounts to two attributes. `T` is resolved per field
//! by the compiler and any `T` with serde impls works, nested containers
//! included.
//!
//! ```rust
//! use property_core::Property;
//! use serde::{Deserialize, Serialize};
//! use std::collections::HashMap;
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct ArticlePatch {
//!     #[serde(default, skip_serializing_if = "Property::is_absent")]
//!     title: Property<String>,
//!     #[serde(default, skip_serializing_if = "Property::is_absent")]
//!     labels: Property<HashMap<String, Vec<u32>>>,
//! }
//!
//! let patch: ArticlePatch = serde_json::from_str(r#"{"title": null}"#).unwrap();
//! assert!(patch.title.is_null());
//! assert!(patch.labels.is_absent());
//! assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"title":null}"#);
//! ```
//!
//! - `default` routes a missing key to [`Property::Absent`]. Without it a
//!   missing key is reported as a `missing field` error.
//! - `skip_serializing_if` drops absent properties before the key is
//!   written. Without it serializing an absent property is an error.

mod de;
mod error;
mod property;
mod ser;

pub use error::PropertyError;
pub use property::{Property, PropertyState};
