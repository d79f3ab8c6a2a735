//! json-undefined
//!
//! Tell a missing JSON key apart from an explicit `null` when binding
//! objects with serde.
//!
//! # Features
//!
//! - Tri-state fields: [`Property`] is `Absent`, `Null` or `Value(T)`
//! - serde integration: derived structs decode and encode all three states
//! - Dynamic documents: named field codecs and a registry for `serde_json::Value`
//!
//! # Crates
//!
//! - `property_core` - the tri-state value and its serde adapters
//! - `property_json` - field codecs and registry (re-exported as [`json`])
//!
//! # Usage
//!
//! ```rust
//! use json_undefined::Property;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Serialize, Deserialize)]
//! struct ProfilePatch {
//!     #[serde(default, skip_serializing_if = "Property::is_absent")]
//!     bio: Property<String>,
//!     #[serde(default, skip_serializing_if = "Property::is_absent")]
//!     age: Property<u8>,
//! }
//!
//! let patch: ProfilePatch = serde_json::from_str(r#"{"bio": null}"#).unwrap();
//! assert!(patch.bio.is_null());
//! assert!(patch.age.is_absent());
//! assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"bio":null}"#);
//! ```

pub use property_core::{Property, PropertyError, PropertyState};

// Re-export the JSON object layer for convenience
pub use property_json as json;
