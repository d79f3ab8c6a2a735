//! Tri-state property fields for `serde_json` documents.
//!
//! `property-core` covers derived structs, where serde itself tells a
//! missing key apart from a present one. This crate covers documents that
//! stay as `serde_json::Value`: the object's key set is consulted first,
//! and a field's codec only runs when its key is present.
//!
//! # Modules
//!
//! - [`field`] - [`PropertyField`], a JSON key bound to a typed codec
//! - [`registry`] - [`PropertyRegistry`], the table of fields for a document
//!
//! # Example
//!
//! ```rust
//! use property_core::Property;
//! use property_json::PropertyRegistry;
//! use serde_json::json;
//!
//! let mut registry = PropertyRegistry::new();
//! registry.register::<String>("title").unwrap();
//! registry.register::<i64>("rank").unwrap();
//!
//! let props = registry.decode(&json!({ "rank": 3 })).unwrap();
//! assert_eq!(props["title"], Property::Absent);
//! assert_eq!(props["rank"], Property::Value(json!(3)));
//! ```

pub mod field;
pub mod registry;

pub use field::{FieldCodec, FieldError, PropertyField};
pub use registry::{PropertyMap, PropertyRegistry, RegistryError};
