//! Serialization of [`Property`].
//!
//! An object serializer decides whether to write a key before it writes the
//! value, and a written key cannot be taken back. Absent properties are
//! therefore dropped through the omit predicate
//! [`Property::is_absent`](crate::Property::is_absent):
//!
//! ```rust
//! use property_core::Property;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Patch {
//!     #[serde(skip_serializing_if = "Property::is_absent")]
//!     title: Property<String>,
//!     #[serde(skip_serializing_if = "Property::is_absent")]
//!     rank: Property<u32>,
//! }
//!
//! let patch = Patch { title: Property::null(), rank: Property::absent() };
//! assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"title":null}"#);
//! ```
//!
//! `Null` is written as `null` and `Value(v)` exactly as `v` would be on its
//! own. An `Absent` that still reaches the serializer is an error.

use crate::property::Property;
use serde::ser::{Error, Serialize, Serializer};

/// Error message for an absent property that was not skipped.
pub(crate) const ABSENT_NOT_SKIPPED: &str = "absent property cannot be serialized; \
     mark the field with #[serde(skip_serializing_if = \"Property::is_absent\")]";

impl<T> Serialize for Property<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Absent => Err(S::Error::custom(ABSENT_NOT_SKIPPED)),
            Self::Null => serializer.serialize_none(),
            Self::Value(value) => serializer.serialize_some(value),
        }
    }
}
