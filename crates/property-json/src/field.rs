//! Named property fields over JSON objects.
//!
//! Derived structs get the absent/null split from serde itself. Documents
//! held as `serde_json::Value` have no struct to drive the decode, so a
//! [`PropertyField`] looks the key up in the object first and only decodes
//! when the key is there.

use property_core::Property;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;

/// Error type for decoding or encoding a named field.
#[derive(Debug, thiserror::Error)]
pub enum FieldError {
    /// The value under a present key could not be decoded
    #[error("Failed to decode field '{field}': {source}")]
    Decode {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// The value could not be encoded
    #[error("Failed to encode field '{field}': {source}")]
    Encode {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// A type-erased property held `Value(null)`, which has no JSON spelling
    /// distinct from `Null`
    #[error("Field '{field}' holds a null value; use Property::Null instead")]
    NullValue { field: String },

    /// The document is not a JSON object
    #[error("Expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// A property was supplied for a field that is not registered
    #[error("Field not registered: {0}")]
    UnknownField(String),
}

/// A field codec with its element type erased to `serde_json::Value`.
///
/// This is what a [`PropertyRegistry`](crate::PropertyRegistry) stores, so
/// fields of different types can share one table.
pub trait FieldCodec: Send + Sync {
    /// The JSON key this codec reads and writes.
    fn name(&self) -> &str;

    /// Human readable element type, for logs and errors.
    fn describe(&self) -> String;

    /// Read the field from `object`.
    fn decode_value(&self, object: &Map<String, Value>) -> Result<Property<Value>, FieldError>;

    /// Write the field into `object`. Absent properties write nothing.
    fn encode_value(
        &self,
        property: &Property<Value>,
        object: &mut Map<String, Value>,
    ) -> Result<(), FieldError>;
}

/// A JSON key bound to a typed property codec.
///
/// `T` is fixed when the field is created, so the decoder and encoder for
/// `T` are resolved once, up front.
///
/// # Example
///
/// ```rust
/// use property_json::PropertyField;
/// use property_core::Property;
/// use serde_json::json;
///
/// let rank = PropertyField::<u32>::new("rank");
///
/// let doc = json!({ "rank": null });
/// let object = doc.as_object().unwrap();
/// assert_eq!(rank.decode(object).unwrap(), Property::Null);
///
/// let mut out = serde_json::Map::new();
/// rank.encode(&Property::absent(), &mut out).unwrap();
/// assert!(out.is_empty());
/// ```
pub struct PropertyField<T> {
    name: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> PropertyField<T> {
    /// Create a field for the given JSON key.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            _marker: PhantomData,
        }
    }

    /// The JSON key.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn decode_error(&self, source: serde_json::Error) -> FieldError {
        FieldError::Decode {
            field: self.name.clone(),
            source,
        }
    }

    fn encode_error(&self, source: serde_json::Error) -> FieldError {
        FieldError::Encode {
            field: self.name.clone(),
            source,
        }
    }

    fn null_value_error(&self) -> FieldError {
        FieldError::NullValue {
            field: self.name.clone(),
        }
    }
}

impl<T> Clone for PropertyField<T> {
    fn clone(&self) -> Self {
        Self::new(self.name.clone())
    }
}

impl<T> fmt::Debug for PropertyField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyField")
            .field("name", &self.name)
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> PropertyField<T>
where
    T: DeserializeOwned,
{
    /// Read the field from `object`.
    ///
    /// A missing key is `Absent` without consulting `T` at all. A present key
    /// goes through the regular `Property<T>` decoder, so `null` is `Null`
    /// and anything else must decode as `T`.
    pub fn decode(&self, object: &Map<String, Value>) -> Result<Property<T>, FieldError> {
        match object.get(&self.name) {
            None => Ok(Property::default()),
            Some(value) => Property::<T>::deserialize(value).map_err(|e| self.decode_error(e)),
        }
    }
}

impl<T> PropertyField<T>
where
    T: Serialize,
{
    /// Write the field into `object`.
    ///
    /// The omit predicate is checked before the key is touched: an absent
    /// property leaves `object` as it was.
    pub fn encode(
        &self,
        property: &Property<T>,
        object: &mut Map<String, Value>,
    ) -> Result<(), FieldError> {
        if property.is_absent() {
            return Ok(());
        }
        let value = serde_json::to_value(property).map_err(|e| self.encode_error(e))?;
        object.insert(self.name.clone(), value);
        Ok(())
    }
}

impl<T> FieldCodec for PropertyField<T>
where
    T: Serialize + DeserializeOwned,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> String {
        std::any::type_name::<T>().to_string()
    }

    fn decode_value(&self, object: &Map<String, Value>) -> Result<Property<Value>, FieldError> {
        match self.decode(object)? {
            Property::Absent => Ok(Property::Absent),
            Property::Null => Ok(Property::Null),
            Property::Value(value) => {
                // Converting the decoded `T` back to JSON is still part of decoding.
                match serde_json::to_value(value).map_err(|e| self.decode_error(e))? {
                    Value::Null => Err(self.null_value_error()),
                    value => Ok(Property::Value(value)),
                }
            }
        }
    }

    fn encode_value(
        &self,
        property: &Property<Value>,
        object: &mut Map<String, Value>,
    ) -> Result<(), FieldError> {
        let typed = match property {
            Property::Absent => Property::Absent,
            Property::Null => Property::Null,
            Property::Value(Value::Null) => return Err(self.null_value_error()),
            // Round the value through `T` so only values `T` accepts are written.
            Property::Value(value) => {
                Property::Value(T::deserialize(value).map_err(|e| self.encode_error(e))?)
            }
        };
        self.encode(&typed, object)
    }
}
