//! Registry of tri-state fields for dynamic JSON documents.

use crate::field::{FieldCodec, FieldError, PropertyField};
use property_core::Property;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Decoded properties keyed by field name.
pub type PropertyMap = BTreeMap<String, Property<Value>>;

/// Error type for registry setup.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A field with this name is already registered
    #[error("Field already registered: {0}")]
    DuplicateField(String),

    /// Field names must not be empty
    #[error("Field name must not be empty")]
    EmptyFieldName,
}

/// Table of tri-state fields, each bound to the codec for its value type.
///
/// Fields are resolved when they are registered. Mistakes in the field set
/// such as duplicate or empty names are reported during setup, before any
/// document is processed. A registry holds no per-document state, so one
/// instance can serve concurrent decodes.
///
/// # Example
///
/// ```rust
/// use property_core::Property;
/// use property_json::PropertyRegistry;
/// use serde_json::json;
///
/// let mut registry = PropertyRegistry::new();
/// registry
///     .register::<String>("title")
///     .unwrap()
///     .register::<u32>("rank")
///     .unwrap();
///
/// let props = registry.decode(&json!({ "title": null })).unwrap();
/// assert_eq!(props["title"], Property::Null);
/// assert_eq!(props["rank"], Property::Absent);
///
/// let out = registry.encode(&props).unwrap();
/// assert_eq!(serde_json::Value::Object(out), json!({ "title": null }));
/// ```
#[derive(Default)]
pub struct PropertyRegistry {
    fields: Vec<Box<dyn FieldCodec>>,
    field_map: HashMap<String, usize>,
}

impl PropertyRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field whose value decodes and encodes as `T`.
    pub fn register<T>(&mut self, name: impl Into<String>) -> Result<&mut Self, RegistryError>
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        self.register_codec(Box::new(PropertyField::<T>::new(name)))
    }

    /// Register a custom field codec.
    pub fn register_codec(
        &mut self,
        codec: Box<dyn FieldCodec>,
    ) -> Result<&mut Self, RegistryError> {
        let name = codec.name();
        if name.is_empty() {
            return Err(RegistryError::EmptyFieldName);
        }
        if self.field_map.contains_key(name) {
            return Err(RegistryError::DuplicateField(name.to_string()));
        }

        tracing::debug!("Registered property field '{}' as {}", name, codec.describe());
        self.field_map.insert(name.to_string(), self.fields.len());
        self.fields.push(codec);
        Ok(self)
    }

    /// Get a field codec by name.
    pub fn get(&self, name: &str) -> Option<&dyn FieldCodec> {
        self.field_map
            .get(name)
            .and_then(|&idx| self.fields.get(idx))
            .map(|codec| codec.as_ref())
    }

    /// Get all field names, in registration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name()).collect()
    }

    /// Number of registered fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if no fields are registered.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Decode every registered field from a JSON object.
    ///
    /// Keys that are not registered are ignored. The first field that fails
    /// to decode stops the whole document.
    pub fn decode(&self, document: &Value) -> Result<PropertyMap, FieldError> {
        let object = document.as_object().ok_or(FieldError::NotAnObject {
            found: json_kind(document),
        })?;

        let mut properties = PropertyMap::new();
        for field in &self.fields {
            let property = field.decode_value(object)?;
            tracing::trace!("Decoded field '{}' as {}", field.name(), property.state());
            properties.insert(field.name().to_string(), property);
        }
        Ok(properties)
    }

    /// Encode properties into a new JSON object.
    ///
    /// Registered fields missing from `properties` are treated as absent and
    /// omitted, like explicitly absent ones.
    pub fn encode(&self, properties: &PropertyMap) -> Result<Map<String, Value>, FieldError> {
        if let Some(unknown) = properties
            .keys()
            .find(|name| !self.field_map.contains_key(name.as_str()))
        {
            return Err(FieldError::UnknownField(unknown.clone()));
        }

        let mut object = Map::new();
        for field in &self.fields {
            if let Some(property) = properties.get(field.name()) {
                field.encode_value(property, &mut object)?;
            }
        }
        Ok(object)
    }
}

/// Name of a JSON value's kind, for error messages.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl fmt::Debug for PropertyRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|field| (field.name(), field.describe())))
            .finish()
    }
}
