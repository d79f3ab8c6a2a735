//! Deserialization of [`Property`].
//!
//! serde reaches a `Property<T>` field through one of two entry points:
//!
//! - **Key missing**: serde never calls `Deserialize`. For fields marked
//!   `#[serde(default)]` it calls [`Default::default`], which yields
//!   `Property::Absent`. This is the only source of `Absent`.
//! - **Key present**: serde calls [`Deserialize::deserialize`] with the
//!   deserializer positioned on the value. A `null` token becomes
//!   `Property::Null`, anything else is handed to `T`'s own deserializer.
//!
//! The value is requested as a newtype struct. Self-describing formats
//! forward that request to the value in place, while serde's missing-field
//! deserializer rejects it with `missing field`. A `Property<T>` field that
//! lacks `#[serde(default)]` therefore fails loudly on a missing key
//! instead of passing for `null`.

use crate::property::Property;
use serde::de::{Deserialize, Deserializer, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// Newtype name used when asking a deserializer for a property value.
pub(crate) const PROPERTY_TOKEN: &str = "Property";

/// The absent-value entry: a missing key is `Absent`.
impl<T> Default for Property<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<'de, T> Deserialize<'de> for Property<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_newtype_struct(PROPERTY_TOKEN, PropertyVisitor(PhantomData))
    }
}

struct PropertyVisitor<T>(PhantomData<fn() -> T>);

impl<'de, T> Visitor<'de> for PropertyVisitor<T>
where
    T: Deserialize<'de>,
{
    type Value = Property<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("null or a property value")
    }

    fn visit_newtype_struct<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `Option` consumes a `null` token itself and only calls into `T`
        // for anything else.
        Option::<T>::deserialize(deserializer).map(Property::from)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Property::Null)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Property::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;
    use std::collections::HashMap;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default)]
        f: Property<i64>,
    }

    #[derive(Debug, Deserialize)]
    struct Names {
        #[serde(default)]
        name: Property<String>,
    }

    #[derive(Debug, Deserialize)]
    struct MissingDefault {
        f: Property<i64>,
    }

    #[test]
    fn test_missing_key_is_absent() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.f, Property::Absent);
    }

    #[test]
    fn test_null_is_null() {
        let patch: Patch = serde_json::from_str(r#"{"f": null}"#).unwrap();
        assert_eq!(patch.f, Property::Null);
    }

    #[test]
    fn test_value_is_value() {
        let patch: Patch = serde_json::from_str(r#"{"f": 42}"#).unwrap();
        assert_eq!(patch.f, Property::Value(42));
    }

    #[test]
    fn test_empty_values_are_values() {
        let names: Names = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert_eq!(names.name, Property::Value(String::new()));

        let patch: Patch = serde_json::from_str(r#"{"f": 0}"#).unwrap();
        assert_eq!(patch.f, Property::Value(0));

        let list: Property<Vec<i32>> = serde_json::from_str("[]").unwrap();
        assert_eq!(list, Property::Value(vec![]));
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        let err = serde_json::from_str::<Patch>(r#"{"f": "not-an-integer"}"#).unwrap_err();
        assert!(err.is_data());
        assert!(err.to_string().contains("invalid type"), "{err}");
    }

    #[test]
    fn test_missing_key_without_default_is_an_error() {
        let err = serde_json::from_str::<MissingDefault>("{}").unwrap_err();
        assert!(err.to_string().contains("missing field `f`"), "{err}");

        // Present keys still decode normally.
        let ok: MissingDefault = serde_json::from_str(r#"{"f": null}"#).unwrap();
        assert_eq!(ok.f, Property::Null);
    }

    #[test]
    fn test_from_json_value() {
        let patch: Patch = serde_json::from_value(json!({ "f": null })).unwrap();
        assert_eq!(patch.f, Property::Null);

        let patch: Patch = serde_json::from_value(json!({ "f": 7 })).unwrap();
        assert_eq!(patch.f, Property::Value(7));

        let patch: Patch = serde_json::from_value(json!({})).unwrap();
        assert_eq!(patch.f, Property::Absent);
    }

    #[test]
    fn test_from_borrowed_json_value() {
        let value = json!("hello");
        let property = Property::<String>::deserialize(&value).unwrap();
        assert_eq!(property, Property::Value("hello".to_string()));

        let value = serde_json::Value::Null;
        let property = Property::<String>::deserialize(&value).unwrap();
        assert_eq!(property, Property::Null);
    }

    #[test]
    fn test_standalone_values() {
        assert_eq!(
            serde_json::from_str::<Property<i32>>("null").unwrap(),
            Property::Null
        );
        assert_eq!(
            serde_json::from_str::<Property<i32>>("5").unwrap(),
            Property::Value(5)
        );
    }

    #[test]
    fn test_nested_containers() {
        let list: Property<Vec<String>> = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(list, Property::Value(vec!["a".to_string(), "b".to_string()]));

        let map: Property<HashMap<String, i32>> = serde_json::from_str(r#"{"x": 1}"#).unwrap();
        assert_eq!(
            map,
            Property::Value(HashMap::from([("x".to_string(), 1)]))
        );

        let seq: Vec<Property<i32>> = serde_json::from_str("[1, null, 3]").unwrap();
        assert_eq!(
            seq,
            vec![Property::Value(1), Property::Null, Property::Value(3)]
        );
    }

    #[test]
    fn test_nested_struct_properties() {
        #[derive(Debug, PartialEq, Deserialize)]
        struct Address {
            #[serde(default)]
            street: Property<String>,
        }

        #[derive(Debug, Deserialize)]
        struct User {
            #[serde(default)]
            address: Property<Address>,
        }

        let user: User = serde_json::from_str(r#"{"address": {}}"#).unwrap();
        assert_eq!(
            user.address,
            Property::Value(Address {
                street: Property::Absent
            })
        );

        let user: User = serde_json::from_str(r#"{"address": {"street": null}}"#).unwrap();
        assert_eq!(user.address.fold(|a| a.street), Property::Null);
    }

    #[test]
    fn test_optional_payload_is_preserved() {
        let nested: Property<Option<i32>> = serde_json::from_str("3").unwrap();
        assert_eq!(nested, Property::Value(Some(3)));

        // `null` belongs to the outer property.
        let nested: Property<Option<i32>> = serde_json::from_str("null").unwrap();
        assert_eq!(nested, Property::Null);
    }
}
