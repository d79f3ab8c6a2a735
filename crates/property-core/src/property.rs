//! The tri-state property value.
//!
//! This module defines `Property<T>`, a field value that can be absent,
//! explicitly null, or present with a value.

use crate::error::PropertyError;
use std::fmt;

/// A field value that distinguishes "missing" from "null".
///
/// Plain `Option<T>` collapses a missing key and an explicit `null` into the
/// same `None`. `Property<T>` keeps them apart, which is what PATCH-style
/// APIs need:
///
/// | JSON input            | `Property<T>`     | Typical meaning |
/// |-----------------------|-------------------|-----------------|
/// | key missing           | `Absent`          | don't change    |
/// | `"k": null`           | `Null`            | clear           |
/// | `"k": <value>`        | `Value(value)`    | set             |
///
/// # Struct fields
///
/// ```rust
/// use property_core::Property;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Serialize, Deserialize)]
/// struct UserPatch {
///     #[serde(default, skip_serializing_if = "Property::is_absent")]
///     nickname: Property<String>,
/// }
///
/// let patch: UserPatch = serde_json::from_str(r#"{"nickname": null}"#).unwrap();
/// assert!(patch.nickname.is_null());
///
/// let patch: UserPatch = serde_json::from_str("{}").unwrap();
/// assert!(patch.nickname.is_absent());
/// assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property<T> {
    /// The key did not occur in the source object.
    Absent,
    /// The key occurred with an explicit `null`.
    Null,
    /// The key occurred with a value.
    Value(T),
}

/// Which variant of a [`Property`] is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyState {
    /// See [`Property::Absent`].
    Absent,
    /// See [`Property::Null`].
    Null,
    /// See [`Property::Value`].
    Value,
}

impl fmt::Display for PropertyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("absent"),
            Self::Null => f.write_str("null"),
            Self::Value => f.write_str("value"),
        }
    }
}

impl<T> Property<T> {
    /// Create an absent property.
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Create an explicitly null property.
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a property holding `value`.
    pub const fn of(value: T) -> Self {
        Self::Value(value)
    }

    /// Which variant is active.
    pub fn state(&self) -> PropertyState {
        match self {
            Self::Absent => PropertyState::Absent,
            Self::Null => PropertyState::Null,
            Self::Value(_) => PropertyState::Value,
        }
    }

    /// Check if the key was missing.
    ///
    /// This is also the omit predicate for serialization: use it with
    /// `#[serde(skip_serializing_if = "Property::is_absent")]`.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Check if the key was present with `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if the key was present with a value.
    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// Check if the key was present at all (`null` counts as present).
    pub fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// Borrow the payload.
    pub fn as_ref(&self) -> Property<&T> {
        match self {
            Self::Absent => Property::Absent,
            Self::Null => Property::Null,
            Self::Value(value) => Property::Value(value),
        }
    }

    /// Get the payload.
    ///
    /// Returns `Ok(None)` for `Null` and an error for `Absent`, since an
    /// absent property has no value to speak of, not even `null`.
    pub fn value(&self) -> Result<Option<&T>, PropertyError> {
        match self {
            Self::Absent => Err(PropertyError::Absent),
            Self::Null => Ok(None),
            Self::Value(value) => Ok(Some(value)),
        }
    }

    /// Consume the property and get the payload. See [`Property::value`].
    pub fn into_value(self) -> Result<Option<T>, PropertyError> {
        match self {
            Self::Absent => Err(PropertyError::Absent),
            Self::Null => Ok(None),
            Self::Value(value) => Ok(Some(value)),
        }
    }

    /// View as nested options: absent is `None`, null is `Some(None)`.
    pub fn as_option(&self) -> Option<Option<&T>> {
        self.as_ref().into_option()
    }

    /// Convert into nested options: absent is `None`, null is `Some(None)`.
    pub fn into_option(self) -> Option<Option<T>> {
        self.into()
    }

    /// Invoke `f` with the payload, only if a value is present.
    pub fn if_value<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        if let Self::Value(value) = self {
            f(value);
        }
    }

    /// Invoke `f` if the key was present; `Null` passes `None`.
    pub fn on_presence<F>(&self, f: F)
    where
        F: FnOnce(Option<&T>),
    {
        match self {
            Self::Absent => {}
            Self::Null => f(None),
            Self::Value(value) => f(Some(value)),
        }
    }

    /// Invoke `f` if the key was missing.
    pub fn on_absence<F>(&self, f: F)
    where
        F: FnOnce(),
    {
        if self.is_absent() {
            f();
        }
    }

    /// Invoke exactly one of `present` or `absent`.
    pub fn visit<P, A>(&self, present: P, absent: A)
    where
        P: FnOnce(Option<&T>),
        A: FnOnce(),
    {
        match self {
            Self::Absent => absent(),
            Self::Null => present(None),
            Self::Value(value) => present(Some(value)),
        }
    }

    /// Transform the payload, keeping `Absent` and `Null` as they are.
    ///
    /// `f` never sees a null. Use [`map_present`](Self::map_present) when a
    /// null should be mapped too.
    pub fn map<U, F>(self, f: F) -> Property<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Absent => Property::Absent,
            Self::Null => Property::Null,
            Self::Value(value) => Property::Value(f(value)),
        }
    }

    /// Transform a present property, nulls included.
    ///
    /// `f` receives `None` for `Null`. A `None` result is `Null` and a
    /// `Some` result is a value. `Absent` stays `Absent`.
    pub fn map_present<U, F>(self, f: F) -> Property<U>
    where
        F: FnOnce(Option<T>) -> Option<U>,
    {
        match self {
            Self::Absent => Property::Absent,
            Self::Null => f(None).into(),
            Self::Value(value) => f(Some(value)).into(),
        }
    }

    /// Descend into a nested property of the payload.
    ///
    /// Both `Absent` and `Null` yield `Absent`: with `{"address": null}`,
    /// every property beneath `address` is absent, not null.
    pub fn fold<U, F>(self, f: F) -> Property<U>
    where
        F: FnOnce(T) -> Property<U>,
    {
        match self {
            Self::Absent | Self::Null => Property::Absent,
            Self::Value(value) => f(value),
        }
    }
}

impl<T> From<Option<T>> for Property<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Null,
        }
    }
}

impl<T> From<Property<T>> for Option<Option<T>> {
    fn from(property: Property<T>) -> Self {
        match property {
            Property::Absent => None,
            Property::Null => Some(None),
            Property::Value(value) => Some(Some(value)),
        }
    }
}
