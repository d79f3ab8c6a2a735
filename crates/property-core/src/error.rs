//! Error types for property access.

/// Error type for reading a [`Property`](crate::Property).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    /// The property was absent, so there is no value, not even `null`.
    #[error("Property is absent")]
    Absent,
}
