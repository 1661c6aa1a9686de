//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.

use std::fmt;
use std::marker::PhantomData;

/// Generic typed ID wrapper
///
/// IDs are assigned by the database (BIGSERIAL), so there is no
/// random constructor.
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type MessageId = Id<markers::Message>;
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

// Manual impls: derives would demand the trait of the marker type too,
// and markers are deliberately empty.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Id<T> {
    /// Create from a database-assigned key
    pub fn from_i64(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying key
    pub fn as_i64(&self) -> i64 {
        self.value
    }

    /// Convert to the raw key
    pub fn into_i64(self) -> i64 {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Message IDs
    pub struct Message;
}

/// Type aliases for common IDs
pub type MessageId = Id<markers::Message>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        let id: MessageId = Id::from_i64(42);
        assert_eq!(id.as_i64(), 42);
        assert_eq!(id.into_i64(), 42);
    }

    #[test]
    fn test_id_from_i64() {
        let id: MessageId = 7.into();
        assert_eq!(i64::from(id), 7);
    }

    #[test]
    fn test_id_ordering() {
        let a: MessageId = Id::from_i64(1);
        let b: MessageId = Id::from_i64(2);
        assert!(a < b);
    }
}
