//! PhoneNumber value object.

use super::apply_value_transform;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A phone number as stored by a record's phone list.
///
/// The same stored-value transform as [`super::ContactName`] applies: the
/// raw number is prefixed on assignment and the transformed string is the
/// unit of equality. Phone lookups compare stored values, never the
/// caller's original input.
///
/// # Example
///
/// ```
/// use contact_directory::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1-555-1234");
/// assert_eq!(phone.as_str(), "Overridden +1-555-1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, applying the stored-value transform.
    ///
    /// Like the name transform this is pure and total; construction never
    /// fails.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(apply_value_transform(&raw.into()))
    }

    /// Get the stored (transformed) number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as the stored string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize the stored string verbatim, same contract
// as ContactName
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
