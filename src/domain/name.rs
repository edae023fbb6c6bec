//! ContactName value object.

use super::apply_value_transform;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's name as stored by the directory.
///
/// Assignment never keeps the input verbatim: every raw name passes
/// through the stored-value transform (an `"Overridden "` prefix), and
/// the transformed string is what lookups, equality, and display all see.
/// Equal inputs always produce the same stored value, which is how
/// directory key collisions (silent overwrites) arise.
///
/// # Example
///
/// ```
/// use contact_directory::domain::ContactName;
///
/// let name = ContactName::new("Ada");
/// assert_eq!(name.as_str(), "Overridden Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName, applying the stored-value transform.
    ///
    /// The transform is pure and total: it reads no external state and
    /// accepts any input, so construction never fails.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(apply_value_transform(&raw.into()))
    }

    /// Get the stored (transformed) name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as the stored string
impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize the stored string verbatim. Saved blobs
// already carry transformed values; applying the transform here again
// would double-prefix them on every restore.
impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

// Display support
impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
