//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Canonical input and display format: zero-padded day-month-year.
const DATE_FORMAT: &str = "%d-%m-%Y";

static DATE_SHAPE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{2}-\d{4}$").expect("Failed to compile date shape regex"));

/// A contact's birthday: a validated calendar date with no time-of-day or
/// time zone component.
///
/// Input must be a strict `DD-MM-YYYY` string. The shape is checked
/// before the calendar parse so non-padded inputs are rejected, which
/// makes parse-then-format an exact round-trip for every accepted string.
///
/// # Example
///
/// ```
/// use contact_directory::domain::Birthday;
///
/// let birthday = Birthday::parse("29-02-1996").unwrap();
/// assert_eq!(birthday.format(), "29-02-1996");
/// assert!(Birthday::parse("30-02-1996").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a `DD-MM-YYYY` string into a Birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string is not
    /// zero-padded day-month-year or does not name a real calendar date.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if !DATE_SHAPE_REGEX.is_match(raw) {
            return Err(ValidationError::InvalidBirthday(raw.to_string()));
        }

        let date = NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(raw.to_string()))?;

        Ok(Self(date))
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Birth month (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Birth day of month (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Render as the canonical `DD-MM-YYYY` string.
    pub fn format(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}

// Serde support - serialize as the formatted date string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.format().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}
