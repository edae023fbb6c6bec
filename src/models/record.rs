//! Record model representing one contact in the directory.

use crate::domain::{Birthday, ContactName, PhoneNumber};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Soft failures from phone list edits.
///
/// Reported as return values, never panics; the phone list is left
/// untouched whenever the edit target is absent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The phone number targeted by a change or delete is not in the list.
    #[error("phone number {0} does not exist")]
    NotFound(PhoneNumber),
}

/// One contact: a name, an ordered list of phone numbers, and an optional
/// birthday.
///
/// The phone list may hold duplicates and preserves insertion order;
/// order carries no meaning beyond display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Contact name; its stored form doubles as the directory key.
    pub name: ContactName,

    /// Phone numbers in insertion order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<PhoneNumber>,

    /// Optional birthday.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record. An initial phone, when given, seeds a
    /// one-element list.
    pub fn new(name: ContactName, phone: Option<PhoneNumber>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones: phone.into_iter().collect(),
            birthday,
        }
    }

    /// Append a phone number. Duplicates are allowed; always succeeds.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Replace the first occurrence of `old`: the match is removed and
    /// `new` is appended at the end of the list.
    ///
    /// # Errors
    ///
    /// Returns `PhoneError::NotFound` and leaves the list unmodified if
    /// `old` is not present.
    pub fn change_phone(&mut self, old: &PhoneNumber, new: PhoneNumber) -> Result<(), PhoneError> {
        self.delete_phone(old)?;
        self.phones.push(new);
        Ok(())
    }

    /// Remove the first occurrence of `phone`.
    ///
    /// # Errors
    ///
    /// Returns `PhoneError::NotFound` and leaves the list unmodified if
    /// `phone` is not present.
    pub fn delete_phone(&mut self, phone: &PhoneNumber) -> Result<(), PhoneError> {
        match self.phones.iter().position(|p| p == phone) {
            Some(index) => {
                self.phones.remove(index);
                Ok(())
            }
            None => Err(PhoneError::NotFound(phone.clone())),
        }
    }

    /// Days until the next occurrence of the birthday, counted from
    /// today's local date.
    ///
    /// Returns `None` when no birthday is set. The result is never
    /// negative; a birthday occurring today yields 0.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Same as [`days_to_birthday`](Self::days_to_birthday) against an
    /// explicit reference date.
    ///
    /// The next occurrence is the birthday's month/day in `today`'s year,
    /// rolled to the following year when that date has already passed.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        let mut next = occurrence_in_year(today.year(), birthday.month(), birthday.day());
        if next < today {
            next = occurrence_in_year(today.year() + 1, birthday.month(), birthday.day());
        }
        Some((next - today).num_days())
    }
}

/// The occurrence of a birth month/day within `year`.
///
/// A Feb-29 birthday has no such date in a non-leap year; its occurrence
/// there is taken as March 1. Total for every month/day pair taken from a
/// valid date, so no invalid date is ever constructed.
fn occurrence_in_year(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| {
        // SAFETY: March 1 exists in every year
        NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 exists in every year")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_birthday(raw: &str) -> Record {
        Record::new(
            ContactName::new("Test"),
            None,
            Some(Birthday::parse(raw).unwrap()),
        )
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_record_new_seeds_phone_list() {
        let record = Record::new(
            ContactName::new("Ada"),
            Some(PhoneNumber::new("555-0100")),
            None,
        );
        assert_eq!(record.phones.len(), 1);
        assert!(record.birthday.is_none());

        let empty = Record::new(ContactName::new("Ada"), None, None);
        assert!(empty.phones.is_empty());
    }

    #[test]
    fn test_add_phone_allows_duplicates() {
        let mut record = Record::new(ContactName::new("Ada"), None, None);
        record.add_phone(PhoneNumber::new("555-0100"));
        record.add_phone(PhoneNumber::new("555-0100"));
        assert_eq!(record.phones.len(), 2);
    }

    #[test]
    fn test_change_phone_removes_first_match_and_appends() {
        let mut record = Record::new(ContactName::new("Ada"), None, None);
        record.add_phone(PhoneNumber::new("111"));
        record.add_phone(PhoneNumber::new("222"));
        record.add_phone(PhoneNumber::new("111"));

        record
            .change_phone(&PhoneNumber::new("111"), PhoneNumber::new("333"))
            .unwrap();

        assert_eq!(
            record.phones,
            vec![
                PhoneNumber::new("222"),
                PhoneNumber::new("111"),
                PhoneNumber::new("333"),
            ]
        );
    }

    #[test]
    fn test_change_phone_missing_leaves_list_untouched() {
        let mut record = Record::new(ContactName::new("Ada"), Some(PhoneNumber::new("111")), None);
        let before = record.phones.clone();

        let result = record.change_phone(&PhoneNumber::new("999"), PhoneNumber::new("333"));

        assert_eq!(
            result,
            Err(PhoneError::NotFound(PhoneNumber::new("999")))
        );
        assert_eq!(record.phones, before);
    }

    #[test]
    fn test_delete_phone_removes_exactly_one() {
        let mut record = Record::new(ContactName::new("Ada"), None, None);
        record.add_phone(PhoneNumber::new("111"));
        record.add_phone(PhoneNumber::new("111"));

        record.delete_phone(&PhoneNumber::new("111")).unwrap();
        assert_eq!(record.phones.len(), 1);
    }

    #[test]
    fn test_delete_phone_missing_is_descriptive() {
        let mut record = Record::new(ContactName::new("Ada"), None, None);
        let err = record.delete_phone(&PhoneNumber::new("999")).unwrap_err();
        assert!(err.to_string().contains("Overridden 999"));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_days_to_birthday_none_without_birthday() {
        let record = Record::new(ContactName::new("Ada"), None, None);
        assert_eq!(record.days_to_birthday_from(date(2026, 8, 7)), None);
        assert_eq!(record.days_to_birthday(), None);
    }

    #[test]
    fn test_days_to_birthday_upcoming_this_year() {
        let record = record_with_birthday("24-08-1985");
        assert_eq!(record.days_to_birthday_from(date(2026, 8, 7)), Some(17));
    }

    #[test]
    fn test_days_to_birthday_today_is_zero() {
        let record = record_with_birthday("07-08-1985");
        assert_eq!(record.days_to_birthday_from(date(2026, 8, 7)), Some(0));
    }

    #[test]
    fn test_days_to_birthday_rolls_to_next_year() {
        let record = record_with_birthday("01-01-1985");
        // Jan 1 has passed on Dec 31, next occurrence is tomorrow.
        assert_eq!(record.days_to_birthday_from(date(2026, 12, 31)), Some(1));
    }

    #[test]
    fn test_days_to_birthday_never_negative() {
        let record = record_with_birthday("06-08-1985");
        let days = record
            .days_to_birthday_from(date(2026, 8, 7))
            .unwrap();
        assert!(days >= 0);
        // Aug 6 just passed; 2027 is not a leap year, 364 days ahead.
        assert_eq!(days, 364);
    }

    #[test]
    fn test_days_to_birthday_feb29_non_leap_year() {
        let record = record_with_birthday("29-02-1996");

        // 2026 is not a leap year: the occurrence falls back to March 1.
        assert_eq!(record.days_to_birthday_from(date(2026, 2, 27)), Some(2));
        assert_eq!(record.days_to_birthday_from(date(2026, 3, 1)), Some(0));

        // After March 1 of a non-leap year the next occurrence may be a
        // real Feb 29 again.
        assert_eq!(
            record.days_to_birthday_from(date(2027, 12, 1)),
            Some((date(2028, 2, 29) - date(2027, 12, 1)).num_days())
        );
    }

    #[test]
    fn test_days_to_birthday_feb29_leap_year() {
        let record = record_with_birthday("29-02-1996");
        assert_eq!(record.days_to_birthday_from(date(2028, 2, 28)), Some(1));
        assert_eq!(record.days_to_birthday_from(date(2028, 2, 29)), Some(0));
    }

    #[test]
    fn test_record_serde_round_trip() {
        let mut record = Record::new(
            ContactName::new("Ada"),
            Some(PhoneNumber::new("555-0100")),
            Some(Birthday::parse("24-08-1985").unwrap()),
        );
        record.add_phone(PhoneNumber::new("555-0101"));

        let json = serde_json::to_string(&record).unwrap();
        let restored: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
    }
}
