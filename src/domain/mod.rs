//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! contact names, phone numbers, and birthdays. These value objects apply
//! their value rules at construction time, so data that skipped the rules
//! cannot be represented in the system.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;

/// Prefix applied to every stored name and phone value.
///
/// Directory keys and phone equality are defined over the prefixed form,
/// so both wrappers must apply the identical rule.
pub(crate) const VALUE_PREFIX: &str = "Overridden ";

/// The stored-value transform shared by [`ContactName`] and
/// [`PhoneNumber`]. Pure and total: any input maps to exactly one stored
/// value.
pub(crate) fn apply_value_transform(raw: &str) -> String {
    format!("{}{}", VALUE_PREFIX, raw)
}
