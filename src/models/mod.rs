//! Data model for contact records.

pub mod record;

pub use record::{PhoneError, Record};
