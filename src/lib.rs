//! Personal contact directory: validated fields, keyed records, paginated
//! browsing, and durable save/restore.
//!
//! Records hold a name, zero or more phone numbers, and an optional
//! birthday. The directory keys records by the name's stored form,
//! supports exact name lookup and linear phone lookup, and is browsed
//! page by page through a restartable iterator.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (names, phones, birthdays)
//! - **models**: the contact record and its phone-list operations
//! - **directory**: the keyed collection with lookup and pagination
//! - **storage**: whole-directory persistence behind a store trait
//! - **config**: configuration management from environment variables
//! - **error**: custom error types for precise error handling

// Re-export commonly used types
pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;
pub mod storage;

pub use config::Config;
pub use directory::{ContactDirectory, PageEntry, Pages, DEFAULT_PAGE_SIZE};
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, StorageError};
pub use models::{PhoneError, Record};
pub use storage::{DirectoryStore, JsonFileStore, MemoryStore};
