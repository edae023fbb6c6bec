//! The keyed contact collection and its paginated iteration protocol.

pub mod pages;

pub use pages::{PageEntry, Pages};

use crate::domain::{ContactName, PhoneNumber};
use crate::models::Record;
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Records per page unless overridden via [`ContactDirectory::set_page_size`].
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// The keyed collection of contact records.
///
/// Records are keyed by their transformed name string. Keys are unique:
/// adding a record whose name transforms to an existing key silently
/// overwrites that entry, and the key keeps its original insertion
/// position. Every scan (lookup and pagination alike) runs in insertion
/// order.
#[derive(Debug, Clone)]
pub struct ContactDirectory {
    entries: HashMap<String, Record>,
    /// Keys in first-insertion order. Invariant: holds exactly the keys
    /// of `entries`, each once.
    order: Vec<String>,
    /// Per-instance page size; never shared between directories.
    page_size: usize,
}

impl ContactDirectory {
    /// Create an empty directory with the default page size.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Build a record from a name and optional phone and insert it.
    pub fn add_contact(&mut self, name: ContactName, phone: Option<PhoneNumber>) {
        self.add_record(Record::new(name, phone, None));
    }

    /// Insert a record keyed by its transformed name.
    ///
    /// An existing entry under the same key is silently replaced; the key
    /// keeps its original position in iteration order.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name.as_str().to_string();
        tracing::debug!("add_record: key={}", key);
        if self.entries.insert(key.clone(), record).is_none() {
            self.order.push(key);
        }
    }

    /// Exact lookup by transformed name key. `None` when absent.
    pub fn find_by_name(&self, key: &str) -> Option<&Record> {
        self.entries.get(key)
    }

    /// First record, in insertion order, whose phone list contains the
    /// given stored phone value. `None` when no record matches.
    pub fn find_by_phone(&self, phone: &str) -> Option<&Record> {
        self.records()
            .map(|(_, record)| record)
            .find(|record| record.phones.iter().any(|p| p.as_str() == phone))
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every record. The configured page size is kept.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    /// Iterate `(key, record)` pairs in insertion order.
    pub fn records(&self) -> impl Iterator<Item = (&str, &Record)> + '_ {
        self.order.iter().map(move |key| {
            // SAFETY: `order` holds exactly the keys of `entries`
            let record = self.entries.get(key).expect("ordered key present in map");
            (key.as_str(), record)
        })
    }

    /// Set the number of records returned per page.
    ///
    /// Write-only configuration: the value is observable only through
    /// page shapes. A zero size is treated as one, so the page cursor
    /// always advances.
    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
    }

    /// Begin paginated iteration from the first page.
    ///
    /// Every call starts a fresh cursor at page zero; iterating twice
    /// never resumes a stale position.
    pub fn pages(&self) -> Pages<'_> {
        Pages::new(self)
    }
}

impl Default for ContactDirectory {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterating a directory reference yields its pages.
impl<'a> IntoIterator for &'a ContactDirectory {
    type Item = Vec<PageEntry<'a>>;
    type IntoIter = Pages<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}

// Serde support - the directory round-trips as its ordered record
// sequence. Keys are re-derived from each record's transformed name on
// load; the page size and any iteration cursor are runtime state and are
// not persisted.
impl Serialize for ContactDirectory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for (_, record) in self.records() {
            seq.serialize_element(record)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for ContactDirectory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Record>::deserialize(deserializer)?;
        let mut directory = ContactDirectory::new();
        for record in records {
            directory.add_record(record);
        }
        Ok(directory)
    }
}
