//! Contact directory - main entry point
//!
//! A smoke-test harness around the library: builds a directory with
//! sample records, prints the first page, and runs a save/load round-trip
//! through the file store.

use anyhow::Result;
use contact_directory::{
    Config, ContactDirectory, ContactName, DirectoryStore, JsonFileStore, PhoneNumber, Record,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only, stdout carries the page output)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Populate a directory with sample records
    let mut directory = ContactDirectory::new();
    directory.set_page_size(config.page_size);
    for n in 0..10 {
        directory.add_record(Record::new(
            ContactName::new(format!("name_{}", n)),
            Some(PhoneNumber::new(format!("555-010{}", n))),
            None,
        ));
    }
    info!("Directory populated with {} records", directory.len());

    // Display the first page
    if let Some(page) = directory.pages().next() {
        println!("Page 1 ({} contacts):", page.len());
        for entry in page {
            println!("  {} [{} phone number(s)]", entry.key, entry.record.phones.len());
        }
    }

    // Save and restore through the file store
    let mut store = JsonFileStore::new(&config.data_file);
    store.save(&directory)?;
    let restored = store.load()?;
    info!(
        "Round-trip through {} restored {} records",
        config.data_file.display(),
        restored.len()
    );

    Ok(())
}
