pub mod detector;
pub mod loader;
pub mod report;

// Re-export main types for convenient access
pub use detector::{find_duplicates, Duplicate, Title};
pub use loader::{load_catalog, KinkRecord, LoadError};
pub use report::write_report;
