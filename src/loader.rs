use serde::Deserialize;
use std::fs::File;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// One entry of the kink catalog.
///
/// Only `idea_title` is consulted downstream. Real catalog exports carry many
/// more fields (level, materials_required, idea_description, categories,
/// status, ...), which are preserved opaquely so sparse and rich records load
/// the same way.
#[derive(Debug, Clone, Deserialize)]
pub struct KinkRecord {
    /// Raw title value; may be absent, null, or non-text in real exports
    #[serde(default)]
    pub idea_title: Option<serde_yaml::Value>,
    /// Remaining catalog fields, never consulted for detection
    #[serde(flatten)]
    pub extra: serde_yaml::Mapping,
}

/// Failure modes of catalog loading. Both are fatal to the one-shot run;
/// there is no recovery path.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The catalog path does not exist or cannot be opened for reading
    #[error("catalog not found or unreadable: {path}")]
    NotFound {
        path: String,
        #[source]
        source: io::Error,
    },
    /// The file is not valid YAML, or its top level is not a sequence of
    /// mappings
    #[error("catalog is not a valid sequence of records: {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Read and parse the catalog file into an ordered sequence of records.
///
/// The catalog order is the order duplicate positions are reported in, so it
/// is preserved exactly as parsed.
pub fn load_catalog(path: &Path) -> Result<Vec<KinkRecord>, LoadError> {
    info!("Loading catalog: {}", path.display());

    let file = File::open(path).map_err(|source| LoadError::NotFound {
        path: path.display().to_string(),
        source,
    })?;

    // WHY: parsing straight from the handle keeps it scoped to this call;
    // it is closed on every exit path, parse failure included
    let records: Vec<KinkRecord> =
        serde_yaml::from_reader(file).map_err(|source| LoadError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    info!("Loaded {} catalog records", records.len());
    Ok(records)
}
