//! Error types for KMZ archive operations

use kml_core::KmlError;
use thiserror::Error;

/// Errors that can occur while reading or writing a KMZ archive
///
/// Reading only fails when the container itself cannot be opened; corrupt
/// entries are skipped. Writing fails as a whole, and no file is left at the
/// destination.
#[derive(Error, Debug)]
pub enum KmzError {
    /// IO error during archive operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid ZIP container
    #[error("Invalid ZIP archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A document could not be encoded
    #[error("KML codec error: {0}")]
    Codec(#[from] KmlError),

    /// The finished archive could not be moved to its destination
    #[error("Failed to commit archive: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// An entry name is empty or duplicated after sanitizing
    #[error("Invalid entry name: '{0}'")]
    InvalidEntryName(String),
}

/// Result type for KMZ operations
pub type Result<T> = std::result::Result<T, KmzError>;
