//! Error types for KML decoding and encoding

use std::io;
use thiserror::Error;

/// Errors that can occur while reading or writing KML markup
///
/// Only structural failures of the underlying text are reported here.
/// Unknown elements, unrecognized enumeration literals and unparseable
/// leaf values are recovered inside the decoder and never surface as errors.
#[derive(Debug, Error)]
pub enum KmlError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input is not well-formed XML
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The input is well-formed at the token level but not as a tree
    /// (empty document, unbalanced tags, bad attribute syntax)
    #[error("Malformed markup: {0}")]
    Malformed(String),

    /// The formatter failed to write the markup tree
    #[error("Failed to format markup: {0}")]
    Format(String),

    /// UTF-8 conversion error
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Result type for KML operations
pub type Result<T> = std::result::Result<T, KmlError>;
