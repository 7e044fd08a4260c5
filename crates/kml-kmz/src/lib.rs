//! KMZ archive support for kml-core
//!
//! A KMZ file is a ZIP archive holding one or more KML documents (by
//! convention the primary one is `doc.kml`) together with the resources they
//! reference: icons, overlay images and 3D models.
//!
//! ## Reading
//!
//! [`read_archive`] decodes every `.kml` entry in entry order. The container
//! must open; after that the reader is forgiving. Corrupt, oversized and
//! traversal-named entries are skipped with a warning, and an entry whose
//! root is not `kml` comes back as `None`.
//!
//! ```no_run
//! use kml_kmz::{list_archive, read_archive, EntryKind};
//!
//! let documents = read_archive("tour.kmz")?;
//! let images = list_archive("tour.kmz")?
//!     .into_iter()
//!     .filter(|entry| entry.kind == EntryKind::Image)
//!     .count();
//! println!("{} documents, {images} images", documents.len());
//! # Ok::<(), kml_kmz::KmzError>(())
//! ```
//!
//! ## Writing
//!
//! [`write_archive`] is all-or-nothing: the archive is assembled in a
//! temporary file beside the destination and only moved into place once
//! every entry has been written.
//!
//! ## Security
//!
//! Entry names are sanitized with [`sanitize_path`] on both read and write,
//! and reads stop at [`MAX_ENTRY_SIZE`] bytes per entry.

pub mod error;
pub mod kmz;

pub use error::{KmzError, Result};
pub use kmz::{
    classify_entry, list_archive, read_archive, read_archive_resources, read_archive_with,
    sanitize_path, write_archive, write_archive_with, ArchiveEntry, ArchiveOptions, EntryKind,
    ResourceFile,
};

/// Entry name of the first document written to an archive
pub const DEFAULT_DOCUMENT_ENTRY: &str = "doc.kml";

/// Suffix identifying document entries
pub const DEFAULT_DOCUMENT_SUFFIX: &str = ".kml";

/// Maximum size of a single entry read from an archive (100 MB)
pub const MAX_ENTRY_SIZE: u64 = 100_000_000;
