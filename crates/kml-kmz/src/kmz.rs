//! KMZ container reading and writing
//!
//! A KMZ file is a ZIP archive. Entries whose name ends with the document
//! suffix (`.kml`, compared case-insensitively) are KML documents; every
//! other entry is an opaque resource (icons, overlays, models) passed through
//! unmodified. Hrefs inside documents are never resolved.

use crate::error::{KmzError, Result};
use crate::{DEFAULT_DOCUMENT_ENTRY, DEFAULT_DOCUMENT_SUFFIX, MAX_ENTRY_SIZE};
use kml_core::{decode_bytes, EncodeOptions, Kml};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Component, Path};
use tempfile::NamedTempFile;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipArchive, ZipWriter};

/// Options for reading and writing archives
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveOptions {
    /// Entry name suffix marking a document (default: `.kml`)
    pub document_suffix: String,
    /// Entries larger than this are skipped when reading (default: [`MAX_ENTRY_SIZE`])
    pub max_entry_size: u64,
    /// Compression of written entries (default: deflate)
    pub compression: CompressionMethod,
    /// Rendering of written documents
    pub encode: EncodeOptions,
}

impl Default for ArchiveOptions {
    #[inline]
    fn default() -> Self {
        Self {
            document_suffix: DEFAULT_DOCUMENT_SUFFIX.to_string(),
            max_entry_size: MAX_ENTRY_SIZE,
            compression: CompressionMethod::Deflated,
            encode: EncodeOptions::default(),
        }
    }
}

impl ArchiveOptions {
    /// Set the document suffix
    #[must_use]
    pub fn with_document_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.document_suffix = suffix.into();
        self
    }

    /// Set the maximum entry size read
    #[must_use]
    pub fn with_max_entry_size(mut self, max_entry_size: u64) -> Self {
        self.max_entry_size = max_entry_size;
        self
    }

    /// Set the compression of written entries
    #[must_use]
    pub fn with_compression(mut self, compression: CompressionMethod) -> Self {
        self.compression = compression;
        self
    }

    /// Set how documents are rendered
    #[must_use]
    pub fn with_encode_options(mut self, encode: EncodeOptions) -> Self {
        self.encode = encode;
        self
    }

    fn is_document(&self, name: &str) -> bool {
        name.to_lowercase()
            .ends_with(&self.document_suffix.to_lowercase())
    }
}

/// A non-document file stored in an archive
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceFile {
    /// Entry name, may include directories (`files/icon.png`)
    pub name: String,
    /// File contents
    pub contents: Vec<u8>,
}

impl ResourceFile {
    /// Resource from memory
    #[must_use]
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }

    /// Read a resource from disk, named after the file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the path has no file name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| KmzError::InvalidEntryName(path.display().to_string()))?;
        Ok(Self {
            name,
            contents: std::fs::read(path)?,
        })
    }
}

/// Classification of an archive entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    /// KML document
    Document,
    /// Raster image (icons, overlays)
    Image,
    /// 3D model
    Model,
    /// Anything else
    Other,
}

/// Information about an archive entry (without its contents)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArchiveEntry {
    /// Sanitized entry name
    pub name: String,
    /// Uncompressed size
    pub size: u64,
    /// Compressed size
    pub compressed_size: u64,
    /// Entry classification
    pub kind: EntryKind,
}

/// Classify an entry by its name
#[must_use]
pub fn classify_entry(name: &str, options: &ArchiveOptions) -> EntryKind {
    if options.is_document(name) {
        return EntryKind::Document;
    }
    let extension = Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "tif" | "tiff" => EntryKind::Image,
        "dae" | "obj" | "gltf" | "glb" => EntryKind::Model,
        _ => EntryKind::Other,
    }
}

/// Sanitize an entry name against path traversal (`../../etc/passwd`)
///
/// Parent, current-directory, root and drive components are dropped and the
/// rest is joined with `/`. Returns `None` if nothing is left.
#[must_use]
pub fn sanitize_path(name: &str) -> Option<String> {
    let parts: Vec<_> = Path::new(&name.replace('\\', "/"))
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().to_string()),
            _ => None,
        })
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

// =============================================================================
// Reading
// =============================================================================

/// Read every document of an archive with default options
///
/// # Errors
///
/// Returns an error only if the container cannot be opened.
///
/// # Examples
///
/// ```no_run
/// use kml_kmz::read_archive;
///
/// for kml in read_archive("landmarks.kmz")?.into_iter().flatten() {
///     if let Some(feature) = &kml.feature {
///         println!("{:?}: {} placemarks", feature.name(), feature.placemarks().len());
///     }
/// }
/// # Ok::<(), kml_kmz::KmzError>(())
/// ```
#[must_use = "this function returns decoded documents that should be processed"]
pub fn read_archive<P: AsRef<Path>>(path: P) -> Result<Vec<Option<Kml>>> {
    read_archive_with(path, &ArchiveOptions::default())
}

/// Read every document of an archive
///
/// Documents are returned in entry order; an entry whose root element is not
/// `kml` yields `None`. Unreadable, malformed and oversized entries are
/// skipped with a warning.
///
/// # Errors
///
/// Returns an error only if the container cannot be opened.
#[must_use = "this function returns decoded documents that should be processed"]
pub fn read_archive_with<P: AsRef<Path>>(
    path: P,
    options: &ArchiveOptions,
) -> Result<Vec<Option<Kml>>> {
    let mut documents = Vec::new();
    read_entries(path.as_ref(), options, |name, kind, contents| {
        if kind != EntryKind::Document {
            debug!("Skipping resource entry: {name}");
            return;
        }
        match decode_bytes(&contents) {
            Ok(kml) => documents.push(kml),
            Err(e) => warn!("Skipping corrupt document entry {name}: {e}"),
        }
    })?;
    Ok(documents)
}

/// Extract the non-document entries of an archive
///
/// The result can be passed back into [`write_archive`].
///
/// # Errors
///
/// Returns an error only if the container cannot be opened.
#[must_use = "this function returns extracted resources that should be processed"]
pub fn read_archive_resources<P: AsRef<Path>>(path: P) -> Result<Vec<ResourceFile>> {
    let options = ArchiveOptions::default();
    let mut resources = Vec::new();
    read_entries(path.as_ref(), &options, |name, kind, contents| {
        if kind != EntryKind::Document {
            resources.push(ResourceFile {
                name: name.to_string(),
                contents,
            });
        }
    })?;
    Ok(resources)
}

/// List the entries of an archive without extracting them
///
/// # Errors
///
/// Returns an error if the container cannot be opened or its directory
/// cannot be read.
#[must_use = "this function returns archive listing that should be processed"]
pub fn list_archive<P: AsRef<Path>>(path: P) -> Result<Vec<ArchiveEntry>> {
    let options = ArchiveOptions::default();
    let mut archive = ZipArchive::new(BufReader::new(File::open(path)?))?;

    let mut entries = Vec::new();
    for index in 0..archive.len() {
        let entry = archive.by_index(index)?;
        if entry.is_dir() {
            continue;
        }
        let Some(name) = sanitize_path(entry.name()) else {
            warn!("Skipping invalid entry name: {}", entry.name());
            continue;
        };
        entries.push(ArchiveEntry {
            kind: classify_entry(&name, &options),
            name,
            size: entry.size(),
            compressed_size: entry.compressed_size(),
        });
    }
    Ok(entries)
}

/// Visit every readable file entry with its sanitized name and contents
fn read_entries<F>(path: &Path, options: &ArchiveOptions, mut visit: F) -> Result<()>
where
    F: FnMut(&str, EntryKind, Vec<u8>),
{
    let mut archive = ZipArchive::new(BufReader::new(File::open(path)?))?;

    for index in 0..archive.len() {
        let mut entry = match archive.by_index(index) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry #{index}: {e}");
                continue;
            }
        };
        if entry.is_dir() {
            continue;
        }

        let raw_name = entry.name().to_string();
        let Some(name) = sanitize_path(&raw_name) else {
            warn!("Skipping invalid path: {raw_name} (path traversal attempt or empty)");
            continue;
        };

        let size = entry.size();
        if size > options.max_entry_size {
            warn!(
                "Skipping large entry: {name} ({size} bytes exceeds {} bytes limit)",
                options.max_entry_size
            );
            continue;
        }

        let mut contents = Vec::new();
        if let Err(e) = entry.read_to_end(&mut contents) {
            warn!("Skipping unreadable entry {name}: {e}");
            continue;
        }
        visit(&name, classify_entry(&name, options), contents);
    }
    Ok(())
}

// =============================================================================
// Writing
// =============================================================================

/// Write documents and resources to an archive with default options
///
/// # Errors
///
/// See [`write_archive_with`].
///
/// # Examples
///
/// ```no_run
/// use kml_core::{Coordinate, Kml, Placemark, Point};
/// use kml_kmz::{write_archive, ResourceFile};
///
/// let kml = Kml::new(
///     Placemark::default()
///         .with_name("Opera House")
///         .with_geometry(Point::new(Coordinate::new(151.21037, -33.8526))),
/// );
/// let icon = ResourceFile::from_path("icons/pin.png")?;
/// write_archive("landmarks.kmz", &[("landmarks", Some(kml))], &[icon])?;
/// # Ok::<(), kml_kmz::KmzError>(())
/// ```
pub fn write_archive<P, N>(
    path: P,
    documents: &[(N, Option<Kml>)],
    resources: &[ResourceFile],
) -> Result<()>
where
    P: AsRef<Path>,
    N: AsRef<str>,
{
    write_archive_with(path, documents, resources, &ArchiveOptions::default())
}

/// Write documents and resources to an archive
///
/// The first document is stored as `doc.kml`; later documents are stored
/// under their sanitized name with the document suffix, numbered on
/// collision (`tour.kml`, `tour_2.kml`). Entries without a document are not
/// written. Resources follow the documents, unmodified.
///
/// The archive is built in a temporary file next to `path` and moved into
/// place once complete.
///
/// # Errors
///
/// Returns an error if any entry cannot be encoded or written, or the
/// archive cannot be committed. A resource name that is empty after
/// sanitizing, or that repeats an earlier resource, fails with
/// [`KmzError::InvalidEntryName`]. No file is created at `path` in that case.
pub fn write_archive_with<P, N>(
    path: P,
    documents: &[(N, Option<Kml>)],
    resources: &[ResourceFile],
    options: &ArchiveOptions,
) -> Result<()>
where
    P: AsRef<Path>,
    N: AsRef<str>,
{
    let path = path.as_ref();
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut names = EntryNames::default();
    let mut seen = HashSet::new();
    let resource_names = resources
        .iter()
        .map(|resource| {
            let name = sanitize_path(&resource.name)
                .filter(|name| seen.insert(name.clone()))
                .ok_or_else(|| KmzError::InvalidEntryName(resource.name.clone()))?;
            names.reserve(&name);
            Ok(name)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut temporary = NamedTempFile::new_in(directory)?;
    let entry_options = SimpleFileOptions::default().compression_method(options.compression);
    let mut zip = ZipWriter::new(temporary.as_file_mut());

    for (name, kml) in documents {
        let Some(kml) = kml else {
            debug!("No document for '{}', entry not written", name.as_ref());
            continue;
        };
        let entry_name = names.document(name.as_ref(), &options.document_suffix);
        let text = kml_core::to_string(kml, &options.encode)?;
        zip.start_file(entry_name.as_str(), entry_options)?;
        zip.write_all(text.as_bytes())?;
    }

    for (resource, name) in resources.iter().zip(&resource_names) {
        zip.start_file(name.as_str(), entry_options)?;
        zip.write_all(&resource.contents)?;
    }

    zip.finish()?;
    temporary.persist(path)?;
    Ok(())
}

/// Deterministic, collision-free entry names
#[derive(Debug, Default)]
struct EntryNames {
    used: HashSet<String>,
    documents: usize,
}

impl EntryNames {
    fn reserve(&mut self, name: &str) {
        self.used.insert(name.to_lowercase());
    }

    fn document(&mut self, name: &str, suffix: &str) -> String {
        let stem = if self.documents == 0 {
            DEFAULT_DOCUMENT_ENTRY
                .strip_suffix(DEFAULT_DOCUMENT_SUFFIX)
                .unwrap_or(DEFAULT_DOCUMENT_ENTRY)
                .to_string()
        } else {
            document_stem(name, suffix)
        };
        self.documents += 1;

        let mut candidate = format!("{stem}{suffix}");
        let mut counter = 2;
        while self.used.contains(&candidate.to_lowercase()) {
            candidate = format!("{stem}_{counter}{suffix}");
            counter += 1;
        }
        self.reserve(&candidate);
        candidate
    }
}

/// Sanitized entry name without the document suffix
fn document_stem(name: &str, suffix: &str) -> String {
    let stem = match name.len().checked_sub(suffix.len()) {
        Some(cut)
            if name.is_char_boundary(cut) && name[cut..].eq_ignore_ascii_case(suffix) =>
        {
            &name[..cut]
        }
        _ => name,
    };
    sanitize_path(stem).unwrap_or_else(|| "document".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_path() {
        assert_eq!(sanitize_path("files/icon.png").as_deref(), Some("files/icon.png"));
        assert_eq!(sanitize_path("../../etc/passwd").as_deref(), Some("etc/passwd"));
        assert_eq!(sanitize_path("/abs/./doc.kml").as_deref(), Some("abs/doc.kml"));
        assert_eq!(sanitize_path("files\\win.png").as_deref(), Some("files/win.png"));
        assert_eq!(sanitize_path(".."), None);
        assert_eq!(sanitize_path(""), None);
    }

    #[test]
    fn test_classify_entry() {
        let options = ArchiveOptions::default();
        assert_eq!(classify_entry("doc.kml", &options), EntryKind::Document);
        assert_eq!(classify_entry("nested/Tour.KML", &options), EntryKind::Document);
        assert_eq!(classify_entry("files/marker.PNG", &options), EntryKind::Image);
        assert_eq!(classify_entry("models/building.dae", &options), EntryKind::Model);
        assert_eq!(classify_entry("notes.txt", &options), EntryKind::Other);
        assert_eq!(classify_entry("kml", &options), EntryKind::Other);
    }

    #[test]
    fn test_entry_names_are_deterministic() {
        let mut names = EntryNames::default();
        names.reserve("files/icon.png");
        assert_eq!(names.document("anything", ".kml"), "doc.kml");
        assert_eq!(names.document("tour", ".kml"), "tour.kml");
        assert_eq!(names.document("Tour.KML", ".kml"), "Tour_2.kml");
        assert_eq!(names.document("doc", ".kml"), "doc_2.kml");
        assert_eq!(names.document("../evil", ".kml"), "evil.kml");
        assert_eq!(names.document("..", ".kml"), "document.kml");
        assert_eq!(names.document("files/icon.png", ".kml"), "files/icon.png.kml");
    }

    #[test]
    fn test_custom_suffix() {
        let options = ArchiveOptions::default().with_document_suffix(".xml");
        assert_eq!(classify_entry("doc.xml", &options), EntryKind::Document);
        assert_eq!(classify_entry("doc.kml", &options), EntryKind::Other);

        let mut names = EntryNames::default();
        assert_eq!(names.document("first", ".xml"), "doc.xml");
    }

    #[test]
    fn test_resource_from_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("pin.png");
        std::fs::write(&path, b"\x89PNG").expect("write");

        let resource = ResourceFile::from_path(&path).expect("read resource");
        assert_eq!(resource.name, "pin.png");
        assert_eq!(resource.contents, b"\x89PNG");

        assert!(ResourceFile::from_path(dir.path().join("missing.png")).is_err());
    }
}
