//! Archive Tests
//!
//! Reading and writing KMZ containers on disk.

use kml_core::{Coordinate, Document, Kml, LineString, Placemark, Point};
use kml_kmz::{
    list_archive, read_archive, read_archive_resources, read_archive_with, write_archive,
    ArchiveOptions, EntryKind, KmzError, ResourceFile,
};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn landmarks() -> Kml {
    Kml::new(
        Document::default().with_name("Landmarks").with_feature(
            Placemark::default()
                .with_name("Opera House")
                .with_style_url("#pin")
                .with_geometry(Point::new(Coordinate::new(151.21037, -33.8526))),
        ),
    )
}

fn harbour_walk() -> Kml {
    Kml::new(
        Placemark::default().with_name("Harbour walk").with_geometry(LineString::new(vec![
            Coordinate::new(151.2108, -33.8523),
            Coordinate::with_altitude(151.2106, -33.8480, 12.5),
        ])),
    )
}

/// Write a container entry by entry, bypassing the archive writer
fn raw_archive(path: &Path, entries: &[(&str, &str)]) {
    let file = std::fs::File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    for (name, contents) in entries {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(contents.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

#[test]
fn test_write_and_read_back() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sydney.kmz");
    let icon = ResourceFile::new("files/pin.png", b"\x89PNG\r\n\x1a\n".to_vec());

    write_archive(
        &path,
        &[("landmarks", Some(landmarks())), ("walk", Some(harbour_walk()))],
        std::slice::from_ref(&icon),
    )
    .unwrap();

    let documents = read_archive(&path).unwrap();
    assert_eq!(documents, vec![Some(landmarks()), Some(harbour_walk())]);

    let resources = read_archive_resources(&path).unwrap();
    assert_eq!(resources, vec![icon]);
}

#[test]
fn test_entry_names_and_listing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("names.kmz");

    write_archive(
        &path,
        &[
            ("main", Some(landmarks())),
            ("skipped", None),
            ("walk.kml", Some(harbour_walk())),
            ("WALK", Some(harbour_walk())),
        ],
        &[
            ResourceFile::new("files/pin.png", vec![1, 2, 3]),
            ResourceFile::new("models/bridge.dae", b"<COLLADA/>".to_vec()),
            ResourceFile::new("readme.txt", b"hello".to_vec()),
        ],
    )
    .unwrap();

    let listing = list_archive(&path).unwrap();
    let names: Vec<_> = listing.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "doc.kml",
            "walk.kml",
            "WALK_2.kml",
            "files/pin.png",
            "models/bridge.dae",
            "readme.txt"
        ]
    );

    let kinds: Vec<_> = listing.iter().map(|entry| entry.kind).collect();
    assert_eq!(
        kinds,
        [
            EntryKind::Document,
            EntryKind::Document,
            EntryKind::Document,
            EntryKind::Image,
            EntryKind::Model,
            EntryKind::Other
        ]
    );
    assert_eq!(listing[3].size, 3);
}

#[test]
fn test_failed_write_leaves_no_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.kmz");

    let result = write_archive(
        &path,
        &[("doc", Some(landmarks()))],
        &[ResourceFile::new("../..", vec![0])],
    );
    assert!(matches!(result, Err(KmzError::InvalidEntryName(_))));
    assert!(!path.exists());

    let missing = dir.path().join("no-such-dir").join("out.kmz");
    let result = write_archive(&missing, &[("doc", Some(landmarks()))], &[]);
    assert!(matches!(result, Err(KmzError::Io(_))));
    assert!(!missing.exists());

    let result = write_archive(
        &path,
        &[("doc", Some(landmarks()))],
        &[
            ResourceFile::new("files/icon.png", vec![1]),
            ResourceFile::new("../files/icon.png", vec![2]),
        ],
    );
    assert!(matches!(result, Err(KmzError::InvalidEntryName(name)) if name == "../files/icon.png"));
    assert!(!path.exists());

    // No temporary files left behind
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_corrupt_entries_are_skipped() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.kmz");
    let good = kml_core::to_string(&harbour_walk(), &Default::default()).unwrap();

    raw_archive(
        &path,
        &[
            ("doc.kml", good.as_str()),
            ("broken.kml", "<kml><Placemark><name>cut"),
            ("route.gpx.kml", "<gpx version=\"1.1\"/>"),
            ("icon.png", "\u{89}PNG"),
        ],
    );

    let documents = read_archive(&path).unwrap();
    assert_eq!(documents, vec![Some(harbour_walk()), None]);
}

#[test]
fn test_traversal_names_are_sanitized() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("evil.kmz");
    let good = kml_core::to_string(&landmarks(), &Default::default()).unwrap();

    raw_archive(
        &path,
        &[
            ("../../outside.kml", good.as_str()),
            ("/etc/passwd", "root:x:0:0"),
        ],
    );

    let listing = list_archive(&path).unwrap();
    let names: Vec<_> = listing.iter().map(|entry| entry.name.as_str()).collect();
    assert_eq!(names, ["outside.kml", "etc/passwd"]);

    assert_eq!(read_archive(&path).unwrap(), vec![Some(landmarks())]);
    let resources = read_archive_resources(&path).unwrap();
    assert_eq!(resources[0].name, "etc/passwd");
}

#[test]
fn test_oversized_entries_are_skipped() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("big.kmz");
    write_archive(&path, &[("doc", Some(landmarks()))], &[]).unwrap();

    let options = ArchiveOptions::default().with_max_entry_size(16);
    assert!(read_archive_with(&path, &options).unwrap().is_empty());
    assert_eq!(read_archive(&path).unwrap().len(), 1);
}

#[test]
fn test_not_an_archive() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain.kmz");
    std::fs::write(&path, b"<kml xmlns=\"http://www.opengis.net/kml/2.2\"/>").unwrap();

    assert!(matches!(read_archive(&path), Err(KmzError::Zip(_))));
    assert!(matches!(
        read_archive(dir.path().join("missing.kmz")),
        Err(KmzError::Io(_))
    ));
}

#[test]
fn test_custom_options() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stored.kmz");
    let options = ArchiveOptions::default()
        .with_compression(zip::CompressionMethod::Stored)
        .with_encode_options(kml_core::EncodeOptions::compact());

    kml_kmz::write_archive_with(&path, &[("doc", Some(landmarks()))], &[], &options).unwrap();

    let listing = list_archive(&path).unwrap();
    assert_eq!(listing[0].size, listing[0].compressed_size);
    assert_eq!(read_archive(&path).unwrap(), vec![Some(landmarks())]);
}
