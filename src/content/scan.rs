// SPDX-License-Identifier: MPL-2.0
//! Builds a [`Showcase`] from a content directory.
//!
//! Layout convention: one subdirectory per collection, holding the
//! collection's images. Subdirectories and images are both taken in
//! alphabetical order so the page is stable across runs. Files that are not
//! images, or fail to decode, are skipped.

use super::{Collection, Showcase, Slide};
use crate::error::{ContentError, Result};
use crate::media::{self, load_image};
use std::path::Path;

/// Scans `dir` and decodes every collection found inside.
///
/// # Errors
///
/// Returns [`ContentError::EmptyDirectory`] (wrapped) when the directory
/// yields no collection with at least one decodable image, and `Error::Io`
/// when the directory itself cannot be read.
pub fn scan_content_dir(dir: &Path) -> Result<Showcase> {
    let mut subdirs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            subdirs.push(path);
        }
    }
    subdirs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut collections = Vec::new();
    for subdir in subdirs {
        if let Some(collection) = scan_collection(&subdir)? {
            collections.push(collection);
        }
    }

    if collections.is_empty() {
        return Err(ContentError::EmptyDirectory(dir.display().to_string()).into());
    }

    Ok(Showcase { collections })
}

fn scan_collection(dir: &Path) -> Result<Option<Collection>> {
    let mut image_files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && media::is_image_file(&path) {
            image_files.push(path);
        }
    }
    image_files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut slides = Vec::new();
    for path in image_files {
        match load_image(&path) {
            Ok(image) => slides.push(Slide {
                image,
                source_name: file_name(&path),
            }),
            Err(err) => {
                eprintln!("Skipping {}: {}", path.display(), err);
            }
        }
    }

    if slides.is_empty() {
        return Ok(None);
    }

    Ok(Some(Collection {
        title: display_title(dir),
        description: String::new(),
        slides,
    }))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Turns a directory name into a display title ("rose-gold_rings" -> "rose gold rings").
fn display_title(dir: &Path) -> String {
    file_name(dir).replace(['-', '_'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let image = RgbaImage::from_pixel(2, 2, Rgba([10, 20, 30, 255]));
        image.save(&path).expect("failed to write test png");
        path
    }

    #[test]
    fn scan_builds_collections_from_subdirectories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bracelets = temp_dir.path().join("bracelets");
        let pendants = temp_dir.path().join("pendants");
        fs::create_dir(&bracelets).expect("create dir");
        fs::create_dir(&pendants).expect("create dir");
        write_png(&bracelets, "b.png");
        write_png(&bracelets, "a.png");
        write_png(&pendants, "only.png");

        let showcase = scan_content_dir(temp_dir.path()).expect("scan should succeed");

        assert_eq!(showcase.collection_count(), 2);
        // Subdirectories alphabetical
        assert_eq!(showcase.collections[0].title, "bracelets");
        assert_eq!(showcase.collections[1].title, "pendants");
        // Images alphabetical within a collection
        assert_eq!(showcase.collections[0].slides[0].source_name, "a.png");
        assert_eq!(showcase.collections[0].slides[1].source_name, "b.png");
    }

    #[test]
    fn scan_skips_non_image_and_undecodable_files() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let subdir = temp_dir.path().join("mixed");
        fs::create_dir(&subdir).expect("create dir");
        write_png(&subdir, "good.png");
        fs::write(subdir.join("notes.txt"), "not an image").expect("write file");
        fs::write(subdir.join("broken.png"), "not a png").expect("write file");

        let showcase = scan_content_dir(temp_dir.path()).expect("scan should succeed");

        assert_eq!(showcase.collection_count(), 1);
        assert_eq!(showcase.collections[0].slides.len(), 1);
        assert_eq!(showcase.collections[0].slides[0].source_name, "good.png");
    }

    #[test]
    fn scan_ignores_loose_files_at_top_level() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        write_png(temp_dir.path(), "stray.png");
        let subdir = temp_dir.path().join("real");
        fs::create_dir(&subdir).expect("create dir");
        write_png(&subdir, "img.png");

        let showcase = scan_content_dir(temp_dir.path()).expect("scan should succeed");

        assert_eq!(showcase.collection_count(), 1);
        assert_eq!(showcase.collections[0].title, "real");
    }

    #[test]
    fn scan_empty_directory_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let result = scan_content_dir(temp_dir.path());
        assert!(matches!(
            result,
            Err(crate::error::Error::Content(ContentError::EmptyDirectory(_)))
        ));
    }

    #[test]
    fn scan_directory_with_only_empty_subdirs_is_an_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::create_dir(temp_dir.path().join("empty-one")).expect("create dir");
        fs::create_dir(temp_dir.path().join("empty-two")).expect("create dir");

        let result = scan_content_dir(temp_dir.path());
        assert!(matches!(
            result,
            Err(crate::error::Error::Content(ContentError::EmptyDirectory(_)))
        ));
    }

    #[test]
    fn display_title_replaces_separators() {
        assert_eq!(
            display_title(Path::new("/x/rose-gold_rings")),
            "rose gold rings"
        );
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing = temp_dir.path().join("nope");

        assert!(matches!(
            scan_content_dir(&missing),
            Err(crate::error::Error::Io(_))
        ));
    }
}
