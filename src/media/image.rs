// SPDX-License-Identifier: MPL-2.0
//! Decoding slide images into widget-ready pixel data.
//!
//! Raster formats go through the `image` crate; SVG documents are
//! rendered to a PNG at their intrinsic size with resvg so every slide
//! ends up as an ordinary bitmap handle.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{GenericImageView, ImageError};
use resvg::usvg;
use std::fs;
use std::path::Path;
use tiny_skia;

/// A decoded image plus the dimensions the layout needs up front.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Wraps already-encoded bytes (the PNG a rasterized SVG produces).
    #[must_use]
    pub fn from_encoded(encoded: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            handle: image::Handle::from_bytes(encoded),
            width,
            height,
        }
    }
}

/// Reads and decodes one image file, dispatching on its extension.
///
/// # Errors
///
/// [`Error::Io`] when the file cannot be read or a raster format fails
/// to decode; [`Error::Svg`] when SVG parsing or rendering fails.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let path = path.as_ref();
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let bytes = fs::read(path).map_err(|e| Error::Io(e.to_string()))?;
    if is_svg {
        rasterize_svg(&bytes)
    } else {
        decode_raster(&bytes)
    }
}

/// Renders SVG markup to a PNG at the document's intrinsic size.
///
/// Shared by on-disk SVG slides and the embedded showcase assets, which
/// are all authored with explicit width/height attributes.
pub fn rasterize_svg(svg_data: &[u8]) -> Result<ImageData> {
    let tree = usvg::Tree::from_data(svg_data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    if width == 0 || height == 0 {
        return Err(Error::Svg("document has no drawable area".into()));
    }

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("pixmap allocation failed".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let png = pixmap.encode_png().map_err(|e| Error::Svg(e.to_string()))?;
    Ok(ImageData::from_encoded(png, width, height))
}

/// Decodes raster bytes (PNG, JPEG, GIF, ...) to RGBA.
pub fn decode_raster(bytes: &[u8]) -> Result<ImageData> {
    let decoded = image_rs::load_from_memory(bytes).map_err(|e| Error::Io(e.to_string()))?;
    let (width, height) = decoded.dimensions();
    Ok(ImageData::from_rgba(
        width,
        height,
        decoded.to_rgba8().into_vec(),
    ))
}

impl From<ImageError> for Error {
    fn from(err: ImageError) -> Self {
        Error::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use std::io;
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba([212, 175, 55, 255]))
            .save(&path)
            .expect("write png fixture");
        path
    }

    #[test]
    fn raster_slide_keeps_its_dimensions() {
        let dir = tempdir().expect("tempdir");
        let path = write_png(dir.path(), "pendant.png", 12, 7);

        let data = load_image(&path).expect("png decodes");
        assert_eq!((data.width, data.height), (12, 7));
    }

    #[test]
    fn svg_slide_rasterizes_at_intrinsic_size() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("band.svg");
        fs::write(
            &path,
            "<svg xmlns='http://www.w3.org/2000/svg' width='40' height='25'>\
             <circle cx='20' cy='12' r='9' fill='gold'/></svg>",
        )
        .expect("write svg fixture");

        let data = load_image(&path).expect("svg rasterizes");
        assert_eq!((data.width, data.height), (40, 25));
    }

    #[test]
    fn extension_check_ignores_case() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("brooch.SVG");
        fs::write(
            &path,
            "<svg xmlns='http://www.w3.org/2000/svg' width='5' height='5'/>",
        )
        .expect("write svg fixture");

        assert!(load_image(&path).is_ok());
    }

    #[test]
    fn unreadable_path_is_an_io_error() {
        let dir = tempdir().expect("tempdir");
        let result = load_image(dir.path().join("absent.jpg"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn garbage_raster_bytes_are_an_io_error() {
        assert!(matches!(
            decode_raster(b"certainly not an image"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn malformed_svg_is_an_svg_error() {
        assert!(matches!(
            rasterize_svg(b"<svg unterminated"),
            Err(Error::Svg(_))
        ));
    }

    #[test]
    fn zero_area_svg_is_rejected() {
        let svg = b"<svg xmlns='http://www.w3.org/2000/svg' width='0' height='16'/>";
        assert!(matches!(rasterize_svg(svg), Err(Error::Svg(_))));
    }

    #[test]
    fn image_crate_errors_map_to_io() {
        let error: Error = ImageError::IoError(io::Error::other("truncated stream")).into();
        match error {
            Error::Io(message) => assert!(message.contains("truncated stream")),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
