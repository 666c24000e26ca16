//! Convenience helpers for decoding images via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Decoding failures are
//! reported here as `ImageSearchError::ImageIo`; the matchers never see raw
//! file bytes.

use crate::image::{PixelBuffer, PixelView, Rgba, SourceImage};
use crate::search::Matcher;
use crate::util::{ImageSearchError, ImageSearchResult};
use ::image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

impl SourceImage for RgbaImage {
    fn dimensions(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }

    fn rgba_at(&self, x: usize, y: usize) -> Rgba {
        self.get_pixel(x as u32, y as u32).0
    }
}

impl SourceImage for DynamicImage {
    fn dimensions(&self) -> (usize, usize) {
        (self.width() as usize, self.height() as usize)
    }

    fn rgba_at(&self, x: usize, y: usize) -> Rgba {
        self.get_pixel(x as u32, y as u32).0
    }
}

/// Creates a borrowed view from an RGBA image buffer.
pub fn view_from_rgba_image(img: &RgbaImage) -> ImageSearchResult<PixelView<'_>> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    PixelView::from_slice(img.as_raw(), width, height)
}

/// Creates an owned RGBA buffer from a dynamic image of any pixel format.
pub fn owned_from_dynamic_image(img: &DynamicImage) -> ImageSearchResult<PixelBuffer> {
    let rgba = img.to_rgba8();
    let width = rgba.width() as usize;
    let height = rgba.height() as usize;
    PixelBuffer::new(rgba.into_raw(), width, height)
}

/// Loads an image in any enabled format and converts it to RGBA.
pub fn load_rgba_image<P: AsRef<Path>>(path: P) -> ImageSearchResult<PixelBuffer> {
    let img = ::image::open(path).map_err(|err| ImageSearchError::ImageIo {
        reason: err.to_string(),
    })?;
    owned_from_dynamic_image(&img)
}

/// Loads a PNG file and converts it to RGBA.
pub fn load_png<P: AsRef<Path>>(path: P) -> ImageSearchResult<PixelBuffer> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| ImageSearchError::ImageIo {
        reason: format!("{}: {err}", path.display()),
    })?;
    let img = ::image::load(BufReader::new(file), ImageFormat::Png).map_err(|err| {
        ImageSearchError::ImageIo {
            reason: format!("{}: {err}", path.display()),
        }
    })?;
    owned_from_dynamic_image(&img)
}

/// Loads a PNG needle and builds a matcher for it.
///
/// `tolerance == 0` selects exact matching; anything else selects tolerance
/// matching.
pub fn load_searchable_png<P: AsRef<Path>>(path: P, tolerance: u8) -> ImageSearchResult<Matcher> {
    let needle = load_png(path)?;
    Ok(Matcher::new(&needle, tolerance))
}
