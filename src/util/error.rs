//! Error types for imagesearch.
//!
//! Matching itself is total; errors only arise where raw buffers or encoded
//! files cross into the crate.

use thiserror::Error;

/// Result alias for imagesearch operations.
pub type ImageSearchResult<T> = std::result::Result<T, ImageSearchError>;

/// Errors raised when building pixel views or decoding images.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageSearchError {
    /// The row stride cannot hold a full row of RGBA pixels.
    #[error("stride of {stride} bytes is too short for {width} RGBA pixels")]
    InvalidStride { width: usize, stride: usize },
    /// The backing slice is shorter than the described image.
    #[error("buffer too small: need {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// An owned buffer does not hold exactly `4 * width * height` bytes.
    #[error("buffer of {len} bytes does not describe a {width}x{height} RGBA image")]
    DimensionMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
    /// A region of interest extends past the image bounds.
    #[error(
        "roi ({x}, {y}, {width}x{height}) out of bounds for {img_width}x{img_height} image"
    )]
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        img_width: usize,
        img_height: usize,
    },
    /// Reading or decoding an image file failed.
    #[error("image io error: {reason}")]
    ImageIo { reason: String },
}
