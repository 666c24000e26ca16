//! imagesearch locates a small RGBA image (the needle) inside a larger one
//! (the haystack) by testing every placement.
//!
//! Two matchers are provided: [`ExactMatcher`] compares R, G and B for
//! equality, and [`ToleranceMatcher`] accepts per-channel deviations up to a
//! tolerance that widens for translucent needle pixels. [`Matcher::new`]
//! picks one from a tolerance value. Both return the first match in row-major
//! order, or [`Rect::ZERO`] when there is none.
//!
//! Decoding PNG/JPEG files is available behind the `image-io` feature and
//! `tracing` spans behind the `tracing` feature.

pub mod image;
pub mod kernel;
pub mod lowlevel;
pub mod rect;
pub mod search;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use crate::image::io;

pub use crate::image::{PixelBuffer, PixelView, Rgba, SourceImage};
pub use kernel::{ExactMatcher, Kernel, ToleranceMatcher};
pub use rect::{Point, Rect};
pub use search::{Matcher, Searchable};
pub use util::{ImageSearchError, ImageSearchResult};
