//! RGBA pixel views and owned buffers.
//!
//! `PixelView` is a borrowed 2D view into a byte slice holding RGBA pixels in
//! R, G, B, A order. The stride counts bytes between the starts of consecutive
//! rows, so a stride larger than `4 * width` represents padded rows. ROI
//! slices are zero-copy views into the same backing slice; they keep the
//! parent stride and remember their origin so results can be reported in the
//! parent's coordinates.
//!
//! Zero-width or zero-height images are valid. They contain no pixels and
//! never match anything.

use crate::rect::{Point, Rect};
use crate::util::{ImageSearchError, ImageSearchResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Bytes per RGBA pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// One pixel as `[r, g, b, a]`.
pub type Rgba = [u8; 4];

/// A decoded image that matchers can be built from.
///
/// Implementors expose their size and a per-pixel RGBA accessor; matcher
/// construction copies what it needs, so the source may change or be dropped
/// afterwards.
pub trait SourceImage {
    /// Returns `(width, height)` in pixels.
    fn dimensions(&self) -> (usize, usize);

    /// Returns the pixel at `(x, y)`. Callers stay within `dimensions()`.
    fn rgba_at(&self, x: usize, y: usize) -> Rgba;
}

/// Byte offset of pixel `(x, y)` for a row stride in bytes.
#[inline]
fn byte_offset(stride: usize, x: usize, y: usize) -> Option<usize> {
    y.checked_mul(stride)?
        .checked_add(x.checked_mul(BYTES_PER_PIXEL)?)
}

/// Borrowed RGBA image view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct PixelView<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
    stride: usize,
    origin: Point,
}

impl<'a> PixelView<'a> {
    /// Creates a contiguous view with `stride == 4 * width`.
    pub fn from_slice(data: &'a [u8], width: usize, height: usize) -> ImageSearchResult<Self> {
        Self::new(data, width, height, width.saturating_mul(BYTES_PER_PIXEL))
    }

    /// Creates a view with an explicit stride in bytes.
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        stride: usize,
    ) -> ImageSearchResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(ImageSearchError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
            origin: Point::ZERO,
        })
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in bytes between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the top-left corner of this view in its parent's coordinates.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the area covered by the view in its parent's coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.width, self.height)
    }

    /// Returns true if the view has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the byte offset of pixel `(x, y)` if it is within bounds.
    ///
    /// Every pixel access in the crate goes through this mapping.
    #[inline]
    pub fn offset(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        byte_offset(self.stride, x, y)
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        let start = self.offset(x, y)?;
        let bytes = self.data.get(start..start + BYTES_PER_PIXEL)?;
        bytes.try_into().ok()
    }

    /// Returns the bytes of `len` consecutive pixels starting at `(x, y)`.
    ///
    /// Yields `None` if the run leaves the row.
    #[inline]
    pub fn span(&self, x: usize, y: usize, len: usize) -> Option<&'a [u8]> {
        if len == 0 {
            let empty: &'a [u8] = &[];
            return (y < self.height && x <= self.width).then_some(empty);
        }
        if x.checked_add(len)? > self.width {
            return None;
        }
        let start = self.offset(x, y)?;
        self.data.get(start..start + len * BYTES_PER_PIXEL)
    }

    /// Returns the bytes of row `y`, `4 * width` long.
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        self.span(0, y, self.width)
    }

    /// Returns a zero-copy ROI view into the same backing buffer.
    ///
    /// The ROI's origin is offset from this view's origin, so rectangles found
    /// inside it are expressed in the same coordinates as this view.
    pub fn roi(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> ImageSearchResult<PixelView<'a>> {
        let out_of_bounds = ImageSearchError::RoiOutOfBounds {
            x,
            y,
            width,
            height,
            img_width: self.width,
            img_height: self.height,
        };
        let end_x = x.checked_add(width).ok_or_else(|| out_of_bounds.clone())?;
        let end_y = y.checked_add(height).ok_or_else(|| out_of_bounds.clone())?;
        if end_x > self.width || end_y > self.height {
            return Err(out_of_bounds);
        }

        let origin = Point::new(self.origin.x + x, self.origin.y + y);
        let data: &'a [u8] = if width == 0 || height == 0 {
            &[]
        } else {
            let start = self.offset(x, y).ok_or_else(|| out_of_bounds.clone())?;
            self.data.get(start..).ok_or(out_of_bounds)?
        };

        let mut view = PixelView::new(data, width, height, self.stride)?;
        view.origin = origin;
        Ok(view)
    }
}

impl SourceImage for PixelView<'_> {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn rgba_at(&self, x: usize, y: usize) -> Rgba {
        self.pixel(x, y).unwrap_or_default()
    }
}

/// Owned contiguous RGBA image buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: usize,
    height: usize,
}

impl PixelBuffer {
    /// Wraps a contiguous buffer of exactly `4 * width * height` bytes.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> ImageSearchResult<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(BYTES_PER_PIXEL));
        if expected != Some(data.len()) {
            return Err(ImageSearchError::DimensionMismatch {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Builds a buffer by evaluating `f` at every pixel in row-major order.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Rgba,
    {
        let mut data = Vec::with_capacity(width * height * BYTES_PER_PIXEL);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Builds a buffer where every pixel has the same value.
    pub fn filled(width: usize, height: usize, value: Rgba) -> Self {
        Self::from_fn(width, height, |_, _| value)
    }

    /// Copies any source image into contiguous RGBA storage.
    pub fn from_source<S: SourceImage + ?Sized>(src: &S) -> Self {
        let (width, height) = src.dimensions();
        Self::from_fn(width, height, |x, y| src.rgba_at(x, y))
    }

    /// Returns the image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the contiguous pixel bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns its bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Returns a borrowed view of the image.
    pub fn view(&self) -> PixelView<'_> {
        PixelView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width * BYTES_PER_PIXEL,
            origin: Point::ZERO,
        }
    }

    /// Returns the pixel at `(x, y)` if it is within bounds.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        self.view().pixel(x, y)
    }

    /// Returns a mutable reference to the pixel at `(x, y)`.
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut Rgba> {
        let start = self.view().offset(x, y)?;
        let bytes = self.data.get_mut(start..start + BYTES_PER_PIXEL)?;
        bytes.try_into().ok()
    }

    /// Overwrites the pixel at `(x, y)`; out-of-bounds writes are ignored.
    pub fn put_pixel(&mut self, x: usize, y: usize, value: Rgba) {
        if let Some(px) = self.pixel_mut(x, y) {
            *px = value;
        }
    }
}

impl SourceImage for PixelBuffer {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn rgba_at(&self, x: usize, y: usize) -> Rgba {
        self.pixel(x, y).unwrap_or_default()
    }
}

fn required_len(width: usize, height: usize, stride: usize) -> ImageSearchResult<usize> {
    let row_bytes = width
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or(ImageSearchError::InvalidStride { width, stride })?;
    if stride < row_bytes {
        return Err(ImageSearchError::InvalidStride { width, stride });
    }
    if width == 0 || height == 0 {
        return Ok(0);
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(row_bytes))
        .ok_or(ImageSearchError::BufferTooSmall {
            needed: usize::MAX,
            got: 0,
        })
}
