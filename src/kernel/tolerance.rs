//! Tolerance matching against precomputed per-pixel bounds.
//!
//! Each needle pixel becomes an inclusive `[min, max]` range per RGB channel.
//! The half-width of the range is the configured tolerance, widened to
//! `255 - alpha` for translucent pixels, so a fully transparent needle pixel
//! accepts any haystack colour. Bounds are derived once; scanning only does
//! byte comparisons.

use crate::image::{PixelBuffer, PixelView, SourceImage, BYTES_PER_PIXEL};
use crate::kernel::Kernel;
use crate::rect::Rect;
use crate::search::scan::{scan_all, scan_first};
use crate::search::Searchable;
use crate::trace::{trace_event, trace_span};
use crate::util::math::{effective_tolerance, tolerance_max, tolerance_min};

/// Matches haystack regions whose RGB channels stay within per-pixel bounds.
#[derive(Clone, Debug)]
pub struct ToleranceMatcher {
    tolerance: u8,
    min: PixelBuffer,
    max: PixelBuffer,
}

impl ToleranceMatcher {
    /// Derives the bound buffers for `needle` at the given tolerance.
    pub fn new<S: SourceImage + ?Sized>(needle: &S, tolerance: u8) -> Self {
        let (width, height) = needle.dimensions();
        let min = PixelBuffer::from_fn(width, height, |x, y| {
            let [r, g, b, a] = needle.rgba_at(x, y);
            let t = effective_tolerance(a, tolerance);
            [
                tolerance_min(r, t),
                tolerance_min(g, t),
                tolerance_min(b, t),
                u8::MAX,
            ]
        });
        let max = PixelBuffer::from_fn(width, height, |x, y| {
            let [r, g, b, a] = needle.rgba_at(x, y);
            let t = effective_tolerance(a, tolerance);
            [
                tolerance_max(r, t),
                tolerance_max(g, t),
                tolerance_max(b, t),
                u8::MAX,
            ]
        });

        trace_event!(
            "matcher_built",
            mode = "tolerance",
            tolerance = tolerance,
            width = width,
            height = height
        );
        Self {
            tolerance,
            min,
            max,
        }
    }

    /// Returns the configured tolerance.
    pub fn tolerance(&self) -> u8 {
        self.tolerance
    }

    /// Returns the per-pixel lower bounds. Alpha is always 255.
    pub fn min_bounds(&self) -> PixelView<'_> {
        self.min.view()
    }

    /// Returns the per-pixel upper bounds. Alpha is always 255.
    pub fn max_bounds(&self) -> PixelView<'_> {
        self.max.view()
    }
}

impl Kernel for ToleranceMatcher {
    fn size(&self) -> (usize, usize) {
        (self.min.width(), self.min.height())
    }

    fn matches_at(&self, haystack: PixelView<'_>, x: usize, y: usize) -> bool {
        let (min, max) = (self.min.view(), self.max.view());
        let (width, height) = self.size();
        if width == 0 || height == 0 {
            return false;
        }

        for ty in 0..height {
            let Some(hay_y) = y.checked_add(ty) else {
                return false;
            };
            let (Some(hay_row), Some(lo_row), Some(hi_row)) =
                (haystack.span(x, hay_y, width), min.row(ty), max.row(ty))
            else {
                return false;
            };
            let pixels = hay_row
                .chunks_exact(BYTES_PER_PIXEL)
                .zip(lo_row.chunks_exact(BYTES_PER_PIXEL))
                .zip(hi_row.chunks_exact(BYTES_PER_PIXEL));
            for ((hay, lo), hi) in pixels {
                if hay[0] < lo[0]
                    || hay[1] < lo[1]
                    || hay[2] < lo[2]
                    || hay[0] > hi[0]
                    || hay[1] > hi[1]
                    || hay[2] > hi[2]
                {
                    return false;
                }
            }
        }
        true
    }
}

impl Searchable for ToleranceMatcher {
    fn search_in(&self, haystack: PixelView<'_>) -> Rect {
        let _span = trace_span!(
            "search",
            mode = "tolerance",
            tolerance = self.tolerance,
            haystack_width = haystack.width(),
            haystack_height = haystack.height()
        )
        .entered();
        scan_first(haystack, self)
    }

    fn search_all_in(&self, haystack: PixelView<'_>) -> Vec<Rect> {
        let _span = trace_span!("search_all", mode = "tolerance", tolerance = self.tolerance)
            .entered();
        scan_all(haystack, self)
    }
}
