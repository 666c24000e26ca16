//! Exact RGB matching against a private snapshot of the needle.

use crate::image::{PixelBuffer, PixelView, SourceImage, BYTES_PER_PIXEL};
use crate::kernel::Kernel;
use crate::rect::Rect;
use crate::search::scan::{scan_all, scan_first};
use crate::search::Searchable;
use crate::trace::{trace_event, trace_span};

/// Matches haystack regions whose R, G and B channels equal the needle's.
///
/// Alpha is never compared. The needle is copied at construction, so the
/// source image may be mutated or dropped afterwards.
#[derive(Clone, Debug)]
pub struct ExactMatcher {
    needle: PixelBuffer,
}

impl ExactMatcher {
    /// Snapshots `needle` into contiguous RGBA storage.
    pub fn new<S: SourceImage + ?Sized>(needle: &S) -> Self {
        let needle = PixelBuffer::from_source(needle);
        trace_event!(
            "matcher_built",
            mode = "exact",
            width = needle.width(),
            height = needle.height()
        );
        Self { needle }
    }

    /// Returns the needle snapshot.
    pub fn needle(&self) -> PixelView<'_> {
        self.needle.view()
    }
}

impl Kernel for ExactMatcher {
    fn size(&self) -> (usize, usize) {
        (self.needle.width(), self.needle.height())
    }

    fn matches_at(&self, haystack: PixelView<'_>, x: usize, y: usize) -> bool {
        let needle = self.needle.view();
        let (width, height) = self.size();
        if width == 0 || height == 0 {
            return false;
        }

        for ty in 0..height {
            let Some(hay_y) = y.checked_add(ty) else {
                return false;
            };
            let (Some(hay_row), Some(src_row)) = (haystack.span(x, hay_y, width), needle.row(ty))
            else {
                return false;
            };
            let pixels = hay_row
                .chunks_exact(BYTES_PER_PIXEL)
                .zip(src_row.chunks_exact(BYTES_PER_PIXEL));
            for (hay, src) in pixels {
                if hay[0] != src[0] || hay[1] != src[1] || hay[2] != src[2] {
                    return false;
                }
            }
        }
        true
    }
}

impl Searchable for ExactMatcher {
    fn search_in(&self, haystack: PixelView<'_>) -> Rect {
        let _span = trace_span!(
            "search",
            mode = "exact",
            haystack_width = haystack.width(),
            haystack_height = haystack.height()
        )
        .entered();
        scan_first(haystack, self)
    }

    fn search_all_in(&self, haystack: PixelView<'_>) -> Vec<Rect> {
        let _span = trace_span!("search_all", mode = "exact").entered();
        scan_all(haystack, self)
    }
}
