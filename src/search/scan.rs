//! Brute-force sliding-window scan.
//!
//! Every valid top-left placement is visited in row-major order (y outer, x
//! inner) and handed to a [`Kernel`]. Placements are limited to positions
//! where the whole needle lies inside the haystack, so a needle larger than
//! the haystack simply produces an empty range.

use crate::image::PixelView;
use crate::kernel::Kernel;
use crate::rect::{Point, Rect};
use crate::trace::trace_event;

/// Returns the inclusive `(max_x, max_y)` of valid top-left placements.
///
/// `None` means there is no placement at all: the needle is empty or does not
/// fit in the haystack.
pub fn placement_range(
    haystack_width: usize,
    haystack_height: usize,
    needle_width: usize,
    needle_height: usize,
) -> Option<(usize, usize)> {
    if needle_width == 0 || needle_height == 0 {
        return None;
    }
    let max_x = haystack_width.checked_sub(needle_width)?;
    let max_y = haystack_height.checked_sub(needle_height)?;
    Some((max_x, max_y))
}

fn match_rect(haystack: &PixelView<'_>, x: usize, y: usize, size: (usize, usize)) -> Rect {
    let origin = haystack.origin();
    Rect::from_origin_size(Point::new(origin.x + x, origin.y + y), size.0, size.1)
}

/// Returns the first matching placement, or `Rect::ZERO` if none matches.
///
/// The rectangle is expressed in the haystack view's coordinates (see
/// [`PixelView::origin`]).
pub fn scan_first<K: Kernel + ?Sized>(haystack: PixelView<'_>, kernel: &K) -> Rect {
    let size = kernel.size();
    let Some((max_x, max_y)) =
        placement_range(haystack.width(), haystack.height(), size.0, size.1)
    else {
        trace_event!("search_result", found = false, scanned = 0usize);
        return Rect::ZERO;
    };

    let mut scanned = 0usize;
    for y in 0..=max_y {
        for x in 0..=max_x {
            scanned += 1;
            if kernel.matches_at(haystack, x, y) {
                trace_event!("search_result", found = true, x = x, y = y, scanned = scanned);
                return match_rect(&haystack, x, y, size);
            }
        }
    }

    trace_event!("search_result", found = false, scanned = scanned);
    Rect::ZERO
}

/// Returns every matching placement in row-major order.
///
/// Matches may overlap. The first element, if any, equals [`scan_first`].
pub fn scan_all<K: Kernel + ?Sized>(haystack: PixelView<'_>, kernel: &K) -> Vec<Rect> {
    let size = kernel.size();
    let Some((max_x, max_y)) =
        placement_range(haystack.width(), haystack.height(), size.0, size.1)
    else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for y in 0..=max_y {
        for x in 0..=max_x {
            if kernel.matches_at(haystack, x, y) {
                out.push(match_rect(&haystack, x, y, size));
            }
        }
    }

    trace_event!("search_all_result", count = out.len());
    out
}
