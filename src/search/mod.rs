//! Needle search over haystack images.
//!
//! [`Searchable`] is the caller-facing contract shared by both matchers.
//! [`Matcher`] picks exact or tolerance matching from a tolerance value so
//! callers need not care which one they hold.

use crate::image::{PixelView, SourceImage};
use crate::kernel::{ExactMatcher, Kernel, ToleranceMatcher};
use crate::rect::Rect;

pub mod scan;

/// Something that can be located inside a haystack image.
pub trait Searchable {
    /// Returns the first match in row-major order, or `Rect::ZERO`.
    ///
    /// Never fails: a needle that does not fit in the haystack, or an empty
    /// needle or haystack, yields `Rect::ZERO`.
    fn search_in(&self, haystack: PixelView<'_>) -> Rect;

    /// Returns every match in row-major order.
    fn search_all_in(&self, haystack: PixelView<'_>) -> Vec<Rect>;

    /// Like [`Searchable::search_in`] but maps "not found" to `None`.
    fn find_in(&self, haystack: PixelView<'_>) -> Option<Rect> {
        self.search_in(haystack).non_empty()
    }
}

/// Matcher selected by tolerance: exact for 0, bounded otherwise.
#[derive(Clone, Debug)]
pub enum Matcher {
    /// RGB equality.
    Exact(ExactMatcher),
    /// Per-channel deviation within the tolerance, widened by transparency.
    Tolerance(ToleranceMatcher),
}

impl Matcher {
    /// Builds a matcher for `needle`; `tolerance == 0` selects exact matching.
    pub fn new<S: SourceImage + ?Sized>(needle: &S, tolerance: u8) -> Self {
        if tolerance == 0 {
            Self::exact(needle)
        } else {
            Self::with_tolerance(needle, tolerance)
        }
    }

    /// Builds an exact matcher.
    pub fn exact<S: SourceImage + ?Sized>(needle: &S) -> Self {
        Self::Exact(ExactMatcher::new(needle))
    }

    /// Builds a tolerance matcher, even for a tolerance of 0.
    ///
    /// With tolerance 0, translucent needle pixels still get widened bounds,
    /// which is where this differs from [`Matcher::exact`].
    pub fn with_tolerance<S: SourceImage + ?Sized>(needle: &S, tolerance: u8) -> Self {
        Self::Tolerance(ToleranceMatcher::new(needle, tolerance))
    }

    /// Returns the configured tolerance (0 for exact matching).
    pub fn tolerance(&self) -> u8 {
        match self {
            Self::Exact(_) => 0,
            Self::Tolerance(m) => m.tolerance(),
        }
    }

    /// Returns the needle size as `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        Kernel::size(self)
    }
}

impl Kernel for Matcher {
    fn size(&self) -> (usize, usize) {
        match self {
            Self::Exact(m) => m.size(),
            Self::Tolerance(m) => m.size(),
        }
    }

    fn matches_at(&self, haystack: PixelView<'_>, x: usize, y: usize) -> bool {
        match self {
            Self::Exact(m) => m.matches_at(haystack, x, y),
            Self::Tolerance(m) => m.matches_at(haystack, x, y),
        }
    }
}

impl Searchable for Matcher {
    fn search_in(&self, haystack: PixelView<'_>) -> Rect {
        match self {
            Self::Exact(m) => m.search_in(haystack),
            Self::Tolerance(m) => m.search_in(haystack),
        }
    }

    fn search_all_in(&self, haystack: PixelView<'_>) -> Vec<Rect> {
        match self {
            Self::Exact(m) => m.search_all_in(haystack),
            Self::Tolerance(m) => m.search_all_in(haystack),
        }
    }
}
