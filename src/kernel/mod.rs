//! Per-position match predicates.
//!
//! A kernel owns whatever it precomputed from the needle and answers one
//! question: does the needle match the haystack with its top-left corner at
//! `(x, y)`? The scanner in `search::scan` drives kernels over every valid
//! placement.

use crate::image::PixelView;

/// Match predicate evaluated at a single placement.
pub trait Kernel {
    /// Returns the needle size as `(width, height)` in pixels.
    fn size(&self) -> (usize, usize);

    /// Returns true if the needle matches with its top-left corner at `(x, y)`.
    ///
    /// Placements where the needle does not fit inside the haystack return
    /// `false`.
    fn matches_at(&self, haystack: PixelView<'_>, x: usize, y: usize) -> bool;
}

pub mod exact;
pub mod tolerance;

pub use exact::ExactMatcher;
pub use tolerance::ToleranceMatcher;
