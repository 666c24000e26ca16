//! Low-level building blocks for custom scans.
//!
//! Most users only need [`Matcher`](crate::Matcher) and
//! [`Searchable`](crate::Searchable). These exports let callers evaluate a
//! single placement or drive the scanner with their own [`Kernel`].

pub use crate::image::BYTES_PER_PIXEL;
pub use crate::kernel::Kernel;
pub use crate::search::scan::{placement_range, scan_all, scan_first};
