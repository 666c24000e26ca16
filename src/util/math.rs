//! Clamped single-channel arithmetic for tolerance bounds.

/// Largest channel value within `tolerance` of `value`, ceiling at 255.
#[inline]
pub(crate) fn tolerance_max(value: u8, tolerance: u8) -> u8 {
    value.saturating_add(tolerance)
}

/// Smallest channel value within `tolerance` of `value`, floored at 0.
#[inline]
pub(crate) fn tolerance_min(value: u8, tolerance: u8) -> u8 {
    value.saturating_sub(tolerance)
}

/// Widens the configured tolerance by the pixel's transparency.
///
/// A fully transparent pixel (alpha 0) accepts any value; a fully opaque one
/// keeps the configured tolerance.
#[inline]
pub(crate) fn effective_tolerance(alpha: u8, tolerance: u8) -> u8 {
    tolerance.max(u8::MAX - alpha)
}

#[cfg(test)]
mod tests {
    use super::{effective_tolerance, tolerance_max, tolerance_min};

    #[test]
    fn tolerance_max_saturates_at_255() {
        assert_eq!(tolerance_max(200, 10), 210);
        assert_eq!(tolerance_max(250, 10), 255);
        assert_eq!(tolerance_max(255, 255), 255);
    }

    #[test]
    fn tolerance_min_saturates_at_zero() {
        assert_eq!(tolerance_min(20, 10), 10);
        assert_eq!(tolerance_min(5, 10), 0);
        assert_eq!(tolerance_min(0, 0), 0);
    }

    #[test]
    fn effective_tolerance_tracks_transparency() {
        assert_eq!(effective_tolerance(255, 7), 7);
        assert_eq!(effective_tolerance(0, 7), 255);
        assert_eq!(effective_tolerance(250, 3), 5);
        assert_eq!(effective_tolerance(250, 30), 30);
    }
}
