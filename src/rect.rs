//! Integer points and half-open rectangles in image coordinates.

use std::fmt;

/// A pixel coordinate `(x, y)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Creates a point.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with an inclusive `min` and exclusive `max` corner.
///
/// `Rect::ZERO` is what searches return when the needle is not found. Any
/// rectangle with zero width or height reports `is_empty()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Top-left corner, inclusive.
    pub min: Point,
    /// Bottom-right corner, exclusive.
    pub max: Point,
}

impl Rect {
    /// The zero-area "not found" rectangle.
    pub const ZERO: Rect = Rect {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    /// Creates `[x0, x1) x [y0, y1)`, swapping coordinates so that `min <= max`.
    pub fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Creates a rectangle from its top-left corner and size.
    pub fn from_origin_size(origin: Point, width: usize, height: usize) -> Self {
        Self {
            min: origin,
            max: Point::new(origin.x + width, origin.y + height),
        }
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> usize {
        self.max.x - self.min.x
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> usize {
        self.max.y - self.min.y
    }

    /// Returns the number of pixels covered.
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// Returns true if the rectangle covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Returns `None` for empty rectangles.
    pub fn non_empty(self) -> Option<Rect> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    /// Returns true if `p` lies inside the rectangle.
    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }
}

impl From<Option<Rect>> for Rect {
    fn from(value: Option<Rect>) -> Self {
        value.unwrap_or(Rect::ZERO)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect};

    #[test]
    fn new_orders_corners() {
        let r = Rect::new(5, 7, 1, 2);
        assert_eq!(r.min, Point::new(1, 2));
        assert_eq!(r.max, Point::new(5, 7));
        assert_eq!((r.width(), r.height(), r.area()), (4, 5, 20));
    }

    #[test]
    fn zero_rect_is_empty_and_round_trips() {
        assert!(Rect::ZERO.is_empty());
        assert_eq!(Rect::ZERO.area(), 0);
        assert_eq!(Rect::ZERO.non_empty(), None);
        assert_eq!(Rect::from(None), Rect::ZERO);

        let r = Rect::new(1, 1, 3, 4);
        assert_eq!(Rect::from(r.non_empty()), r);
    }

    #[test]
    fn degenerate_rects_are_empty() {
        assert!(Rect::new(3, 3, 3, 9).is_empty());
        assert!(Rect::new(3, 3, 9, 3).is_empty());
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(2, 2, 4, 4);
        assert!(r.contains(Point::new(2, 3)));
        assert!(!r.contains(Point::new(4, 3)));
        assert!(!r.contains(Point::new(3, 4)));
    }

    #[test]
    fn display_matches_corner_notation() {
        assert_eq!(Rect::new(1, 2, 3, 4).to_string(), "(1,2)-(3,4)");
    }
}
