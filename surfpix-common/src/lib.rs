//! Geometry shared across the surfpix crates.
//!
//! [`Rect`] is the common currency for update regions: the dirty tracker
//! produces one and the surface's update mechanism consumes one, so the
//! left/top/width/height convention is fixed in the type rather than in
//! positional arguments.

/// An axis-aligned rectangle: top-left position plus dimensions.
///
/// The right and bottom edges are exclusive: a rectangle at `(x, y)` with
/// width `w` covers columns `x..x + w`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The exclusive right edge (x + width).
    pub const fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// The exclusive bottom edge (y + height).
    pub const fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Whether the pixel at `(px, py)` lies inside this rectangle.
    pub const fn contains_point(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Whether the rectangle covers no pixels.
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_exclusive() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 70);
        assert!(r.contains_point(10, 20));
        assert!(r.contains_point(109, 69));
        assert!(!r.contains_point(110, 69));
        assert!(!r.contains_point(109, 70));
        assert!(!r.contains_point(9, 20));
    }

    #[test]
    fn test_degenerate_rects_are_empty() {
        assert!(Rect::new(5, 5, 0, 10).is_empty());
        assert!(Rect::new(5, 5, 10, 0).is_empty());
        assert!(!Rect::new(5, 5, 1, 1).is_empty());
        assert!(!Rect::new(5, 5, 0, 10).contains_point(5, 5));
    }
}
