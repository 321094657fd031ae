//! Dirty region accumulation.
//!
//! Tracks the minimal bounding rectangle covering every pixel written
//! since the last flush. The region only ever grows; draining it via
//! [`DirtyRegion::take`] is the sole way it is cleared.

use surfpix_common::Rect;

/// Accumulated bounds: `left..right` columns (right exclusive) on rows
/// `top..=bottom` (bottom inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl Bounds {
    fn to_rect(self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            (self.right - self.left) as u32,
            (self.bottom - self.top + 1) as u32,
        )
    }
}

/// Minimal bounding rectangle of written pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirtyRegion {
    bounds: Option<Bounds>,
}

impl DirtyRegion {
    /// An empty region.
    pub const fn new() -> Self {
        Self { bounds: None }
    }

    /// Mark the region empty.
    pub fn reset(&mut self) {
        self.bounds = None;
    }

    /// Whether no pixels have been written since the last drain.
    pub const fn is_empty(&self) -> bool {
        self.bounds.is_none()
    }

    /// Grow the region to cover the span `l..r` on row `y`.
    pub fn extend(&mut self, l: i32, r: i32, y: i32) {
        match &mut self.bounds {
            None => {
                self.bounds = Some(Bounds {
                    left: l,
                    top: y,
                    right: r,
                    bottom: y,
                });
            }
            Some(bounds) => {
                if l < bounds.left {
                    bounds.left = l;
                }
                if r > bounds.right {
                    bounds.right = r;
                }
                if y < bounds.top {
                    bounds.top = y;
                }
                if y > bounds.bottom {
                    bounds.bottom = y;
                }
            }
        }
    }

    /// The pending rectangle, without clearing it.
    pub fn peek(&self) -> Option<Rect> {
        self.bounds.map(Bounds::to_rect)
    }

    /// Return the pending rectangle and reset to empty in one step.
    pub fn take(&mut self) -> Option<Rect> {
        self.bounds.take().map(Bounds::to_rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_take_on_empty_returns_none() {
        let mut region = DirtyRegion::new();
        assert!(region.is_empty());
        assert_eq!(region.take(), None);
    }

    #[test]
    fn test_single_extend_is_one_row() {
        let mut region = DirtyRegion::new();
        region.extend(3, 7, 5);
        assert_eq!(region.peek(), Some(Rect::new(3, 5, 4, 1)));
    }

    #[test]
    fn test_extends_grow_monotonically() {
        let mut region = DirtyRegion::new();
        region.extend(10, 20, 4);
        region.extend(5, 12, 9);
        region.extend(15, 18, 2);
        // Covers columns 5..20, rows 2..=9.
        assert_eq!(region.peek(), Some(Rect::new(5, 2, 15, 8)));
    }

    #[test]
    fn test_take_clears() {
        let mut region = DirtyRegion::new();
        region.extend(0, 1, 0);
        assert_eq!(region.take(), Some(Rect::new(0, 0, 1, 1)));
        assert!(region.is_empty());
        assert_eq!(region.take(), None);
    }

    fn spans() -> impl Strategy<Value = Vec<(i32, i32, i32)>> {
        proptest::collection::vec(
            (0i32..1000, 1i32..100, 0i32..1000).prop_map(|(l, w, y)| (l, l + w, y)),
            1..20,
        )
    }

    proptest! {
        #[test]
        fn prop_extend_order_does_not_matter(spans in spans()) {
            let mut forward = DirtyRegion::new();
            for &(l, r, y) in &spans {
                forward.extend(l, r, y);
            }

            let mut backward = DirtyRegion::new();
            for &(l, r, y) in spans.iter().rev() {
                backward.extend(l, r, y);
            }

            prop_assert_eq!(forward.take(), backward.take());
        }

        #[test]
        fn prop_region_covers_every_span(spans in spans()) {
            let mut region = DirtyRegion::new();
            for &(l, r, y) in &spans {
                region.extend(l, r, y);
            }

            let rect = region.take().unwrap();
            for &(l, r, y) in &spans {
                prop_assert!(rect.contains_point(l, y));
                prop_assert!(rect.contains_point(r - 1, y));
            }
            // Minimality: each edge is touched by some span.
            prop_assert!(spans.iter().any(|&(l, _, _)| l == rect.x));
            prop_assert!(spans.iter().any(|&(_, r, _)| r == rect.right()));
            prop_assert!(spans.iter().any(|&(_, _, y)| y == rect.y));
            prop_assert!(spans.iter().any(|&(_, _, y)| y == rect.bottom() - 1));
        }
    }
}
