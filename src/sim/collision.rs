//! Axis-aligned box overlap
//!
//! Every collision in the game reduces to one question: do two top-left
//! anchored boxes intersect? Round entities are boxed with `Rect::around_circle`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box used to test a circle against other boxes.
    ///
    /// Anchored at the circle's center with extents equal to the radius. This
    /// only covers the lower-right quadrant of the circle; gameplay is tuned
    /// around it, so it stays.
    pub const fn around_circle(center: Vec2, radius: f32) -> Self {
        Self::new(center.x, center.y, radius, radius)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict intersection test; shared edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Check whether two boxes overlap
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlapping_boxes() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        // A spans x 0..10, B spans x 10..20
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));

        // Same on the vertical axis
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_separated_on_one_axis_only() {
        // X ranges intersect, Y ranges do not
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 50.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_containment_counts() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_circle_box_is_anchored_at_center() {
        let coin = Rect::around_circle(Vec2::new(100.0, 50.0), 15.0);
        assert_eq!(coin, Rect::new(100.0, 50.0, 15.0, 15.0));

        // A car ending just left of the coin's center misses it
        let car = Rect::new(60.0, 50.0, 40.0, 20.0);
        assert!(!overlaps(&car, &coin));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (
            -500.0f32..500.0,
            -500.0f32..500.0,
            0.0f32..200.0,
            0.0f32..200.0,
        )
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_edge_neighbours_never_collide(a in rect_strategy(), w in 0.0f32..200.0) {
            let right = Rect::new(a.right(), a.y, w, a.height);
            let below = Rect::new(a.x, a.bottom(), a.width, w);
            prop_assert!(!overlaps(&a, &right));
            prop_assert!(!overlaps(&a, &below));
        }
    }
}
