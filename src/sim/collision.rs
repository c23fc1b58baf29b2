//! Axis-aligned box overlap tests
//!
//! The player is a triangle on screen but collides as its full bounding box.
//! Boxes that only share an edge do not overlap.

use glam::Vec2;

/// Axis-aligned bounding box in playfield coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from its top-left corner and size
    pub fn from_top_left(top_left: Vec2, size: Vec2) -> Self {
        Self {
            min: top_left,
            max: top_left + size,
        }
    }

    /// Box centered on `center`
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square(x: f32, y: f32, size: f32) -> Aabb {
        Aabb::from_top_left(Vec2::new(x, y), Vec2::splat(size))
    }

    #[test]
    fn test_overlap() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 5.0, 10.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_edge_touch_is_not_overlap() {
        let a = square(0.0, 0.0, 10.0);
        // Right edge of a == left edge of b
        assert!(!a.intersects(&square(10.0, 0.0, 10.0)));
        // Bottom edge of a == top edge of b
        assert!(!a.intersects(&square(0.0, 10.0, 10.0)));
        // Corner contact only
        assert!(!a.intersects(&square(10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_centered_box() {
        let b = Aabb::from_center(Vec2::new(240.0, 600.0), Vec2::splat(20.0));
        assert_eq!(b.min, Vec2::new(230.0, 590.0));
        assert_eq!(b.max, Vec2::new(250.0, 610.0));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -100.0f32..600.0, ay in -100.0f32..700.0, asz in 1.0f32..40.0,
            bx in -100.0f32..600.0, by in -100.0f32..700.0, bsz in 1.0f32..40.0,
        ) {
            let a = square(ax, ay, asz);
            let b = square(bx, by, bsz);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn prop_adjacent_boxes_never_overlap(
            x in 0.0f32..400.0, y in 0.0f32..600.0, w in 1.0f32..40.0, h in 1.0f32..40.0,
            offset in -50.0f32..50.0,
        ) {
            let a = Aabb::from_top_left(Vec2::new(x, y), Vec2::new(w, h));
            let right = Aabb::from_top_left(Vec2::new(a.max.x, y + offset), Vec2::new(w, h));
            let below = Aabb::from_top_left(Vec2::new(x + offset, a.max.y), Vec2::new(w, h));
            prop_assert!(!a.intersects(&right));
            prop_assert!(!a.intersects(&below));
        }
    }
}
