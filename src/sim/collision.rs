//! Collision detection for the ball, star and paddle
//!
//! The paddle is an axis-aligned rectangle, so a ball hit is the classic
//! circle-vs-rect test: clamp the circle center onto the rectangle, then compare
//! the distance to that nearest point against the radius.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in canvas space (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    /// Point on (or in) the rectangle closest to `p`
    #[inline]
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }
}

/// Check a circle against a rectangle.
///
/// Touching counts: a center exactly `radius` away from the rectangle is a hit.
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.distance_squared(rect.nearest_point(center)) <= radius * radius
}

/// Catch rule for objects falling straight down.
///
/// The bottom of the object has reached the paddle's top edge and its center
/// column lies within the paddle span. There is no lower bound: an object
/// already past the top edge still counts while it is over the paddle.
#[inline]
pub fn falling_catch(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.y + radius >= rect.min.y && center.x >= rect.min.x && center.x <= rect.max.x
}

/// Whether a circle pokes past the left or right edge of a `width`-wide canvas
#[inline]
pub fn outside_side_walls(center: Vec2, radius: f32, width: f32) -> bool {
    center.x - radius < 0.0 || center.x + radius > width
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paddle() -> Rect {
        Rect::new(160.0, 560.0, 80.0, 10.0)
    }

    #[test]
    fn test_touching_from_below_counts() {
        // Center 15 below the bottom edge, radius 15
        let center = Vec2::new(200.0, 585.0);
        assert_eq!(paddle().nearest_point(center), Vec2::new(200.0, 570.0));
        assert!(circle_rect_overlap(center, 15.0, &paddle()));
        // Half a pixel further is a miss
        assert!(!circle_rect_overlap(Vec2::new(200.0, 585.5), 15.0, &paddle()));
    }

    #[test]
    fn test_corner_uses_euclidean_distance() {
        // 10 left and 10 above the top-left corner: distance ~14.14
        assert!(circle_rect_overlap(Vec2::new(150.0, 550.0), 15.0, &paddle()));
        // 12 and 12: distance ~16.97
        assert!(!circle_rect_overlap(Vec2::new(148.0, 548.0), 15.0, &paddle()));
    }

    #[test]
    fn test_center_inside_rect() {
        let center = Vec2::new(200.0, 565.0);
        assert_eq!(paddle().nearest_point(center), center);
        assert!(circle_rect_overlap(center, 15.0, &paddle()));
    }

    #[test]
    fn test_miss_above() {
        assert!(!circle_rect_overlap(Vec2::new(200.0, 540.0), 15.0, &paddle()));
    }

    #[test]
    fn test_falling_catch_span() {
        let rect = paddle();
        assert!(falling_catch(Vec2::new(160.0, 545.0), 15.0, &rect));
        assert!(falling_catch(Vec2::new(240.0, 590.0), 15.0, &rect));
        assert!(!falling_catch(Vec2::new(241.0, 590.0), 15.0, &rect));
        assert!(!falling_catch(Vec2::new(200.0, 544.0), 15.0, &rect));
    }

    #[test]
    fn test_outside_side_walls() {
        assert!(outside_side_walls(Vec2::new(14.0, 0.0), 15.0, 400.0));
        assert!(!outside_side_walls(Vec2::new(15.0, 0.0), 15.0, 400.0));
        assert!(outside_side_walls(Vec2::new(386.0, 0.0), 15.0, 400.0));
    }

    proptest! {
        #[test]
        fn prop_nearest_point_is_inside_rect(x in -500.0f32..900.0, y in -500.0f32..1200.0) {
            let rect = paddle();
            let p = rect.nearest_point(Vec2::new(x, y));
            prop_assert!(p.x >= rect.min.x && p.x <= rect.max.x);
            prop_assert!(p.y >= rect.min.y && p.y <= rect.max.y);
        }

        #[test]
        fn prop_overlap_matches_distance(x in 100.0f32..300.0, y in 500.0f32..630.0, r in 1.0f32..40.0) {
            let rect = paddle();
            let center = Vec2::new(x, y);
            let dist = center.distance(rect.nearest_point(center));
            let hit = circle_rect_overlap(center, r, &rect);
            // Stay clear of the boundary where sqrt rounding could disagree
            if dist < r - 1e-3 {
                prop_assert!(hit);
            } else if dist > r + 1e-3 {
                prop_assert!(!hit);
            }
        }
    }
}
