//! Shape generation for 2D primitives the drawing surface has no call for

use glam::Vec2;
use std::f32::consts::PI;

/// Outline of a star polygon, alternating outer and inner vertices.
///
/// The first vertex is the top point (straight up in canvas space), then the
/// outline walks clockwise on screen.
pub fn star(center: Vec2, spikes: usize, outer_radius: f32, inner_radius: f32) -> Vec<Vec2> {
    let step = PI / spikes as f32;
    let mut rot = PI * 1.5;
    let mut points = Vec::with_capacity(spikes * 2);

    for _ in 0..spikes {
        points.push(center + Vec2::new(rot.cos(), rot.sin()) * outer_radius);
        rot += step;
        points.push(center + Vec2::new(rot.cos(), rot.sin()) * inner_radius);
        rot += step;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_vertex_count() {
        assert_eq!(star(Vec2::ZERO, 5, 14.0, 7.0).len(), 10);
    }

    #[test]
    fn test_star_starts_at_top() {
        let points = star(Vec2::new(100.0, 50.0), 5, 14.0, 7.0);
        assert!((points[0].x - 100.0).abs() < 1e-4);
        assert!((points[0].y - 36.0).abs() < 1e-4);
    }

    #[test]
    fn test_star_radii_alternate() {
        let center = Vec2::new(10.0, 10.0);
        for (i, p) in star(center, 5, 14.0, 7.0).iter().enumerate() {
            let expected = if i % 2 == 0 { 14.0 } else { 7.0 };
            assert!((p.distance(center) - expected).abs() < 1e-3);
        }
    }
}
