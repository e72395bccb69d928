use rand::Rng;

use crate::core::actions::cancellation::{poll_every_interval, CancelToken, Cancelled};
use crate::core::data::raster_dims::RasterDims;
use crate::core::fractals::canvas_center;
use crate::core::geometry::affine::Affine2;
use crate::core::geometry::path::Triangle;
use crate::core::geometry::vec2::Vec2;

/// Steps taken before points are recorded.
pub const SIERPINSKI_BURN_IN: usize = 100;

/// Chaos game on `triangle`: start at the centroid, move halfway to a
/// uniformly chosen vertex each step and record `num_points` points after the
/// burn-in.
pub fn sierpinski_chaos_points<R, C>(
    triangle: &Triangle,
    num_points: usize,
    rng: &mut R,
    cancel: &C,
) -> Result<Vec<Vec2>, Cancelled>
where
    R: Rng,
    C: CancelToken + ?Sized,
{
    let moves = triangle
        .vertices
        .map(|vertex| Affine2::contraction_toward(vertex, 0.5));
    let mut points = Vec::with_capacity(num_points);
    let mut current = triangle.centroid();

    for step in 0..SIERPINSKI_BURN_IN + num_points {
        poll_every_interval(step, cancel)?;

        current = moves[rng.gen_range(0..3)].apply(current);

        if step >= SIERPINSKI_BURN_IN {
            points.push(current);
        }
    }

    Ok(points)
}

/// Chaos-game Sierpinski triangle of side `size`, centred on the canvas
/// centre plus `origin`.
pub fn sierpinski_chaos_game<R, C>(
    dims: RasterDims,
    size: f64,
    origin: Vec2,
    num_points: usize,
    rng: &mut R,
    cancel: &C,
) -> Result<Vec<Vec2>, Cancelled>
where
    R: Rng,
    C: CancelToken + ?Sized,
{
    let triangle = Triangle::equilateral(canvas_center(dims) + origin, size);
    sierpinski_chaos_points(&triangle, num_points, rng, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::fractals::chaos::rng::seeded_rng;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn triangle() -> Triangle {
        Triangle::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), Vec2::new(50.0, 86.0))
    }

    #[test]
    fn test_records_exactly_num_points() {
        let points =
            sierpinski_chaos_points(&triangle(), 500, &mut seeded_rng(Some(7)), &NeverCancel)
                .unwrap();

        assert_eq!(points.len(), 500);
    }

    #[test]
    fn test_points_lie_in_the_convex_hull() {
        let outer = triangle();
        let points =
            sierpinski_chaos_points(&outer, 5_000, &mut seeded_rng(Some(11)), &NeverCancel)
                .unwrap();

        assert!(points.iter().all(|&p| outer.contains(p)));
    }

    #[test]
    fn test_each_step_lands_halfway_to_a_vertex() {
        let outer = triangle();
        let points =
            sierpinski_chaos_points(&outer, 300, &mut seeded_rng(Some(17)), &NeverCancel)
                .unwrap();

        for pair in points.windows(2) {
            let halfway = outer
                .vertices
                .iter()
                .any(|&vertex| (pair[0].midpoint(vertex) - pair[1]).length() < 1e-9);
            assert!(halfway, "{:?} -> {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let a = sierpinski_chaos_points(&triangle(), 200, &mut seeded_rng(Some(3)), &NeverCancel)
            .unwrap();
        let b = sierpinski_chaos_points(&triangle(), 200, &mut seeded_rng(Some(3)), &NeverCancel)
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_points_avoid_the_central_hole() {
        let outer = triangle();
        let [a, b, c] = outer.vertices;
        let hole = Triangle::new(a.midpoint(b), b.midpoint(c), c.midpoint(a));
        let points =
            sierpinski_chaos_points(&outer, 2_000, &mut seeded_rng(Some(5)), &NeverCancel)
                .unwrap();

        // After the burn-in every point sits within 2^-100 of the attractor.
        let strictly_inside = points
            .iter()
            .filter(|&&p| {
                let shrunk = Triangle::new(
                    hole.centroid().lerp(hole.vertices[0], 0.9),
                    hole.centroid().lerp(hole.vertices[1], 0.9),
                    hole.centroid().lerp(hole.vertices[2], 0.9),
                );
                shrunk.contains(p)
            })
            .count();
        assert_eq!(strictly_inside, 0);
    }

    #[test]
    fn test_cancellation_polled_every_interval() {
        let polls = AtomicUsize::new(0);
        let cancel = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };

        sierpinski_chaos_points(&triangle(), 3_000, &mut seeded_rng(Some(1)), &cancel).unwrap();

        // 3100 steps poll at 0, 1024, 2048 and 3072.
        assert_eq!(polls.load(Ordering::Relaxed), 4);
    }

    #[test]
    fn test_cancelled_returns_no_points() {
        let result = sierpinski_chaos_points(&triangle(), 100, &mut seeded_rng(Some(1)), &|| true);

        assert_eq!(result, Err(Cancelled));
    }
}
