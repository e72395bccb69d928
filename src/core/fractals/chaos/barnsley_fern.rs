use rand::Rng;

use crate::core::actions::cancellation::{poll_every_interval, CancelToken, Cancelled};
use crate::core::data::raster_dims::RasterDims;
use crate::core::geometry::affine::Affine2;
use crate::core::geometry::path::GeometricPath;
use crate::core::geometry::vec2::Vec2;

/// Steps taken before points are recorded.
pub const FERN_BURN_IN: usize = 20;

/// Fraction of the raster left empty on each side of the fitted fern.
const FIT_MARGIN: f64 = 0.05;

/// One weighted map of the fern's iterated function system.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WeightedMap {
    pub weight: f64,
    pub map: Affine2,
}

/// Stem, successively smaller leaflets, largest left leaflet, largest right
/// leaflet.
pub const FERN_MAPS: [WeightedMap; 4] = [
    WeightedMap {
        weight: 0.01,
        map: Affine2::new(0.0, 0.0, 0.0, 0.0, 0.16, 0.0),
    },
    WeightedMap {
        weight: 0.85,
        map: Affine2::new(0.85, 0.04, 0.0, -0.04, 0.85, 1.6),
    },
    WeightedMap {
        weight: 0.07,
        map: Affine2::new(0.2, -0.26, 0.0, 0.23, 0.22, 1.6),
    },
    WeightedMap {
        weight: 0.07,
        map: Affine2::new(-0.15, 0.28, 0.0, 0.26, 0.24, 0.44),
    },
];

/// Picks a map with a single uniform draw against the cumulative weights.
fn choose_map<R: Rng>(rng: &mut R) -> Affine2 {
    let draw: f64 = rng.r#gen();
    let mut cumulative = 0.0;

    for entry in &FERN_MAPS {
        cumulative += entry.weight;
        if draw < cumulative {
            return entry.map;
        }
    }

    FERN_MAPS[FERN_MAPS.len() - 1].map
}

/// Fern points in its own coordinates (`x` roughly in `[-2.2, 2.7]`, `y` in
/// `[0, 10]`, growing upward).
pub fn fern_points<R, C>(num_points: usize, rng: &mut R, cancel: &C) -> Result<Vec<Vec2>, Cancelled>
where
    R: Rng,
    C: CancelToken + ?Sized,
{
    let mut points = Vec::with_capacity(num_points);
    let mut current = Vec2::ZERO;

    for step in 0..FERN_BURN_IN + num_points {
        poll_every_interval(step, cancel)?;

        current = choose_map(rng).apply(current);

        if step >= FERN_BURN_IN {
            points.push(current);
        }
    }

    Ok(points)
}

/// Scales `points` uniformly into the raster, centred, with `y` flipped so the
/// fern grows toward row 0.
#[must_use]
pub fn fit_to_raster(points: Vec<Vec2>, dims: RasterDims) -> GeometricPath {
    let path = GeometricPath::open(points);
    let Some((min, max)) = path.bounds() else {
        return path;
    };

    let last_column = f64::from(dims.width() - 1);
    let last_row = f64::from(dims.height() - 1);
    let span_x = (max.x - min.x).max(f64::EPSILON);
    let span_y = (max.y - min.y).max(f64::EPSILON);
    let scale = (last_column / span_x).min(last_row / span_y) * (1.0 - 2.0 * FIT_MARGIN);

    let placement = Affine2::translation(Vec2::new(last_column / 2.0, last_row / 2.0))
        .compose(&Affine2::scale(scale, -scale))
        .compose(&Affine2::translation(Vec2::ZERO - min.midpoint(max)));

    path.transformed(&placement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::fractals::chaos::rng::seeded_rng;

    #[test]
    fn test_weights_sum_to_one() {
        let total: f64 = FERN_MAPS.iter().map(|m| m.weight).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_records_exactly_num_points() {
        let points = fern_points(1_000, &mut seeded_rng(Some(9)), &NeverCancel).unwrap();

        assert_eq!(points.len(), 1_000);
    }

    #[test]
    fn test_points_stay_in_the_known_fern_bounds() {
        let points = fern_points(20_000, &mut seeded_rng(Some(4)), &NeverCancel).unwrap();

        for p in points {
            assert!(p.x > -3.0 && p.x < 3.0, "{:?}", p);
            assert!(p.y > -0.1 && p.y < 10.1, "{:?}", p);
        }
    }

    #[test]
    fn test_fit_flips_and_stays_inside_the_raster() {
        let dims = RasterDims::new(120, 200).unwrap();
        let points = fern_points(5_000, &mut seeded_rng(Some(2)), &NeverCancel).unwrap();

        let fitted = fit_to_raster(points.clone(), dims);
        let fitted = fitted.points();

        assert_eq!(fitted.len(), points.len());
        for p in fitted {
            assert!(p.x >= 0.0 && p.x <= 119.0);
            assert!(p.y >= 0.0 && p.y <= 199.0);
        }

        // The highest fern point lands on the smallest row.
        let top = points
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.y.total_cmp(&b.1.y))
            .map(|(i, _)| i)
            .unwrap();
        let min_row = fitted.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        assert_eq!(fitted[top].y, min_row);
    }

    #[test]
    fn test_fit_of_nothing_is_empty() {
        assert!(fit_to_raster(Vec::new(), RasterDims::new(4, 4).unwrap()).is_empty());
    }

    #[test]
    fn test_seeded_fern_is_deterministic() {
        let a = fern_points(300, &mut seeded_rng(Some(8)), &NeverCancel).unwrap();
        let b = fern_points(300, &mut seeded_rng(Some(8)), &NeverCancel).unwrap();

        assert_eq!(a, b);
    }
}
