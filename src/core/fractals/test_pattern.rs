use std::f64::consts::PI;

use crate::core::data::plane_region::{PlaneRegion, PlaneRegionError};
use crate::core::data::raster_dims::RasterDims;
use crate::core::data::scalar_field::ScalarField;
use crate::core::util::coordinate_grid::CoordinateGrid;

/// Smooth `sin(x) * cos(y) * 50 + 50` over `[0, 4pi]^2`, for checking a
/// colour pipeline without running a fractal.
pub fn test_pattern(dims: RasterDims) -> Result<ScalarField, PlaneRegionError> {
    let region = PlaneRegion::new(0.0, 4.0 * PI, 0.0, 4.0 * PI)?;
    let grid = CoordinateGrid::map(dims, region);

    let xs = grid.xs();
    let ys = grid.ys();

    Ok(ScalarField::from_fn(dims, |pixel| {
        xs[pixel.x as usize].sin() * ys[pixel.y as usize].cos() * 50.0 + 50.0
    }))
}
