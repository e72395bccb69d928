use crate::core::data::raster_dims::RasterDims;
use crate::core::geometry::vec2::Vec2;

pub mod chaos;
pub mod curves;
pub mod escape_time;
pub mod test_pattern;

/// Centre of the canvas in whole pixels, rounded down on odd sizes.
pub(crate) fn canvas_center(dims: RasterDims) -> Vec2 {
    Vec2::new(f64::from(dims.width() / 2), f64::from(dims.height() / 2))
}
