use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::point::Point;
use crate::core::data::raster_dims::RasterDims;
use crate::core::errors::InvalidRequestError;
use crate::core::fractals::escape_time::rule::EscapeRule;
use crate::core::fractals::escape_time::smooth::{smooth_escape_value, INTERIOR_VALUE};
use crate::core::util::coordinate_grid::{CoordinateGrid, PixelToPlaneCoordsError};

/// Generic escape-time kernel: iterates `rule` from each pixel's plane point
/// until `|z| > escape_radius` or the iteration limit is reached.
#[derive(Debug, Clone)]
pub struct EscapeTimeAlgorithm<R> {
    grid: CoordinateGrid,
    max_iterations: u32,
    escape_radius_squared: f64,
    rule: R,
}

impl<R: EscapeRule> EscapeTimeAlgorithm<R> {
    pub fn new(
        dims: RasterDims,
        region: PlaneRegion,
        max_iterations: u32,
        escape_radius: f64,
        rule: R,
    ) -> Result<Self, InvalidRequestError> {
        if max_iterations == 0 {
            return Err(InvalidRequestError::ZeroMaxIterations);
        }
        if !escape_radius.is_finite() {
            return Err(InvalidRequestError::NonFiniteParameter("escape_radius"));
        }
        if escape_radius <= 0.0 {
            return Err(InvalidRequestError::NonPositiveEscapeRadius { escape_radius });
        }

        Ok(Self {
            grid: CoordinateGrid::map(dims, region),
            max_iterations,
            escape_radius_squared: escape_radius * escape_radius,
            rule,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Smooth escape value for a single plane point; `0` for the interior.
    #[must_use]
    pub fn escape_value(&self, point: Complex) -> f64 {
        let (mut z, c) = self.rule.start(point);

        for iteration in 0..self.max_iterations {
            z = self.rule.step(z, c);

            if z.magnitude_squared() > self.escape_radius_squared {
                return smooth_escape_value(iteration + 1, z.magnitude());
            }
        }

        INTERIOR_VALUE
    }
}

impl<R: EscapeRule> FractalAlgorithm for EscapeTimeAlgorithm<R> {
    type Success = f64;
    type Failure = PixelToPlaneCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let point = self.grid.plane_point(pixel)?;
        Ok(self.escape_value(point))
    }
}
