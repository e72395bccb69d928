use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::fractal_params::Polynomial;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::point::Point;
use crate::core::data::raster_dims::RasterDims;
use crate::core::errors::InvalidRequestError;
use crate::core::util::coordinate_grid::{CoordinateGrid, PixelToPlaneCoordsError};
use std::f64::consts::PI;

/// Value reported when Newton's method fails to converge.
pub const NON_CONVERGED_VALUE: f64 = 0.0;

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

const CUBIC_ROOTS: [Complex; 3] = [
    Complex::new(1.0, 0.0),
    Complex::new(-0.5, HALF_SQRT_3),
    Complex::new(-0.5, -HALF_SQRT_3),
];

const QUARTIC_ROOTS: [Complex; 4] = [
    Complex::new(1.0, 0.0),
    Complex::new(0.0, 1.0),
    Complex::new(-1.0, 0.0),
    Complex::new(0.0, -1.0),
];

fn nearest_root(z: Complex, roots: &[Complex]) -> u32 {
    roots
        .iter()
        .enumerate()
        .map(|(index, &root)| (index, (z - root).magnitude_squared()))
        .fold((0, f64::INFINITY), |best, candidate| {
            if candidate.1 < best.1 {
                candidate
            } else {
                best
            }
        })
        .0 as u32
}

impl Polynomial {
    #[must_use]
    pub fn value(self, z: Complex) -> Complex {
        match self {
            Self::Cubic => z.powi(3) - Complex::ONE,
            Self::Quartic => z.powi(4) - Complex::ONE,
            Self::Sine => z.sin(),
        }
    }

    #[must_use]
    pub fn derivative(self, z: Complex) -> Complex {
        match self {
            Self::Cubic => z.powi(2).scale(3.0),
            Self::Quartic => z.powi(3).scale(4.0),
            Self::Sine => z.cos(),
        }
    }

    /// Index of the root nearest `z`. The roots of `sin z` are `k * pi`,
    /// numbered `0, -1, 1, -2, 2, ...` as `0, 1, 2, 3, 4, ...`.
    #[must_use]
    pub fn root_index(self, z: Complex) -> u32 {
        match self {
            Self::Cubic => nearest_root(z, &CUBIC_ROOTS),
            Self::Quartic => nearest_root(z, &QUARTIC_ROOTS),
            Self::Sine => {
                let k = (z.real / PI).round();
                let folded = if k >= 0.0 { 2.0 * k } else { -2.0 * k - 1.0 };
                folded.min(f64::from(u32::MAX)) as u32
            }
        }
    }
}

/// Encodes a converged pixel as `root_index + 1 + shade`, where the shade lies
/// in `(0, 1)` and shrinks as the iteration count grows.
#[must_use]
pub fn encode_convergence(root_index: u32, iteration: u32, max_iterations: u32) -> f64 {
    let shade = f64::from(max_iterations - iteration) / (f64::from(max_iterations) + 1.0);
    f64::from(root_index) + 1.0 + shade
}

/// Root index encoded by a converged Newton value, or `None` for the sentinel.
#[must_use]
pub fn decode_root_index(value: f64) -> Option<u32> {
    if value >= 1.0 {
        Some(value.floor() as u32 - 1)
    } else {
        None
    }
}

#[derive(Debug, Clone)]
pub struct NewtonAlgorithm {
    grid: CoordinateGrid,
    max_iterations: u32,
    tolerance: f64,
    polynomial: Polynomial,
}

impl NewtonAlgorithm {
    pub fn new(
        dims: RasterDims,
        region: PlaneRegion,
        max_iterations: u32,
        polynomial: Polynomial,
        tolerance: f64,
    ) -> Result<Self, InvalidRequestError> {
        if max_iterations == 0 {
            return Err(InvalidRequestError::ZeroMaxIterations);
        }
        if !tolerance.is_finite() {
            return Err(InvalidRequestError::NonFiniteParameter("tolerance"));
        }
        if tolerance <= 0.0 {
            return Err(InvalidRequestError::NonPositiveTolerance { tolerance });
        }

        Ok(Self {
            grid: CoordinateGrid::map(dims, region),
            max_iterations,
            tolerance,
            polynomial,
        })
    }

    /// Runs Newton's method from `start`. A vanishing or non-finite step ends
    /// the iteration as non-converged.
    #[must_use]
    pub fn converge(&self, start: Complex) -> f64 {
        let mut z = start;

        for iteration in 0..self.max_iterations {
            let derivative = self.polynomial.derivative(z);
            if derivative.magnitude_squared() == 0.0 {
                return NON_CONVERGED_VALUE;
            }

            z = z - self.polynomial.value(z) / derivative;
            if !z.is_finite() {
                return NON_CONVERGED_VALUE;
            }

            if self.polynomial.value(z).magnitude() < self.tolerance {
                let root = self.polynomial.root_index(z);
                return encode_convergence(root, iteration, self.max_iterations);
            }
        }

        NON_CONVERGED_VALUE
    }
}

impl FractalAlgorithm for NewtonAlgorithm {
    type Success = f64;
    type Failure = PixelToPlaneCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let start = self.grid.plane_point(pixel)?;
        Ok(self.converge(start))
    }
}
