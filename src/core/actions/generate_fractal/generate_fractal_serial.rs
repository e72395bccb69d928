use crate::core::actions::cancellation::{poll_every_interval, CancelToken};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::GenerateFractalError;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::raster_dims::RasterDims;

/// Single-threaded row-major generation with the same cancellation points as
/// the rayon generator.
pub fn generate_fractal_serial<Alg, C>(
    dims: RasterDims,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm,
    C: CancelToken + ?Sized,
{
    let width = dims.width() as i32;
    let mut values = Vec::with_capacity(dims.size());

    for y in 0..dims.height() as i32 {
        for (i, x) in (0..width).enumerate() {
            poll_every_interval(i, cancel).map_err(GenerateFractalError::Cancelled)?;

            let value = algorithm
                .compute(Point { x, y })
                .map_err(GenerateFractalError::Algorithm)?;
            values.push(value);
        }
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::{Cancelled, NeverCancel};
    use std::convert::Infallible;

    struct IndexAlgorithm {
        width: i32,
    }

    impl FractalAlgorithm for IndexAlgorithm {
        type Success = i32;
        type Failure = Infallible;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(pixel.y * self.width + pixel.x)
        }
    }

    #[test]
    fn test_serial_visits_pixels_in_row_major_order() {
        let dims = RasterDims::new(4, 3).unwrap();
        let algorithm = IndexAlgorithm { width: 4 };

        let values = generate_fractal_serial(dims, &algorithm, &NeverCancel).unwrap();

        assert_eq!(values, (0..12).collect::<Vec<i32>>());
    }

    #[test]
    fn test_serial_stops_on_cancellation() {
        let dims = RasterDims::new(4, 3).unwrap();
        let algorithm = IndexAlgorithm { width: 4 };

        let result = generate_fractal_serial(dims, &algorithm, &|| true);

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(Cancelled))));
    }
}
