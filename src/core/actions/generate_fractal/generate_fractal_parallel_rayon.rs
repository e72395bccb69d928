use rayon::prelude::*;

use crate::core::actions::cancellation::{poll_every_interval, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::raster_dims::RasterDims;

/// Failure of a cancelable row generator: either the token fired or the
/// per-pixel algorithm failed.
#[derive(Debug, PartialEq)]
pub enum GenerateFractalError<E> {
    Cancelled(Cancelled),
    Algorithm(E),
}

impl<E: std::fmt::Display> std::fmt::Display for GenerateFractalError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateFractalError::Cancelled(c) => write!(f, "{}", c),
            GenerateFractalError::Algorithm(e) => write!(f, "algorithm error: {}", e),
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for GenerateFractalError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateFractalError::Cancelled(c) => Some(c),
            GenerateFractalError::Algorithm(e) => Some(e),
        }
    }
}

/// Runs `algorithm` over every pixel of `dims`, one rayon task per row.
///
/// Each row polls `cancel` before its first pixel and then every
/// [`CANCEL_CHECK_INTERVAL`](crate::core::actions::cancellation::CANCEL_CHECK_INTERVAL)
/// pixels. Results come back in row-major order, identical to
/// [`generate_fractal_serial`](super::generate_fractal_serial::generate_fractal_serial).
pub fn generate_fractal_parallel_rayon<Alg, C>(
    dims: RasterDims,
    algorithm: &Alg,
    cancel: &C,
) -> Result<Vec<Alg::Success>, GenerateFractalError<Alg::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    Alg::Failure: Send,
    C: CancelToken + ?Sized,
{
    let width = dims.width() as i32;
    let height = dims.height() as i32;

    let rows: Result<Vec<Vec<Alg::Success>>, GenerateFractalError<Alg::Failure>> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(width as usize);

            for (i, x) in (0..width).enumerate() {
                poll_every_interval(i, cancel).map_err(GenerateFractalError::Cancelled)?;

                let result = algorithm
                    .compute(Point { x, y })
                    .map_err(GenerateFractalError::Algorithm)?;
                row.push(result);
            }

            Ok(row)
        })
        .collect();

    rows.map(|r| r.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
    use std::error::Error;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    #[derive(Debug)]
    struct StubSuccessAlgorithm {}

    impl FractalAlgorithm for StubSuccessAlgorithm {
        type Success = f64;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok(f64::from(pixel.x) * 0.5 + f64::from(pixel.y) * 100.0)
        }
    }

    #[derive(Debug)]
    struct StubFailureAlgorithm {}

    impl FractalAlgorithm for StubFailureAlgorithm {
        type Success = f64;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }
    }

    fn dims(width: u32, height: u32) -> RasterDims {
        RasterDims::new(width, height).unwrap()
    }

    #[test]
    fn test_rayon_generates_same_results_as_serial() {
        let algorithm = StubSuccessAlgorithm {};

        let serial = generate_fractal_serial(dims(11, 9), &algorithm, &NeverCancel).unwrap();
        let parallel =
            generate_fractal_parallel_rayon(dims(11, 9), &algorithm, &NeverCancel).unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_rayon_output_is_row_major() {
        let algorithm = StubSuccessAlgorithm {};

        let values = generate_fractal_parallel_rayon(dims(3, 2), &algorithm, &NeverCancel).unwrap();

        assert_eq!(values, vec![0.0, 0.5, 1.0, 100.0, 100.5, 101.0]);
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let algorithm = StubSuccessAlgorithm {};

        let values = generate_fractal_parallel_rayon(dims(1, 1), &algorithm, &NeverCancel).unwrap();

        assert_eq!(values, vec![0.0]);
    }

    #[test]
    fn test_rayon_propagates_algorithm_failure() {
        let algorithm = StubFailureAlgorithm {};

        let result = generate_fractal_parallel_rayon(dims(4, 5), &algorithm, &NeverCancel);

        assert_eq!(result, Err(GenerateFractalError::Algorithm(StubError {})));
    }

    #[test]
    fn test_rayon_returns_cancelled_when_token_is_cancelled() {
        let algorithm = StubSuccessAlgorithm {};
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = generate_fractal_parallel_rayon(dims(11, 9), &algorithm, &cancel_token);

        assert_eq!(result, Err(GenerateFractalError::Cancelled(Cancelled)));
    }

    #[test]
    fn test_rayon_cancels_after_k_polls() {
        let algorithm = StubSuccessAlgorithm {};
        let poll_count = AtomicUsize::new(0);
        let cancel_after = 3;
        let cancel_token = || poll_count.fetch_add(1, Ordering::Relaxed) >= cancel_after;

        let result = generate_fractal_parallel_rayon(dims(6, 6), &algorithm, &cancel_token);

        assert!(matches!(result, Err(GenerateFractalError::Cancelled(_))));
        assert!(poll_count.load(Ordering::Relaxed) >= cancel_after);
    }

    #[test]
    fn test_cancellation_polled_at_row_start() {
        let algorithm = StubSuccessAlgorithm {};
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        let result = generate_fractal_parallel_rayon(dims(2, 5), &algorithm, &cancel_token);

        assert!(result.is_ok());
        assert_eq!(poll_count.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn test_cancellation_polled_multiple_times_on_wide_rows() {
        let algorithm = StubSuccessAlgorithm {};
        let poll_count = AtomicUsize::new(0);
        let cancel_token = || {
            poll_count.fetch_add(1, Ordering::Relaxed);
            false
        };

        // 3000 pixels per row polls at 0, 1024 and 2048.
        let result = generate_fractal_parallel_rayon(dims(3000, 2), &algorithm, &cancel_token);

        assert!(result.is_ok());
        assert_eq!(poll_count.load(Ordering::Relaxed), 6);
    }

    #[test]
    fn test_generate_fractal_error_display() {
        let cancelled: GenerateFractalError<StubError> = GenerateFractalError::Cancelled(Cancelled);
        let failed: GenerateFractalError<StubError> = GenerateFractalError::Algorithm(StubError {});

        assert_eq!(cancelled.to_string(), "operation cancelled");
        assert_eq!(failed.to_string(), "algorithm error: StubError");
    }
}
