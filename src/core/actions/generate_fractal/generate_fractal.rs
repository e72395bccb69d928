use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::{
    generate_fractal_parallel_rayon, GenerateFractalError,
};
use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::fractal_params::{FractalParams, SierpinskiMethod};
use crate::core::data::fractal_request::FractalRequest;
use crate::core::data::raster_dims::RasterDims;
use crate::core::data::scalar_field::ScalarField;
use crate::core::errors::{FractalError, InvalidRequestError};
use crate::core::fractals::chaos::barnsley_fern::{fern_points, fit_to_raster};
use crate::core::fractals::chaos::rng::seeded_rng;
use crate::core::fractals::chaos::sierpinski_chaos::sierpinski_chaos_game;
use crate::core::fractals::curves::dragon::dragon_curve;
use crate::core::fractals::curves::koch::koch_snowflake;
use crate::core::fractals::curves::sierpinski::sierpinski_triangles;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::burning_ship::BurningShipRule;
use crate::core::fractals::escape_time::julia::JuliaRule;
use crate::core::fractals::escape_time::mandelbrot::MandelbrotRule;
use crate::core::fractals::escape_time::newton::NewtonAlgorithm;
use crate::core::fractals::test_pattern::test_pattern;
use crate::core::raster::rasterizer::{
    rasterize_path, rasterize_points, rasterize_triangles, POINT_STAMP_SIDE,
};
use crate::core::util::coordinate_grid::PixelToPlaneCoordsError;
use std::time::Instant;

/// Fern points are dense enough that single-pixel stamps read best.
const FERN_STAMP_SIDE: u32 = 1;

/// How escape-time rows are scheduled. Geometric and chaos-game kinds always
/// run on the calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Execution {
    Serial,
    #[default]
    Parallel,
}

impl From<GenerateFractalError<PixelToPlaneCoordsError>> for FractalError {
    fn from(err: GenerateFractalError<PixelToPlaneCoordsError>) -> Self {
        match err {
            GenerateFractalError::Cancelled(c) => Self::Cancelled(c),
            GenerateFractalError::Algorithm(e) => Self::Coordinates(e),
        }
    }
}

fn run_escape_time<Alg, C>(
    dims: RasterDims,
    algorithm: &Alg,
    execution: Execution,
    cancel: &C,
) -> Result<ScalarField, FractalError>
where
    Alg: FractalAlgorithm<Success = f64, Failure = PixelToPlaneCoordsError> + Sync,
    C: CancelToken + ?Sized,
{
    let values = match execution {
        Execution::Serial => generate_fractal_serial(dims, algorithm, cancel)?,
        Execution::Parallel => generate_fractal_parallel_rayon(dims, algorithm, cancel)?,
    };

    Ok(ScalarField::from_data(dims, values)?)
}

/// Validates `request` and computes its scalar field.
///
/// Escape-time kinds produce smooth escape or convergence values; geometric
/// and chaos-game kinds produce a rasterized intensity field of `0` and `255`.
/// Nothing is computed for an invalid request, and a cancelled run returns
/// [`FractalError::Cancelled`] without a partial field.
pub fn generate_fractal<C>(
    request: &FractalRequest,
    execution: Execution,
    cancel: &C,
) -> Result<ScalarField, FractalError>
where
    C: CancelToken + ?Sized,
{
    request.validate()?;

    let dims = request.dims;
    let started = Instant::now();
    log::debug!(
        "generating {} at {}x{} ({:?})",
        request.kind(),
        dims.width(),
        dims.height(),
        execution
    );

    let field = match &request.params {
        FractalParams::Mandelbrot(params) => {
            let algorithm = EscapeTimeAlgorithm::new(
                dims,
                params.region,
                params.max_iterations,
                params.escape_radius,
                MandelbrotRule,
            )?;
            run_escape_time(dims, &algorithm, execution, cancel)?
        }
        FractalParams::Julia(params) => {
            let algorithm = EscapeTimeAlgorithm::new(
                dims,
                params.region,
                params.max_iterations,
                params.escape_radius,
                JuliaRule::new(params.c),
            )?;
            run_escape_time(dims, &algorithm, execution, cancel)?
        }
        FractalParams::BurningShip(params) => {
            let algorithm = EscapeTimeAlgorithm::new(
                dims,
                params.region,
                params.max_iterations,
                params.escape_radius,
                BurningShipRule,
            )?;
            run_escape_time(dims, &algorithm, execution, cancel)?
        }
        FractalParams::Newton(params) => {
            let algorithm = NewtonAlgorithm::new(
                dims,
                params.region,
                params.max_iterations,
                params.polynomial,
                params.tolerance,
            )?;
            run_escape_time(dims, &algorithm, execution, cancel)?
        }
        FractalParams::KochSnowflake(params) => {
            let path = koch_snowflake(dims, params)?;
            rasterize_path(dims, &path, params.line_width, cancel)?
        }
        FractalParams::DragonCurve(params) => {
            let path = dragon_curve(dims, params)?;
            rasterize_path(dims, &path, params.line_width, cancel)?
        }
        FractalParams::Sierpinski(params) => match params.method {
            SierpinskiMethod::Recursive => {
                let triangles = sierpinski_triangles(dims, params)?;
                rasterize_triangles(dims, &triangles, cancel)?
            }
            SierpinskiMethod::ChaosGame { num_points, seed } => {
                let mut rng = seeded_rng(seed);
                let points = sierpinski_chaos_game(
                    dims,
                    params.size,
                    params.origin,
                    num_points,
                    &mut rng,
                    cancel,
                )?;
                rasterize_points(dims, &points, POINT_STAMP_SIDE, cancel)?
            }
        },
        FractalParams::BarnsleyFern(params) => {
            let mut rng = seeded_rng(params.seed);
            let points = fern_points(params.num_points, &mut rng, cancel)?;
            let path = fit_to_raster(points, dims);
            rasterize_points(dims, path.points(), FERN_STAMP_SIDE, cancel)?
        }
        FractalParams::TestPattern => test_pattern(dims).map_err(InvalidRequestError::from)?,
    };

    log::debug!("generated {} in {:?}", request.kind(), started.elapsed());

    Ok(field)
}
