use crate::core::data::complex::Complex;
use crate::core::data::fractal_kinds::FractalKinds;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::errors::InvalidRequestError;
use crate::core::geometry::vec2::Vec2;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;
pub const DEFAULT_JULIA_C: Complex = Complex::new(-0.7, 0.27015);
pub const DEFAULT_NEWTON_TOLERANCE: f64 = 1e-6;

pub const DEFAULT_KOCH_DEPTH: u32 = 5;
pub const DEFAULT_SIERPINSKI_DEPTH: u32 = 7;
pub const DEFAULT_DRAGON_DEPTH: u32 = 12;
pub const DEFAULT_CURVE_SIZE: f64 = 300.0;
pub const DEFAULT_LINE_WIDTH: u32 = 1;

pub const DEFAULT_CHAOS_POINTS: usize = 50_000;

fn ensure_finite(value: f64, name: &'static str) -> Result<(), InvalidRequestError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InvalidRequestError::NonFiniteParameter(name))
    }
}

fn validate_iteration_limits(
    max_iterations: u32,
    escape_radius: f64,
) -> Result<(), InvalidRequestError> {
    if max_iterations == 0 {
        return Err(InvalidRequestError::ZeroMaxIterations);
    }
    ensure_finite(escape_radius, "escape_radius")?;
    if escape_radius <= 0.0 {
        return Err(InvalidRequestError::NonPositiveEscapeRadius { escape_radius });
    }

    Ok(())
}

fn validate_placement(size: f64, origin: Vec2, line_width: u32) -> Result<(), InvalidRequestError> {
    ensure_finite(size, "size")?;
    if size <= 0.0 {
        return Err(InvalidRequestError::NonPositiveSize { size });
    }
    if !origin.is_finite() {
        return Err(InvalidRequestError::NonFiniteParameter("origin"));
    }
    if line_width == 0 {
        return Err(InvalidRequestError::ZeroLineWidth);
    }

    Ok(())
}

/// Mandelbrot and Burning Ship settings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeParams {
    pub region: PlaneRegion,
    pub max_iterations: u32,
    pub escape_radius: f64,
}

impl Default for EscapeTimeParams {
    fn default() -> Self {
        Self {
            region: PlaneRegion::DEFAULT_VIEW,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
        }
    }
}

impl EscapeTimeParams {
    pub fn validate(&self) -> Result<(), InvalidRequestError> {
        validate_iteration_limits(self.max_iterations, self.escape_radius)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaParams {
    pub region: PlaneRegion,
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub c: Complex,
}

impl Default for JuliaParams {
    fn default() -> Self {
        Self {
            region: PlaneRegion::DEFAULT_VIEW,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            c: DEFAULT_JULIA_C,
        }
    }
}

impl JuliaParams {
    pub fn validate(&self) -> Result<(), InvalidRequestError> {
        validate_iteration_limits(self.max_iterations, self.escape_radius)?;
        if !self.c.is_finite() {
            return Err(InvalidRequestError::NonFiniteParameter("c"));
        }

        Ok(())
    }
}

/// Function whose roots Newton's method searches for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Polynomial {
    /// `z^3 - 1`
    #[default]
    Cubic,
    /// `z^4 - 1`
    Quartic,
    /// `sin z`
    Sine,
}

impl Polynomial {
    pub const ALL: &'static [Self] = &[Self::Cubic, Self::Quartic, Self::Sine];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cubic => "cubic",
            Self::Quartic => "quartic",
            Self::Sine => "sine",
        }
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Polynomial {
    type Err = InvalidRequestError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "cubic" | "z^3-1" => Ok(Self::Cubic),
            "quartic" | "z^4-1" => Ok(Self::Quartic),
            "sine" | "sin" | "sin(z)" => Ok(Self::Sine),
            _ => Err(InvalidRequestError::UnknownPolynomial(name.to_string())),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NewtonParams {
    pub region: PlaneRegion,
    pub max_iterations: u32,
    pub polynomial: Polynomial,
    pub tolerance: f64,
}

impl Default for NewtonParams {
    fn default() -> Self {
        Self {
            region: PlaneRegion::DEFAULT_VIEW,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            polynomial: Polynomial::default(),
            tolerance: DEFAULT_NEWTON_TOLERANCE,
        }
    }
}

impl NewtonParams {
    pub fn validate(&self) -> Result<(), InvalidRequestError> {
        if self.max_iterations == 0 {
            return Err(InvalidRequestError::ZeroMaxIterations);
        }
        ensure_finite(self.tolerance, "tolerance")?;
        if self.tolerance <= 0.0 {
            return Err(InvalidRequestError::NonPositiveTolerance {
                tolerance: self.tolerance,
            });
        }

        Ok(())
    }
}

/// Koch snowflake and dragon curve settings. `origin` offsets the curve from
/// the canvas centre, in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CurveParams {
    pub depth: u32,
    pub size: f64,
    pub origin: Vec2,
    pub rotation_degrees: f64,
    pub line_width: u32,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self::with_depth(DEFAULT_KOCH_DEPTH)
    }
}

impl CurveParams {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        Self {
            depth,
            size: DEFAULT_CURVE_SIZE,
            origin: Vec2::ZERO,
            rotation_degrees: 0.0,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidRequestError> {
        validate_placement(self.size, self.origin, self.line_width)?;
        ensure_finite(self.rotation_degrees, "rotation_degrees")
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SierpinskiMethod {
    #[default]
    Recursive,
    ChaosGame {
        num_points: usize,
        seed: Option<u64>,
    },
}

impl FromStr for SierpinskiMethod {
    type Err = InvalidRequestError;

    /// Parses a method name; the chaos game starts with the default point
    /// count and an entropy seed.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "recursive" => Ok(Self::Recursive),
            "chaos_game" | "chaos game" | "chaos" => Ok(Self::ChaosGame {
                num_points: DEFAULT_CHAOS_POINTS,
                seed: None,
            }),
            _ => Err(InvalidRequestError::UnknownSierpinskiMethod(
                name.to_string(),
            )),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SierpinskiParams {
    pub depth: u32,
    pub size: f64,
    pub origin: Vec2,
    pub line_width: u32,
    pub method: SierpinskiMethod,
}

impl Default for SierpinskiParams {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SIERPINSKI_DEPTH,
            size: DEFAULT_CURVE_SIZE,
            origin: Vec2::ZERO,
            line_width: DEFAULT_LINE_WIDTH,
            method: SierpinskiMethod::default(),
        }
    }
}

impl SierpinskiParams {
    pub fn validate(&self) -> Result<(), InvalidRequestError> {
        validate_placement(self.size, self.origin, self.line_width)?;
        if let SierpinskiMethod::ChaosGame { num_points: 0, .. } = self.method {
            return Err(InvalidRequestError::ZeroPoints);
        }

        Ok(())
    }
}

/// Barnsley fern settings. A missing seed is drawn from process entropy.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChaosParams {
    pub num_points: usize,
    pub seed: Option<u64>,
}

impl Default for ChaosParams {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_CHAOS_POINTS,
            seed: None,
        }
    }
}

impl ChaosParams {
    pub fn validate(&self) -> Result<(), InvalidRequestError> {
        if self.num_points == 0 {
            return Err(InvalidRequestError::ZeroPoints);
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FractalParams {
    Mandelbrot(EscapeTimeParams),
    Julia(JuliaParams),
    BurningShip(EscapeTimeParams),
    Newton(NewtonParams),
    KochSnowflake(CurveParams),
    Sierpinski(SierpinskiParams),
    DragonCurve(CurveParams),
    BarnsleyFern(ChaosParams),
    TestPattern,
}

impl FractalParams {
    /// Default parameters for `kind`.
    #[must_use]
    pub fn defaults_for(kind: FractalKinds) -> Self {
        match kind {
            FractalKinds::Mandelbrot => Self::Mandelbrot(EscapeTimeParams::default()),
            FractalKinds::Julia => Self::Julia(JuliaParams::default()),
            FractalKinds::BurningShip => Self::BurningShip(EscapeTimeParams::default()),
            FractalKinds::Newton => Self::Newton(NewtonParams::default()),
            FractalKinds::KochSnowflake => {
                Self::KochSnowflake(CurveParams::with_depth(DEFAULT_KOCH_DEPTH))
            }
            FractalKinds::Sierpinski => Self::Sierpinski(SierpinskiParams::default()),
            FractalKinds::DragonCurve => {
                Self::DragonCurve(CurveParams::with_depth(DEFAULT_DRAGON_DEPTH))
            }
            FractalKinds::BarnsleyFern => Self::BarnsleyFern(ChaosParams::default()),
            FractalKinds::TestPattern => Self::TestPattern,
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot(_) => FractalKinds::Mandelbrot,
            Self::Julia(_) => FractalKinds::Julia,
            Self::BurningShip(_) => FractalKinds::BurningShip,
            Self::Newton(_) => FractalKinds::Newton,
            Self::KochSnowflake(_) => FractalKinds::KochSnowflake,
            Self::Sierpinski(_) => FractalKinds::Sierpinski,
            Self::DragonCurve(_) => FractalKinds::DragonCurve,
            Self::BarnsleyFern(_) => FractalKinds::BarnsleyFern,
            Self::TestPattern => FractalKinds::TestPattern,
        }
    }

    pub fn validate(&self) -> Result<(), InvalidRequestError> {
        match self {
            Self::Mandelbrot(params) | Self::BurningShip(params) => params.validate(),
            Self::Julia(params) => params.validate(),
            Self::Newton(params) => params.validate(),
            Self::KochSnowflake(params) | Self::DragonCurve(params) => params.validate(),
            Self::Sierpinski(params) => params.validate(),
            Self::BarnsleyFern(params) => params.validate(),
            Self::TestPattern => Ok(()),
        }
    }
}
