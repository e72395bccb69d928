use crate::core::actions::cancellation::Cancelled;
use crate::core::data::fractal_kinds::FractalKinds;
use crate::core::data::plane_region::PlaneRegionError;
use crate::core::data::raster_dims::RasterDimsError;
use crate::core::data::scalar_field::ScalarFieldError;
use crate::core::util::coordinate_grid::PixelToPlaneCoordsError;
use std::error::Error;
use std::fmt;

/// A request that cannot be generated; reported before any computation.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidRequestError {
    InvalidRegion(PlaneRegionError),
    InvalidDimensions(RasterDimsError),
    ZeroMaxIterations,
    NonPositiveEscapeRadius { escape_radius: f64 },
    NonPositiveTolerance { tolerance: f64 },
    ZeroPoints,
    NonPositiveSize { size: f64 },
    ZeroLineWidth,
    NonFiniteParameter(&'static str),
    UnknownFractalKind(String),
    UnknownPolynomial(String),
    UnknownSierpinskiMethod(String),
}

impl fmt::Display for InvalidRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRegion(err) => write!(f, "invalid plane region: {}", err),
            Self::InvalidDimensions(err) => write!(f, "invalid raster dimensions: {}", err),
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::NonPositiveEscapeRadius { escape_radius } => {
                write!(f, "escape radius must be positive: {}", escape_radius)
            }
            Self::NonPositiveTolerance { tolerance } => {
                write!(f, "convergence tolerance must be positive: {}", tolerance)
            }
            Self::ZeroPoints => write!(f, "number of points must be greater than zero"),
            Self::NonPositiveSize { size } => write!(f, "size must be positive: {}", size),
            Self::ZeroLineWidth => write!(f, "line width must be at least one pixel"),
            Self::NonFiniteParameter(name) => write!(f, "parameter `{}` must be finite", name),
            Self::UnknownFractalKind(name) => write!(f, "unknown fractal kind: {:?}", name),
            Self::UnknownPolynomial(name) => write!(f, "unknown Newton polynomial: {:?}", name),
            Self::UnknownSierpinskiMethod(name) => {
                write!(f, "unknown Sierpinski method: {:?}", name)
            }
        }
    }
}

impl Error for InvalidRequestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRegion(err) => Some(err),
            Self::InvalidDimensions(err) => Some(err),
            _ => None,
        }
    }
}

impl From<PlaneRegionError> for InvalidRequestError {
    fn from(err: PlaneRegionError) -> Self {
        Self::InvalidRegion(err)
    }
}

impl From<RasterDimsError> for InvalidRequestError {
    fn from(err: RasterDimsError) -> Self {
        Self::InvalidDimensions(err)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FractalError {
    InvalidRequest(InvalidRequestError),
    /// The requested depth would generate more primitives than the engine allows.
    DepthOverflow {
        kind: FractalKinds,
        depth: u32,
        max_depth: u32,
    },
    Cancelled(Cancelled),
    Coordinates(PixelToPlaneCoordsError),
    Field(ScalarFieldError),
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequest(err) => write!(f, "invalid request: {}", err),
            Self::DepthOverflow {
                kind,
                depth,
                max_depth,
            } => write!(
                f,
                "{} depth {} exceeds the maximum of {}",
                kind, depth, max_depth
            ),
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::Coordinates(err) => write!(f, "coordinate mapping failed: {}", err),
            Self::Field(err) => write!(f, "field error: {}", err),
        }
    }
}

impl Error for FractalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidRequest(err) => Some(err),
            Self::DepthOverflow { .. } => None,
            Self::Cancelled(c) => Some(c),
            Self::Coordinates(err) => Some(err),
            Self::Field(err) => Some(err),
        }
    }
}

impl From<InvalidRequestError> for FractalError {
    fn from(err: InvalidRequestError) -> Self {
        Self::InvalidRequest(err)
    }
}

impl From<Cancelled> for FractalError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

impl From<PixelToPlaneCoordsError> for FractalError {
    fn from(err: PixelToPlaneCoordsError) -> Self {
        Self::Coordinates(err)
    }
}

impl From<ScalarFieldError> for FractalError {
    fn from(err: ScalarFieldError) -> Self {
        Self::Field(err)
    }
}
