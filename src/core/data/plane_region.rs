use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneRegionError {
    InvalidSize { width: f64, height: f64 },
    NonFiniteBound,
    InvalidZoomFactor { zoom_factor: f64 },
}

impl fmt::Display for PlaneRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(
                    f,
                    "plane region size must be positive: {}x{}",
                    width, height
                )
            }
            Self::NonFiniteBound => write!(f, "plane region bounds must be finite"),
            Self::InvalidZoomFactor { zoom_factor } => {
                write!(f, "zoom factor must be positive and finite: {}", zoom_factor)
            }
        }
    }
}

impl Error for PlaneRegionError {}

/// Axis-aligned rectangle of the complex plane, `x` along the real axis and
/// `y` along the imaginary axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneRegion {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl PlaneRegion {
    /// `[-2, 2] x [-2, 2]`, the default escape-time view.
    pub const DEFAULT_VIEW: Self = Self {
        x_min: -2.0,
        x_max: 2.0,
        y_min: -2.0,
        y_max: 2.0,
    };

    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, PlaneRegionError> {
        if ![x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite()) {
            return Err(PlaneRegionError::NonFiniteBound);
        }

        let width = x_max - x_min;
        let height = y_max - y_min;

        if width <= 0.0 || height <= 0.0 {
            return Err(PlaneRegionError::InvalidSize { width, height });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.x_min + self.x_max) / 2.0,
            imag: (self.y_min + self.y_max) / 2.0,
        }
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.x_min <= point.real
            && self.y_min <= point.imag
            && self.x_max >= point.real
            && self.y_max >= point.imag
    }

    /// Returns the region of `1 / zoom_factor` the size of this one, centred on
    /// `center`. Factors below one zoom out.
    pub fn zoom_to_point(&self, center: Complex, zoom_factor: f64) -> Result<Self, PlaneRegionError> {
        if !zoom_factor.is_finite() || zoom_factor <= 0.0 {
            return Err(PlaneRegionError::InvalidZoomFactor { zoom_factor });
        }

        let half_width = self.width() / zoom_factor / 2.0;
        let half_height = self.height() / zoom_factor / 2.0;

        Self::new(
            center.real - half_width,
            center.real + half_width,
            center.imag - half_height,
            center.imag + half_height,
        )
    }
}

impl Default for PlaneRegion {
    fn default() -> Self {
        Self::DEFAULT_VIEW
    }
}
