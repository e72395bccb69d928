use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RasterDimsError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for RasterDimsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "raster size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for RasterDimsError {}

pub const DEFAULT_RASTER_WIDTH: u32 = 800;
pub const DEFAULT_RASTER_HEIGHT: u32 = 600;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RasterDims {
    width: u32,
    height: u32,
}

impl RasterDims {
    pub const DEFAULT: Self = Self {
        width: DEFAULT_RASTER_WIDTH,
        height: DEFAULT_RASTER_HEIGHT,
    };

    pub fn new(width: u32, height: u32) -> Result<Self, RasterDimsError> {
        if width == 0 || height == 0 {
            return Err(RasterDimsError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as i64) < self.width as i64
            && (point.y as i64) < self.height as i64
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of `point`, or `None` when it lies outside the raster.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        Some(point.y as usize * self.width as usize + point.x as usize)
    }
}
