use crate::core::data::point::Point;
use crate::core::data::raster_dims::RasterDims;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ScalarFieldError {
    PointOutsideBounds {
        point: Point,
        dims: RasterDims,
    },
    BoundsMismatch {
        dims_size: usize,
        data_size: usize,
    },
}

impl fmt::Display for ScalarFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                dims_size,
                data_size,
            } => {
                write!(
                    f,
                    "raster size {} does not match field data size {}",
                    dims_size, data_size
                )
            }
            Self::PointOutsideBounds { point, dims } => {
                write!(
                    f,
                    "point at x:{}, y:{} outside of {}x{} field",
                    point.x,
                    point.y,
                    dims.width(),
                    dims.height()
                )
            }
        }
    }
}

impl Error for ScalarFieldError {}

pub type ScalarFieldData = Vec<f64>;

/// Dense row-major grid of values, one per raster pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    dims: RasterDims,
    data: ScalarFieldData,
}

impl ScalarField {
    #[must_use]
    pub fn new(dims: RasterDims) -> Self {
        Self {
            dims,
            data: vec![0.0; dims.size()],
        }
    }

    /// Field whose value at each pixel is `value(pixel)`, filled row by row.
    #[must_use]
    pub fn from_fn(dims: RasterDims, mut value: impl FnMut(Point) -> f64) -> Self {
        let width = dims.width() as i32;
        let data = (0..dims.height() as i32)
            .flat_map(|y| (0..width).map(move |x| Point { x, y }))
            .map(|point| value(point))
            .collect();

        Self { dims, data }
    }

    pub fn from_data(dims: RasterDims, data: ScalarFieldData) -> Result<Self, ScalarFieldError> {
        if dims.size() != data.len() {
            return Err(ScalarFieldError::BoundsMismatch {
                dims_size: dims.size(),
                data_size: data.len(),
            });
        }

        Ok(Self { dims, data })
    }

    #[must_use]
    pub fn dims(&self) -> RasterDims {
        self.dims
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.dims.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.dims.height()
    }

    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    #[must_use]
    pub fn into_data(self) -> ScalarFieldData {
        self.data
    }

    #[must_use]
    pub fn get(&self, point: Point) -> Option<f64> {
        self.dims.index_of(point).map(|index| self.data[index])
    }

    pub fn set(&mut self, point: Point, value: f64) -> Result<(), ScalarFieldError> {
        let index = self
            .dims
            .index_of(point)
            .ok_or(ScalarFieldError::PointOutsideBounds {
                point,
                dims: self.dims,
            })?;

        self.data[index] = value;
        Ok(())
    }

    /// Row `y`, or `None` past the last row.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[f64]> {
        if y >= self.height() {
            return None;
        }

        let width = self.width() as usize;
        let start = y as usize * width;
        Some(&self.data[start..start + width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.width() as usize)
    }

    /// Smallest and largest finite values, or `None` if there are none.
    #[must_use]
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((min, max)) => Some((min.min(v), max.max(v))),
            })
    }

    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            dims: self.dims,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}
