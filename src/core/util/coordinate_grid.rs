use crate::core::data::complex::Complex;
use crate::core::data::plane_region::PlaneRegion;
use crate::core::data::point::Point;
use crate::core::data::raster_dims::RasterDims;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToPlaneCoordsError {
    PointOutsideRaster { point: Point, dims: RasterDims },
}

impl fmt::Display for PixelToPlaneCoordsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideRaster { point, dims } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} raster",
                    point.x,
                    point.y,
                    dims.width(),
                    dims.height()
                )
            }
        }
    }
}

impl Error for PixelToPlaneCoordsError {}

/// Sample `index` of `samples` evenly spaced values over `[min, max]`, both
/// ends inclusive. The upper half is measured back from `max` so a range
/// symmetric about zero produces exactly mirrored samples.
fn axis_sample(min: f64, max: f64, index: u32, samples: u32) -> f64 {
    if samples <= 1 {
        return min;
    }

    let last = samples - 1;
    let step = (max - min) / last as f64;

    if index * 2 == last {
        (min + max) / 2.0
    } else if index * 2 < last {
        min + index as f64 * step
    } else {
        max - (last - index) as f64 * step
    }
}

pub fn pixel_to_plane_coords(
    pixel_position: Point,
    dims: RasterDims,
    region: PlaneRegion,
) -> Result<Complex, PixelToPlaneCoordsError> {
    if !dims.contains_point(pixel_position) {
        return Err(PixelToPlaneCoordsError::PointOutsideRaster {
            point: pixel_position,
            dims,
        });
    }

    Ok(Complex {
        real: axis_sample(
            region.x_min(),
            region.x_max(),
            pixel_position.x as u32,
            dims.width(),
        ),
        imag: axis_sample(
            region.y_min(),
            region.y_max(),
            pixel_position.y as u32,
            dims.height(),
        ),
    })
}

/// Plane coordinates of every pixel of a raster, stored as one sample vector
/// per axis.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateGrid {
    dims: RasterDims,
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl CoordinateGrid {
    #[must_use]
    pub fn map(dims: RasterDims, region: PlaneRegion) -> Self {
        Self {
            dims,
            xs: (0..dims.width())
                .map(|j| axis_sample(region.x_min(), region.x_max(), j, dims.width()))
                .collect(),
            ys: (0..dims.height())
                .map(|i| axis_sample(region.y_min(), region.y_max(), i, dims.height()))
                .collect(),
        }
    }

    #[must_use]
    pub fn dims(&self) -> RasterDims {
        self.dims
    }

    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Plane point for `row` and `column`, or `None` outside the grid.
    #[must_use]
    pub fn at(&self, row: usize, column: usize) -> Option<Complex> {
        Some(Complex {
            real: *self.xs.get(column)?,
            imag: *self.ys.get(row)?,
        })
    }

    /// Plane point under `pixel`, reporting pixels outside the raster.
    pub fn plane_point(&self, pixel: Point) -> Result<Complex, PixelToPlaneCoordsError> {
        if !self.dims.contains_point(pixel) {
            return Err(PixelToPlaneCoordsError::PointOutsideRaster {
                point: pixel,
                dims: self.dims,
            });
        }

        Ok(Complex {
            real: self.xs[pixel.x as usize],
            imag: self.ys[pixel.y as usize],
        })
    }
}
