use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::raster_dims::RasterDims;
use std::error::Error;
use std::fmt;

fn dims_to_buffer_size(dims: RasterDims) -> usize {
    dims.size() * 3
}

#[derive(Debug, Clone, PartialEq)]
pub enum RgbImageError {
    PixelOutsideBounds {
        pixel: Point,
        dims: RasterDims,
    },
    BoundsMismatch {
        dims_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for RgbImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                dims_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "image size {} does not match buffer size {}",
                    dims_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, dims } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} image",
                    pixel.x,
                    pixel.y,
                    dims.width(),
                    dims.height()
                )
            }
        }
    }
}

impl Error for RgbImageError {}

pub type RgbImageData = Vec<u8>;

/// `height x width x 3` bytes of row-major RGB.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbImage {
    dims: RasterDims,
    buffer: RgbImageData,
}

impl RgbImage {
    #[must_use]
    pub fn new(dims: RasterDims) -> Self {
        Self {
            dims,
            buffer: vec![0; dims_to_buffer_size(dims)],
        }
    }

    pub fn from_data(dims: RasterDims, buffer: RgbImageData) -> Result<Self, RgbImageError> {
        let dims_size = dims_to_buffer_size(dims);

        if dims_size != buffer.len() {
            return Err(RgbImageError::BoundsMismatch {
                dims_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { dims, buffer })
    }

    #[must_use]
    pub fn dims(&self) -> RasterDims {
        self.dims
    }

    #[must_use]
    pub fn buffer(&self) -> &RgbImageData {
        &self.buffer
    }

    #[must_use]
    pub fn into_buffer(self) -> RgbImageData {
        self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        self.dims.index_of(pixel).map(|index| Colour {
            r: self.buffer[index * 3],
            g: self.buffer[index * 3 + 1],
            b: self.buffer[index * 3 + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), RgbImageError> {
        let index = self
            .dims
            .index_of(pixel)
            .ok_or(RgbImageError::PixelOutsideBounds {
                pixel,
                dims: self.dims,
            })?
            * 3;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }
}
