use crate::core::data::fractal_kinds::FractalKinds;
use crate::core::data::fractal_params::FractalParams;
use crate::core::data::raster_dims::RasterDims;
use crate::core::errors::InvalidRequestError;

/// Everything needed to generate one fractal: the output raster and the
/// parameters of a single kind.
#[derive(Debug, Clone, PartialEq)]
pub struct FractalRequest {
    pub dims: RasterDims,
    pub params: FractalParams,
}

impl FractalRequest {
    pub fn new(width: u32, height: u32, params: FractalParams) -> Result<Self, InvalidRequestError> {
        let request = Self {
            dims: RasterDims::new(width, height)?,
            params,
        };
        request.validate()?;

        Ok(request)
    }

    #[must_use]
    pub fn with_defaults(kind: FractalKinds, dims: RasterDims) -> Self {
        Self {
            dims,
            params: FractalParams::defaults_for(kind),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        self.params.kind()
    }

    pub fn validate(&self) -> Result<(), InvalidRequestError> {
        self.params.validate()
    }
}

impl Default for FractalRequest {
    fn default() -> Self {
        Self {
            dims: RasterDims::DEFAULT,
            params: FractalParams::defaults_for(FractalKinds::default()),
        }
    }
}
