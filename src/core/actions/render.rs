use crate::core::actions::cancellation::{CancelToken, NeverCancel};
use crate::core::actions::colourize::colourize::{colourize, ColourizeError};
use crate::core::actions::generate_fractal::generate_fractal::{generate_fractal, Execution};
use crate::core::data::fractal_request::FractalRequest;
use crate::core::data::rgb_image::RgbImage;
use crate::core::data::scalar_field::ScalarField;
use crate::core::errors::FractalError;
use crate::core::palettes::errors::PaletteError;
use crate::core::palettes::factory::palette_factory;
use crate::core::palettes::kinds::PaletteKind;
use std::error::Error;
use std::fmt;
use std::time::Instant;

/// Palette and escape-time scheduling for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub palette: PaletteKind,
    pub execution: Execution,
}

/// Raw field together with its colourized image.
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub field: ScalarField,
    pub image: RgbImage,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    Fractal(FractalError),
    Colourize(ColourizeError<PaletteError>),
}

impl RenderError {
    /// True when either stage stopped because the token fired.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            Self::Fractal(FractalError::Cancelled(_)) | Self::Colourize(ColourizeError::Cancelled(_))
        )
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fractal(err) => write!(f, "{}", err),
            Self::Colourize(err) => write!(f, "{}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Fractal(err) => Some(err),
            Self::Colourize(err) => Some(err),
        }
    }
}

impl From<FractalError> for RenderError {
    fn from(err: FractalError) -> Self {
        Self::Fractal(err)
    }
}

impl From<ColourizeError<PaletteError>> for RenderError {
    fn from(err: ColourizeError<PaletteError>) -> Self {
        Self::Colourize(err)
    }
}

/// Generates `request` and colourizes it with the configured palette.
pub fn render(request: &FractalRequest, config: RenderConfig) -> Result<Rendered, RenderError> {
    render_cancelable(request, config, &NeverCancel)
}

/// Like [`render`], but both stages poll `cancel`.
pub fn render_cancelable<C>(
    request: &FractalRequest,
    config: RenderConfig,
    cancel: &C,
) -> Result<Rendered, RenderError>
where
    C: CancelToken + ?Sized,
{
    let started = Instant::now();

    let field = generate_fractal(request, config.execution, cancel)?;
    let image = colourize(&field, &palette_factory(config.palette), cancel)?;

    log::debug!(
        "rendered {} with {} palette in {:?}",
        request.kind(),
        config.palette,
        started.elapsed()
    );

    Ok(Rendered { field, image })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::Cancelled;
    use crate::core::data::fractal_kinds::FractalKinds;
    use crate::core::data::fractal_params::{CurveParams, FractalParams};
    use crate::core::data::raster_dims::RasterDims;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn request(kind: FractalKinds) -> FractalRequest {
        FractalRequest::with_defaults(kind, RasterDims::new(24, 18).unwrap())
    }

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();

        assert_eq!(config.palette, PaletteKind::Classic);
        assert_eq!(config.execution, Execution::Parallel);
    }

    #[test]
    fn test_image_matches_field_dimensions() {
        for &palette in PaletteKind::ALL {
            let config = RenderConfig {
                palette,
                ..RenderConfig::default()
            };

            let rendered = render(&request(FractalKinds::Julia), config).unwrap();

            assert_eq!(rendered.image.dims(), rendered.field.dims());
            assert_eq!(rendered.image.buffer_size(), 24 * 18 * 3);
        }
    }

    #[test]
    fn test_cancel_during_colourize_is_reported() {
        // Lets generation through (one poll per row) and fires on the
        // colourizer's first poll.
        let polls = AtomicUsize::new(0);
        let token = || polls.fetch_add(1, Ordering::Relaxed) >= 18;

        let result = render_cancelable(
            &request(FractalKinds::Mandelbrot),
            RenderConfig {
                execution: Execution::Serial,
                ..RenderConfig::default()
            },
            &token,
        );

        assert_eq!(
            result,
            Err(RenderError::Colourize(ColourizeError::Cancelled(Cancelled)))
        );
        assert!(result.unwrap_err().is_cancelled());
    }

    #[test]
    fn test_generation_errors_pass_through() {
        let request = FractalRequest {
            dims: RasterDims::new(4, 4).unwrap(),
            params: FractalParams::KochSnowflake(CurveParams::with_depth(20)),
        };

        let result = render(&request, RenderConfig::default());

        assert!(matches!(
            result,
            Err(RenderError::Fractal(FractalError::DepthOverflow { .. }))
        ));
    }
}
