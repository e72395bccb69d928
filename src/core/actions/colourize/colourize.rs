use crate::core::actions::cancellation::{poll_every_interval, CancelToken, Cancelled};
use crate::core::actions::colourize::ports::colour_map::ColourMap;
use crate::core::actions::normalize_field::normalize;
use crate::core::data::colour::Colour;
use crate::core::data::rgb_image::{RgbImage, RgbImageData, RgbImageError};
use crate::core::data::scalar_field::ScalarField;
use crate::core::palettes::errors::PaletteError;
use crate::core::palettes::ramp::Palette;
use std::error::Error;
use std::fmt;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq)]
pub enum ColourizeError<E> {
    Cancelled(Cancelled),
    ColourMap(E),
    Image(RgbImageError),
}

impl<E: fmt::Display> fmt::Display for ColourizeError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::Image(err) => write!(f, "image error: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for ColourizeError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => Some(err),
            Self::Image(err) => Some(err),
        }
    }
}

impl<E> From<Cancelled> for ColourizeError<E> {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

/// Maps every value of an already normalized `field` through `mapper` into an
/// RGB image of the same dimensions.
///
/// Polls `cancel` on the first pixel and every
/// [`CANCEL_CHECK_INTERVAL`](crate::core::actions::cancellation::CANCEL_CHECK_INTERVAL)
/// pixels after that. No image is produced once cancelled.
pub fn colourize_normalized<CMap, C>(
    field: &ScalarField,
    mapper: &CMap,
    cancel: &C,
) -> Result<RgbImage, ColourizeError<CMap::Failure>>
where
    CMap: ColourMap<T = f64>,
    C: CancelToken + ?Sized,
{
    let mut buffer: RgbImageData = Vec::with_capacity(field.dims().size() * 3);

    for (i, &value) in field.data().iter().enumerate() {
        poll_every_interval(i, cancel)?;

        let Colour { r, g, b } = mapper.map(value).map_err(ColourizeError::ColourMap)?;

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    RgbImage::from_data(field.dims(), buffer).map_err(ColourizeError::Image)
}

/// Normalizes `field` into `[0, 1]` and maps it through `palette`.
pub fn colourize<C>(
    field: &ScalarField,
    palette: &Palette,
    cancel: &C,
) -> Result<RgbImage, ColourizeError<PaletteError>>
where
    C: CancelToken + ?Sized,
{
    let started = Instant::now();
    let image = colourize_normalized(&normalize(field), palette, cancel)?;

    log::debug!(
        "colourized {}x{} field with {} palette in {:?}",
        field.width(),
        field.height(),
        palette.display_name(),
        started.elapsed()
    );

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::{NeverCancel, CANCEL_CHECK_INTERVAL};
    use crate::core::data::point::Point;
    use crate::core::data::raster_dims::RasterDims;
    use crate::core::palettes::factory::palette_factory;
    use crate::core::palettes::kinds::PaletteKind;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap for StubColourMapSuccess {
        type T = f64;
        type Failure = PaletteError;

        fn map(&self, value: f64) -> Result<Colour, Self::Failure> {
            let level = (value * 100.0) as u8;
            Ok(Colour {
                r: level,
                g: level,
                b: level,
            })
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap for StubColourMapFailure {
        type T = f64;
        type Failure = PaletteError;

        fn map(&self, value: f64) -> Result<Colour, Self::Failure> {
            Err(PaletteError::ValueOutOfRange { value })
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    fn field(width: u32, height: u32, data: Vec<f64>) -> ScalarField {
        ScalarField::from_data(RasterDims::new(width, height).unwrap(), data).unwrap()
    }

    #[test]
    fn test_maps_every_value_in_row_major_order() {
        let input = field(3, 1, vec![0.0, 0.5, 1.0]);

        let image = colourize_normalized(&input, &StubColourMapSuccess {}, &NeverCancel).unwrap();

        assert_eq!(image.buffer(), &vec![0, 0, 0, 50, 50, 50, 100, 100, 100]);
        assert_eq!(image.dims(), input.dims());
    }

    #[test]
    fn test_propagates_colour_map_failure() {
        let input = field(2, 1, vec![0.25, 0.5]);

        let result = colourize_normalized(&input, &StubColourMapFailure {}, &NeverCancel);

        assert_eq!(
            result,
            Err(ColourizeError::ColourMap(PaletteError::ValueOutOfRange {
                value: 0.25
            }))
        );
    }

    #[test]
    fn test_cancelled_token_produces_no_image() {
        let input = field(2, 2, vec![0.0; 4]);
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);

        let result = colourize_normalized(&input, &StubColourMapSuccess {}, &cancel_token);

        assert_eq!(result, Err(ColourizeError::Cancelled(Cancelled)));
    }

    #[test]
    fn test_polls_once_per_interval() {
        let size = CANCEL_CHECK_INTERVAL * 2 + 1;
        let input = field(size as u32, 1, vec![0.5; size]);
        let polls = AtomicUsize::new(0);
        let cancel_token = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };

        colourize_normalized(&input, &StubColourMapSuccess {}, &cancel_token).unwrap();

        assert_eq!(polls.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_colourize_normalizes_before_mapping() {
        let input = field(3, 1, vec![-10.0, 0.0, 10.0]);
        let palette = palette_factory(PaletteKind::Grayscale);

        let image = colourize(&input, &palette, &NeverCancel).unwrap();

        assert_eq!(image.pixel(Point { x: 0, y: 0 }), Some(Colour { r: 0, g: 0, b: 0 }));
        assert_eq!(
            image.pixel(Point { x: 1, y: 0 }),
            Some(Colour {
                r: 128,
                g: 128,
                b: 128
            })
        );
        assert_eq!(
            image.pixel(Point { x: 2, y: 0 }),
            Some(Colour {
                r: 255,
                g: 255,
                b: 255
            })
        );
    }

    #[test]
    fn test_palette_rejects_unnormalized_values() {
        let input = field(1, 1, vec![3.0]);
        let palette = palette_factory(PaletteKind::Hot);

        let result = colourize_normalized(&input, &palette, &NeverCancel);

        assert_eq!(
            result,
            Err(ColourizeError::ColourMap(PaletteError::ValueOutOfRange {
                value: 3.0
            }))
        );
    }

    #[test]
    fn test_error_displays() {
        let err: ColourizeError<PaletteError> = ColourizeError::Cancelled(Cancelled);
        assert_eq!(format!("{}", err), "operation cancelled");
    }
}
