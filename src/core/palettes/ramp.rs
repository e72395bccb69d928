use crate::core::actions::colourize::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::palettes::errors::PaletteError;
use crate::core::palettes::kinds::PaletteKind;

/// Colour pinned at `position` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourStop {
    pub position: f64,
    pub colour: Colour,
}

const fn stop(position: f64, r: u8, g: u8, b: u8) -> ColourStop {
    ColourStop {
        position,
        colour: Colour { r, g, b },
    }
}

/// Black through red and yellow to white.
pub const HOT_STOPS: &[ColourStop] = &[
    stop(0.0, 0, 0, 0),
    stop(0.365, 255, 0, 0),
    stop(0.746, 255, 255, 0),
    stop(1.0, 255, 255, 255),
];

pub const COOL_STOPS: &[ColourStop] = &[stop(0.0, 0, 255, 255), stop(1.0, 255, 0, 255)];

pub const VIRIDIS_STOPS: &[ColourStop] = &[
    stop(0.0, 68, 1, 84),
    stop(0.125, 71, 45, 123),
    stop(0.25, 59, 82, 139),
    stop(0.375, 44, 114, 142),
    stop(0.5, 33, 145, 140),
    stop(0.625, 40, 174, 128),
    stop(0.75, 94, 201, 98),
    stop(0.875, 173, 220, 48),
    stop(1.0, 253, 231, 37),
];

pub const PLASMA_STOPS: &[ColourStop] = &[
    stop(0.0, 13, 8, 135),
    stop(0.125, 76, 2, 161),
    stop(0.25, 126, 3, 168),
    stop(0.375, 169, 35, 149),
    stop(0.5, 204, 71, 120),
    stop(0.625, 229, 107, 93),
    stop(0.75, 248, 149, 64),
    stop(0.875, 253, 197, 39),
    stop(1.0, 240, 249, 33),
];

/// Samples of `r = |2x - 0.5|`, `g = sin(pi x)`, `b = cos(pi x / 2)`.
pub const RAINBOW_STOPS: &[ColourStop] = &[
    stop(0.0, 128, 0, 255),
    stop(0.125, 64, 98, 250),
    stop(0.25, 0, 180, 236),
    stop(0.375, 64, 236, 212),
    stop(0.5, 128, 255, 180),
    stop(0.625, 191, 236, 142),
    stop(0.75, 255, 180, 98),
    stop(0.875, 255, 98, 50),
    stop(1.0, 255, 0, 0),
];

pub const GRAYSCALE_STOPS: &[ColourStop] = &[stop(0.0, 0, 0, 0), stop(1.0, 255, 255, 255)];

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    (f64::from(from) + (f64::from(to) - f64::from(from)) * t)
        .round()
        .clamp(0.0, 255.0) as u8
}

/// Piecewise-linear colour ramp over `[0, 1]` backed by a static stop table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    kind: PaletteKind,
    stops: &'static [ColourStop],
}

impl Palette {
    #[must_use]
    pub(crate) const fn new(kind: PaletteKind, stops: &'static [ColourStop]) -> Self {
        Self { kind, stops }
    }

    #[must_use]
    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    #[must_use]
    pub fn stops(&self) -> &'static [ColourStop] {
        self.stops
    }

    /// Colour at `t`, with `t` clamped into `[0, 1]`.
    #[must_use]
    pub fn sample(&self, t: f64) -> Colour {
        let t = t.clamp(0.0, 1.0);

        let Some(first) = self.stops.first() else {
            return Colour::default();
        };
        if t <= first.position {
            return first.colour;
        }

        for pair in self.stops.windows(2) {
            let (low, high) = (pair[0], pair[1]);
            if t <= high.position {
                let span = high.position - low.position;
                let local = if span > 0.0 { (t - low.position) / span } else { 1.0 };

                return Colour {
                    r: lerp_channel(low.colour.r, high.colour.r, local),
                    g: lerp_channel(low.colour.g, high.colour.g, local),
                    b: lerp_channel(low.colour.b, high.colour.b, local),
                };
            }
        }

        self.stops[self.stops.len() - 1].colour
    }
}

impl ColourMap for Palette {
    type T = f64;
    type Failure = PaletteError;

    fn map(&self, value: f64) -> Result<Colour, Self::Failure> {
        if !(0.0..=1.0).contains(&value) {
            return Err(PaletteError::ValueOutOfRange { value });
        }

        Ok(self.sample(value))
    }

    fn display_name(&self) -> &str {
        self.kind.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TABLES: [&[ColourStop]; 6] = [
        HOT_STOPS,
        COOL_STOPS,
        VIRIDIS_STOPS,
        PLASMA_STOPS,
        RAINBOW_STOPS,
        GRAYSCALE_STOPS,
    ];

    #[test]
    fn test_tables_span_the_unit_interval_in_order() {
        for stops in ALL_TABLES {
            assert_eq!(stops.first().map(|s| s.position), Some(0.0));
            assert_eq!(stops.last().map(|s| s.position), Some(1.0));
            assert!(stops.windows(2).all(|pair| pair[0].position < pair[1].position));
        }
    }

    #[test]
    fn test_hot_passes_through_red_and_yellow() {
        let hot = Palette::new(PaletteKind::Hot, HOT_STOPS);

        assert_eq!(hot.map(0.0), Ok(Colour { r: 0, g: 0, b: 0 }));
        assert_eq!(hot.map(0.365), Ok(Colour { r: 255, g: 0, b: 0 }));
        assert_eq!(hot.map(0.746), Ok(Colour { r: 255, g: 255, b: 0 }));
        assert_eq!(hot.map(1.0), Ok(Colour { r: 255, g: 255, b: 255 }));
    }

    #[test]
    fn test_grayscale_midpoint() {
        let gray = Palette::new(PaletteKind::Grayscale, GRAYSCALE_STOPS);

        assert_eq!(gray.map(0.5), Ok(Colour { r: 128, g: 128, b: 128 }));
    }

    #[test]
    fn test_cool_interpolates_between_cyan_and_magenta() {
        let cool = Palette::new(PaletteKind::Cool, COOL_STOPS);

        assert_eq!(cool.map(0.25), Ok(Colour { r: 64, g: 191, b: 255 }));
    }

    #[test]
    fn test_values_outside_unit_interval_are_rejected() {
        let gray = Palette::new(PaletteKind::Grayscale, GRAYSCALE_STOPS);

        assert_eq!(
            gray.map(1.5),
            Err(PaletteError::ValueOutOfRange { value: 1.5 })
        );
        assert!(gray.map(-0.01).is_err());
        assert!(gray.map(f64::NAN).is_err());
    }

    #[test]
    fn test_sample_clamps() {
        let gray = Palette::new(PaletteKind::Grayscale, GRAYSCALE_STOPS);

        assert_eq!(gray.sample(7.0), Colour { r: 255, g: 255, b: 255 });
        assert_eq!(gray.sample(-7.0), Colour { r: 0, g: 0, b: 0 });
    }
}
