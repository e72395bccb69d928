use crate::core::errors::InvalidRequestError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKinds {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    Newton,
    KochSnowflake,
    Sierpinski,
    DragonCurve,
    BarnsleyFern,
    TestPattern,
}

/// Which engine a kind runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalFamily {
    EscapeTime,
    RecursiveCurve,
    ChaosGame,
    Pattern,
}

impl FractalKinds {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::KochSnowflake,
        Self::Sierpinski,
        Self::DragonCurve,
        Self::BarnsleyFern,
        Self::Newton,
        Self::BurningShip,
        Self::TestPattern,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot Set",
            Self::Julia => "Julia Set",
            Self::BurningShip => "Burning Ship",
            Self::Newton => "Newton",
            Self::KochSnowflake => "Koch Snowflake",
            Self::Sierpinski => "Sierpinski",
            Self::DragonCurve => "Dragon Curve",
            Self::BarnsleyFern => "Barnsley Fern",
            Self::TestPattern => "Test Pattern",
        }
    }

    #[must_use]
    pub const fn family(self) -> FractalFamily {
        match self {
            Self::Mandelbrot | Self::Julia | Self::BurningShip | Self::Newton => {
                FractalFamily::EscapeTime
            }
            Self::KochSnowflake | Self::DragonCurve => FractalFamily::RecursiveCurve,
            // The chaos-game Sierpinski variant is selected by its method parameter.
            Self::Sierpinski => FractalFamily::RecursiveCurve,
            Self::BarnsleyFern => FractalFamily::ChaosGame,
            Self::TestPattern => FractalFamily::Pattern,
        }
    }
}

impl std::fmt::Display for FractalKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

impl FromStr for FractalKinds {
    type Err = InvalidRequestError;

    /// Accepts display names ("Mandelbrot Set") and their short forms
    /// ("mandelbrot", "burning_ship"), ignoring case.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let kind = match normalized.as_str() {
            "mandelbrot" | "mandelbrotset" => Self::Mandelbrot,
            "julia" | "juliaset" => Self::Julia,
            "burningship" => Self::BurningShip,
            "newton" => Self::Newton,
            "koch" | "kochsnowflake" => Self::KochSnowflake,
            "sierpinski" | "sierpinskitriangle" => Self::Sierpinski,
            "dragon" | "dragoncurve" => Self::DragonCurve,
            "barnsleyfern" | "fern" => Self::BarnsleyFern,
            "testpattern" => Self::TestPattern,
            _ => return Err(InvalidRequestError::UnknownFractalKind(name.to_string())),
        };

        Ok(kind)
    }
}
