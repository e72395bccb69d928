use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaletteError {
    ValueOutOfRange { value: f64 },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueOutOfRange { value } => {
                write!(f, "palette value {} is outside [0, 1]", value)
            }
        }
    }
}

impl Error for PaletteError {}
