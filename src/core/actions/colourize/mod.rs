pub mod colourize;
pub mod ports;
