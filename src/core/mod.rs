pub mod actions;
pub mod data;
pub mod errors;
pub mod fractals;
pub mod geometry;
pub mod palettes;
pub mod raster;
pub mod util;
