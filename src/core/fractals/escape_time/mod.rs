pub mod algorithm;
pub mod burning_ship;
pub mod julia;
pub mod mandelbrot;
pub mod newton;
pub mod rule;
pub mod smooth;
