use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::rule::EscapeRule;

/// `z <- z^2 + c`, starting from `z = 0` with `c` the pixel.
#[derive(Debug, Copy, Clone, Default)]
pub struct MandelbrotRule;

impl EscapeRule for MandelbrotRule {
    #[inline]
    fn start(&self, pixel: Complex) -> (Complex, Complex) {
        (Complex::ZERO, pixel)
    }

    #[inline]
    fn step(&self, z: Complex, c: Complex) -> Complex {
        z * z + c
    }
}
