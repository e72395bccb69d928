use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::rule::EscapeRule;

/// `z <- z^2 + c` for a fixed `c`, starting from the pixel.
#[derive(Debug, Copy, Clone)]
pub struct JuliaRule {
    c: Complex,
}

impl JuliaRule {
    #[must_use]
    pub fn new(c: Complex) -> Self {
        Self { c }
    }

    #[must_use]
    pub fn c(&self) -> Complex {
        self.c
    }
}

impl EscapeRule for JuliaRule {
    #[inline]
    fn start(&self, pixel: Complex) -> (Complex, Complex) {
        (pixel, self.c)
    }

    #[inline]
    fn step(&self, z: Complex, c: Complex) -> Complex {
        z * z + c
    }
}
