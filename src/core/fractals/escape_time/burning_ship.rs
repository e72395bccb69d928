use crate::core::data::complex::Complex;
use crate::core::fractals::escape_time::rule::EscapeRule;

#[derive(Debug, Copy, Clone, Default)]
pub struct BurningShipRule;

impl EscapeRule for BurningShipRule {
    #[inline]
    fn start(&self, pixel: Complex) -> (Complex, Complex) {
        (Complex::ZERO, pixel)
    }

    /// Squares `|Re z| + i|Im z|` before adding `c`.
    #[inline]
    fn step(&self, z: Complex, c: Complex) -> Complex {
        let folded = z.abs_parts();
        folded * folded + c
    }
}
