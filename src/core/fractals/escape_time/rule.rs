use crate::core::data::complex::Complex;

/// Update strategy plugged into [`EscapeTimeAlgorithm`](super::algorithm::EscapeTimeAlgorithm).
/// The bailout `|z| > R` is shared by every rule.
pub trait EscapeRule {
    /// Initial iterate and additive constant for the plane point `pixel`.
    fn start(&self, pixel: Complex) -> (Complex, Complex);

    fn step(&self, z: Complex, c: Complex) -> Complex;
}
