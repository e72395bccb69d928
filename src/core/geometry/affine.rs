use crate::core::geometry::vec2::Vec2;

/// 2D affine map `x' = a*x + b*y + c`, `y' = d*x + e*y + f`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine2 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Affine2 {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0, 1.0, 0.0);

    #[must_use]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[must_use]
    pub fn translation(offset: Vec2) -> Self {
        Self::new(1.0, 0.0, offset.x, 0.0, 1.0, offset.y)
    }

    #[must_use]
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, 0.0, sy, 0.0)
    }

    #[must_use]
    pub fn rotation_about(pivot: Vec2, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();

        Self::translation(pivot)
            .compose(&Self::new(cos, -sin, 0.0, sin, cos, 0.0))
            .compose(&Self::translation(Vec2::new(-pivot.x, -pivot.y)))
    }

    /// Moves every point the fraction `ratio` of the way toward `target`.
    #[must_use]
    pub fn contraction_toward(target: Vec2, ratio: f64) -> Self {
        let keep = 1.0 - ratio;
        Self::new(keep, 0.0, target.x * ratio, 0.0, keep, target.y * ratio)
    }

    #[must_use]
    pub fn apply(&self, point: Vec2) -> Vec2 {
        Vec2 {
            x: self.a * point.x + self.b * point.y + self.c,
            y: self.d * point.x + self.e * point.y + self.f,
        }
    }

    /// `self ∘ inner`: applies `inner` first.
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        Self {
            a: self.a * inner.a + self.b * inner.d,
            b: self.a * inner.b + self.b * inner.e,
            c: self.a * inner.c + self.b * inner.f + self.c,
            d: self.d * inner.a + self.e * inner.d,
            e: self.d * inner.b + self.e * inner.e,
            f: self.d * inner.c + self.e * inner.f + self.f,
        }
    }
}

impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}
