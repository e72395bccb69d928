use std::ops::{Add, Div, Mul, Sub};

// implement Complex instead of using the num-complex trait for learning
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self {
        real: 0.0,
        imag: 0.0,
    };

    pub const ONE: Self = Self {
        real: 1.0,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    /// Folds both components onto their absolute values (the Burning Ship fold).
    #[must_use]
    pub fn abs_parts(&self) -> Self {
        Self {
            real: self.real.abs(),
            imag: self.imag.abs(),
        }
    }

    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            real: self.real * factor,
            imag: self.imag * factor,
        }
    }

    #[must_use]
    pub fn powi(&self, exponent: u32) -> Self {
        (0..exponent).fold(Self::ONE, |acc, _| acc * *self)
    }

    #[must_use]
    pub fn sin(&self) -> Self {
        Self {
            real: self.real.sin() * self.imag.cosh(),
            imag: self.real.cos() * self.imag.sinh(),
        }
    }

    #[must_use]
    pub fn cos(&self) -> Self {
        Self {
            real: self.real.cos() * self.imag.cosh(),
            imag: -self.real.sin() * self.imag.sinh(),
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Div for Complex {
    type Output = Self;

    /// Division by zero yields non-finite components; callers check the
    /// denominator first.
    fn div(self, other: Self) -> Self {
        let denominator = other.magnitude_squared();

        Self {
            real: (self.real * other.real + self.imag * other.imag) / denominator,
            imag: (self.imag * other.real - self.real * other.imag) / denominator,
        }
    }
}
