//! Floating-point reals and complex numbers.

use std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    hash::Hash,
};

use crate::error::{ArithmeticError, Result};

use super::Arithmetic;

/// A wrapper around `f64` that implements `Eq` and `Hash`.
/// All `NaN` values are considered equal, and `-0` is considered equal to `0`.
#[derive(Debug, Copy, Clone, Default)]
pub struct F64(f64);

impl F64 {
    pub fn new(value: f64) -> F64 {
        F64(value)
    }

    pub fn into_inner(self) -> f64 {
        self.0
    }
}

impl From<f64> for F64 {
    #[inline]
    fn from(value: f64) -> Self {
        F64(value)
    }
}

impl PartialEq for F64 {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 || (self.0.is_nan() && other.0.is_nan())
    }
}

impl Eq for F64 {}

impl Hash for F64 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        let bits = if self.0 == 0. {
            0
        } else if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        };
        bits.hash(state)
    }
}

impl Display for F64 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Arithmetic for F64 {
    #[inline]
    fn zero(&self) -> Self {
        F64(0.)
    }

    #[inline]
    fn one(&self) -> Result<Self> {
        Ok(F64(1.))
    }

    #[inline]
    fn add(&self, other: &Self) -> Result<Self> {
        Ok(F64(self.0 + other.0))
    }

    #[inline]
    fn minus(&self) -> Self {
        F64(-self.0)
    }

    #[inline]
    fn multiply(&self, other: &Self) -> Result<Self> {
        Ok(F64(self.0 * other.0))
    }

    #[inline]
    fn subtract(&self, other: &Self) -> Result<Self> {
        Ok(F64(self.0 - other.0))
    }

    fn inverse(&self) -> Result<Self> {
        if self.0 == 0. {
            Err(ArithmeticError::DivisionByZero)
        } else {
            Ok(F64(1. / self.0))
        }
    }

    #[inline]
    fn norm(&self) -> f64 {
        self.0.abs()
    }

    fn type_name(&self) -> String {
        "real".to_owned()
    }

    fn integer_exponent(&self) -> Option<i64> {
        if self.0.is_finite() && self.0.fract() == 0. && self.0.abs() < i64::MAX as f64 {
            Some(self.0 as i64)
        } else {
            None
        }
    }

    fn compare(&self, other: &Self) -> Result<Ordering> {
        self.0
            .partial_cmp(&other.0)
            .ok_or_else(|| ArithmeticError::unsupported("compare", "NaN"))
    }
}

/// A complex number with floating-point components.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Complex {
    pub re: F64,
    pub im: F64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Complex {
        Complex {
            re: re.into(),
            im: im.into(),
        }
    }

    pub fn conj(&self) -> Complex {
        Complex {
            re: self.re,
            im: self.im.minus(),
        }
    }

    pub fn norm_squared(&self) -> f64 {
        self.re.0 * self.re.0 + self.im.0 * self.im.0
    }
}

impl From<F64> for Complex {
    fn from(re: F64) -> Self {
        Complex { re, im: F64(0.) }
    }
}

impl Display for Complex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.im.0 < 0. {
            write!(f, "{}-{}i", self.re, -self.im.0)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

impl Arithmetic for Complex {
    fn zero(&self) -> Self {
        Complex::new(0., 0.)
    }

    fn one(&self) -> Result<Self> {
        Ok(Complex::new(1., 0.))
    }

    fn add(&self, other: &Self) -> Result<Self> {
        Ok(Complex::new(
            self.re.0 + other.re.0,
            self.im.0 + other.im.0,
        ))
    }

    fn minus(&self) -> Self {
        Complex::new(-self.re.0, -self.im.0)
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        Ok(Complex::new(
            self.re.0 * other.re.0 - self.im.0 * other.im.0,
            self.re.0 * other.im.0 + self.im.0 * other.re.0,
        ))
    }

    fn inverse(&self) -> Result<Self> {
        let n = self.norm_squared();
        if n == 0. {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Complex::new(self.re.0 / n, -self.im.0 / n))
    }

    fn norm(&self) -> f64 {
        self.re.0.hypot(self.im.0)
    }

    fn type_name(&self) -> String {
        "complex".to_owned()
    }

    fn integer_exponent(&self) -> Option<i64> {
        if self.im.0 == 0. {
            self.re.integer_exponent()
        } else {
            None
        }
    }
}
