//! Defines the arithmetic contract shared by all algebraic values.
//!
//! The core trait is [Arithmetic]. An implementor provides a minimal set of primitives
//! (addition, negation, multiplication and, where it exists, inversion) and receives
//! subtraction, division, integer powers and tolerance equality for free:
//! - `a - b` is `a + (-b)`
//! - `a / b` is `a * b^-1`
//! - `a^n` is `a * ... * a` (`|n|` factors), inverted when `n` is negative.
//!
//! In contrast to rings whose elements do not carry the ring, every [Arithmetic] value
//! contains all the knowledge needed to produce its own zero and one.
//!
//! An extension of the arithmetic trait is [`Euclidean`], which adds division with remainder.
//! Values that can serve as numerators of a [Fraction](fraction::Fraction) implement [`Localizable`].
pub mod float;
pub mod fraction;
pub mod integer;
pub mod scalar;
pub mod symbol;
pub mod value;

use std::{cmp::Ordering, fmt::Debug};

use crate::error::{ArithmeticError, Result};

/// The capability set of an algebraic value.
///
/// Operations that are not defined for a variant (for example the inverse of a vector)
/// return [ArithmeticError::UnsupportedOperation].
pub trait Arithmetic: Clone + PartialEq + Debug {
    /// The additive identity of the structure that `self` belongs to.
    fn zero(&self) -> Self;
    /// The multiplicative identity of the structure that `self` belongs to.
    fn one(&self) -> Result<Self>;
    fn add(&self, other: &Self) -> Result<Self>;
    fn minus(&self) -> Self;
    fn multiply(&self, other: &Self) -> Result<Self>;

    fn inverse(&self) -> Result<Self> {
        Err(ArithmeticError::unsupported("inverse", self.type_name()))
    }

    /// The norm of the value. Values without a numeric norm return `NaN`.
    fn norm(&self) -> f64;

    /// Exact zero test. Tolerance plays no role here.
    fn is_zero(&self) -> bool {
        self.norm() == 0.0
    }

    fn is_one(&self) -> bool {
        match self.one() {
            Ok(one) => *self == one,
            Err(_) => false,
        }
    }

    /// A human readable name of the variant, used in error messages.
    fn type_name(&self) -> String {
        std::any::type_name::<Self>().to_owned()
    }

    /// Return `Some(n)` if the value is the integer `n`.
    fn integer_exponent(&self) -> Option<i64> {
        None
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        self.add(&other.minus())
    }

    fn divide(&self, other: &Self) -> Result<Self> {
        self.multiply(&other.inverse()?)
    }

    /// Compute `alpha * self`.
    fn scale(&self, alpha: &Self) -> Result<Self> {
        alpha.multiply(self)
    }

    /// Compute `self^exponent`. The exponent must be an integer, as there is
    /// no exponential function to define the general case.
    fn power(&self, exponent: &Self) -> Result<Self> {
        match exponent.integer_exponent() {
            Some(n) => self.pow(n),
            None => Err(ArithmeticError::unsupported(
                "power",
                format!("{} with a non-integer exponent", self.type_name()),
            )),
        }
    }

    /// Compute `self^n` by repeated multiplication.
    // TODO: switch to square-and-multiply once all implementors have an associative multiply
    fn pow(&self, n: i64) -> Result<Self> {
        if n == 0 {
            return self.one();
        }

        let mut res = self.clone();
        for _ in 1..n.unsigned_abs() {
            res = res.multiply(self)?;
        }

        if n < 0 {
            res.inverse()
        } else {
            Ok(res)
        }
    }

    /// The distance induced by the norm, `|self - other|`.
    fn distance(&self, other: &Self) -> Result<f64> {
        Ok(self.subtract(other)?.norm())
    }

    /// Test if the distance between `self` and `other` is strictly less than `tolerance`.
    fn equals_within(&self, other: &Self, tolerance: f64) -> Result<bool> {
        Ok(self.distance(other)? < tolerance)
    }

    /// Compare two values, if the structure has an order.
    fn compare(&self, _other: &Self) -> Result<Ordering> {
        Err(ArithmeticError::unsupported("compare", self.type_name()))
    }
}

/// A Euclidean domain element: a value with a degree that supports division with remainder,
/// such that `f = f.quotient(g) * g + f.modulo(g)` and the remainder is either zero or of
/// smaller degree than `g`.
pub trait Euclidean: Arithmetic {
    type Degree: Ord + Clone + Debug;

    /// The degree of the value, or `None` for zero.
    fn degree(&self) -> Option<Self::Degree>;

    fn quot_rem(&self, divisor: &Self) -> Result<(Self, Self)>;

    fn quotient(&self, divisor: &Self) -> Result<Self> {
        Ok(self.quot_rem(divisor)?.0)
    }

    fn modulo(&self, divisor: &Self) -> Result<Self> {
        Ok(self.quot_rem(divisor)?.1)
    }

    /// Compute the greatest common divisor using Euclid's algorithm.
    fn gcd(&self, other: &Self) -> Result<Self> {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = a.modulo(&b)?;
            a = b;
            b = r;
        }
        Ok(a)
    }
}

/// A value that can be used as the numerator and denominator of a fraction.
pub trait Localizable: Arithmetic {
    /// Set to `true` if [Localizable::representative] yields a unique form for every
    /// equivalence class of fractions.
    const CANONICAL: bool = false;

    /// Get the canonical representative of `numerator / denominator`.
    /// The default performs no reduction.
    fn representative(numerator: Self, denominator: Self) -> (Self, Self) {
        (numerator, denominator)
    }

    /// The norm of `numerator / denominator`.
    fn ratio_norm(numerator: &Self, denominator: &Self) -> f64 {
        numerator.norm() / denominator.norm()
    }
}
