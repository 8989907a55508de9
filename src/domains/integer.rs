//! Arbitrary precision integers.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    ops::Neg,
};

use rug::{Integer as MultiPrecisionInteger, Rational as MultiPrecisionRational};

use crate::error::{ArithmeticError, Result};

use super::{Arithmetic, Euclidean, Localizable};

/// An arbitrary precision integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Integer(MultiPrecisionInteger);

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Integer {
                #[inline]
                fn from(value: $t) -> Self {
                    Integer(MultiPrecisionInteger::from(value))
                }
            }
        )*
    };
}

impl_from_primitive!(i32, i64, i128, u32, u64, usize);

impl From<MultiPrecisionInteger> for Integer {
    fn from(value: MultiPrecisionInteger) -> Self {
        Integer(value)
    }
}

impl Integer {
    pub fn new(n: i64) -> Integer {
        Integer(MultiPrecisionInteger::from(n))
    }

    /// Get a reference to the underlying multi-precision integer.
    pub fn as_rug(&self) -> &MultiPrecisionInteger {
        &self.0
    }

    pub fn into_rug(self) -> MultiPrecisionInteger {
        self.0
    }

    pub fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64()
    }

    pub fn abs(&self) -> Integer {
        Integer(self.0.clone().abs())
    }

    pub fn is_negative(&self) -> bool {
        self.0.cmp0() == Ordering::Less
    }
}

impl Display for Integer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Neg for Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-self.0)
    }
}

impl Arithmetic for Integer {
    fn zero(&self) -> Self {
        Integer(MultiPrecisionInteger::new())
    }

    fn one(&self) -> Result<Self> {
        Ok(Integer::new(1))
    }

    fn add(&self, other: &Self) -> Result<Self> {
        Ok(Integer(MultiPrecisionInteger::from(&self.0 + &other.0)))
    }

    fn minus(&self) -> Self {
        Integer(MultiPrecisionInteger::from(-&self.0))
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        Ok(Integer(MultiPrecisionInteger::from(&self.0 * &other.0)))
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        Ok(Integer(MultiPrecisionInteger::from(&self.0 - &other.0)))
    }

    /// Only the units `1` and `-1` are invertible in the integers.
    fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            Err(ArithmeticError::DivisionByZero)
        } else if self.0 == 1 || self.0 == -1 {
            Ok(self.clone())
        } else {
            Err(ArithmeticError::unsupported(
                "inverse",
                format!("the non-unit integer {}", self),
            ))
        }
    }

    fn norm(&self) -> f64 {
        self.0.to_f64().abs()
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }

    fn type_name(&self) -> String {
        "integer".to_owned()
    }

    fn integer_exponent(&self) -> Option<i64> {
        self.0.to_i64()
    }

    fn compare(&self, other: &Self) -> Result<Ordering> {
        Ok(self.0.cmp(&other.0))
    }
}

impl Euclidean for Integer {
    type Degree = Integer;

    /// The absolute value of the integer.
    fn degree(&self) -> Option<Integer> {
        if self.is_zero() {
            None
        } else {
            Some(self.abs())
        }
    }

    /// Euclidean division with a non-negative remainder.
    fn quot_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let (q, r) = self.0.clone().div_rem_euc(divisor.0.clone());
        Ok((Integer(q), Integer(r)))
    }

    fn gcd(&self, other: &Self) -> Result<Self> {
        Ok(Integer(self.0.clone().gcd(&other.0)))
    }
}

impl Localizable for Integer {
    const CANONICAL: bool = true;

    /// Cancel the gcd and make the denominator positive.
    fn representative(numerator: Self, denominator: Self) -> (Self, Self) {
        if numerator.is_zero() {
            return (numerator, Integer::new(1));
        }

        let g = numerator.0.clone().gcd(&denominator.0);
        let (mut num, mut den) = if g == 1 {
            (numerator.0, denominator.0)
        } else {
            (numerator.0.div_exact(&g), denominator.0.div_exact(&g))
        };

        if den.cmp0() == Ordering::Less {
            num = -num;
            den = -den;
        }

        (Integer(num), Integer(den))
    }

    /// The exact quotient, rounded once. Stays finite when both parts overflow `f64`.
    fn ratio_norm(numerator: &Self, denominator: &Self) -> f64 {
        MultiPrecisionRational::from((numerator.0.clone(), denominator.0.clone()))
            .to_f64()
            .abs()
    }
}
