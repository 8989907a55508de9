//! The numeric tower `Integer ⊂ Rational ⊂ Real ⊂ Complex`.
//!
//! Binary operations promote both operands to the highest rank among them.
//! Rationals with a unit denominator are demoted back to integers.

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
};

use crate::error::{ArithmeticError, Result};

use super::{
    float::{Complex, F64},
    fraction::Rational,
    integer::Integer,
    Arithmetic,
};

/// A number.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Scalar {
    Integer(Integer),
    Rational(Rational),
    Real(F64),
    Complex(Complex),
}

macro_rules! promoted {
    ($a:expr, $b:expr, |$x:ident, $y:ident| $body:expr) => {
        match $a.promote_pair($b) {
            (Scalar::Integer($x), Scalar::Integer($y)) => Scalar::Integer($body),
            (Scalar::Rational($x), Scalar::Rational($y)) => Scalar::Rational($body),
            (Scalar::Real($x), Scalar::Real($y)) => Scalar::Real($body),
            (Scalar::Complex($x), Scalar::Complex($y)) => Scalar::Complex($body),
            _ => unreachable!("Promotion yields scalars of equal rank"),
        }
    };
}

impl Scalar {
    fn rank(&self) -> u8 {
        match self {
            Scalar::Integer(_) => 0,
            Scalar::Rational(_) => 1,
            Scalar::Real(_) => 2,
            Scalar::Complex(_) => 3,
        }
    }

    /// Convert `self` to the representation of the given rank.
    fn promote(&self, rank: u8) -> Scalar {
        match (self, rank) {
            (Scalar::Integer(i), 1) => Scalar::Rational(Rational::from(i.clone())),
            (Scalar::Integer(i), 2) => Scalar::Real(i.to_f64().into()),
            (Scalar::Integer(i), 3) => Scalar::Complex(F64::from(i.to_f64()).into()),
            (Scalar::Rational(r), 2) => Scalar::Real(r.to_f64().into()),
            (Scalar::Rational(r), 3) => Scalar::Complex(F64::from(r.to_f64()).into()),
            (Scalar::Real(r), 3) => Scalar::Complex((*r).into()),
            _ => self.clone(),
        }
    }

    fn promote_pair(&self, other: &Scalar) -> (Scalar, Scalar) {
        let rank = self.rank().max(other.rank());
        (self.promote(rank), other.promote(rank))
    }

    /// Demote rationals with a unit denominator to integers.
    fn normalize(self) -> Scalar {
        match self {
            Scalar::Rational(r) if r.is_integer() => Scalar::Integer(r.into_parts().0),
            s => s,
        }
    }

    /// Test if the scalar equals `-1`.
    pub fn is_minus_one(&self) -> bool {
        self.minus().is_one()
    }

    /// Get the value as a real number, if it has no imaginary part.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Scalar::Integer(i) => Some(i.to_f64()),
            Scalar::Rational(r) => Some(r.to_f64()),
            Scalar::Real(r) => Some(r.into_inner()),
            Scalar::Complex(c) => {
                if c.im.into_inner() == 0. {
                    Some(c.re.into_inner())
                } else {
                    None
                }
            }
        }
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Integer(value.into())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Integer(value.into())
    }
}

impl From<Integer> for Scalar {
    fn from(value: Integer) -> Self {
        Scalar::Integer(value)
    }
}

impl From<Rational> for Scalar {
    fn from(value: Rational) -> Self {
        Scalar::Rational(value).normalize()
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Real(value.into())
    }
}

impl From<Complex> for Scalar {
    fn from(value: Complex) -> Self {
        Scalar::Complex(value)
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Integer(i) => Display::fmt(i, f),
            Scalar::Rational(r) => Display::fmt(r, f),
            Scalar::Real(r) => Display::fmt(r, f),
            Scalar::Complex(c) => Display::fmt(c, f),
        }
    }
}

impl Arithmetic for Scalar {
    fn zero(&self) -> Self {
        match self {
            Scalar::Integer(_) | Scalar::Rational(_) => Scalar::Integer(Integer::new(0)),
            Scalar::Real(r) => Scalar::Real(r.zero()),
            Scalar::Complex(c) => Scalar::Complex(c.zero()),
        }
    }

    fn one(&self) -> Result<Self> {
        Ok(match self {
            Scalar::Integer(_) | Scalar::Rational(_) => Scalar::Integer(Integer::new(1)),
            Scalar::Real(r) => Scalar::Real(r.one()?),
            Scalar::Complex(c) => Scalar::Complex(c.one()?),
        })
    }

    fn add(&self, other: &Self) -> Result<Self> {
        Ok(promoted!(self, other, |a, b| a.add(&b)?).normalize())
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        Ok(promoted!(self, other, |a, b| a.subtract(&b)?).normalize())
    }

    fn minus(&self) -> Self {
        match self {
            Scalar::Integer(i) => Scalar::Integer(i.minus()),
            Scalar::Rational(r) => Scalar::Rational(r.minus()),
            Scalar::Real(r) => Scalar::Real(r.minus()),
            Scalar::Complex(c) => Scalar::Complex(c.minus()),
        }
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        Ok(promoted!(self, other, |a, b| a.multiply(&b)?).normalize())
    }

    /// The inverse of an integer is a rational number.
    fn inverse(&self) -> Result<Self> {
        Ok(match self {
            Scalar::Integer(i) => {
                Scalar::Rational(Rational::new(Integer::new(1), i.clone())?).normalize()
            }
            Scalar::Rational(r) => Scalar::Rational(r.inverse()?).normalize(),
            Scalar::Real(r) => Scalar::Real(r.inverse()?),
            Scalar::Complex(c) => Scalar::Complex(c.inverse()?),
        })
    }

    fn norm(&self) -> f64 {
        match self {
            Scalar::Integer(i) => i.norm(),
            Scalar::Rational(r) => r.to_f64().abs(),
            Scalar::Real(r) => r.norm(),
            Scalar::Complex(c) => c.norm(),
        }
    }

    fn is_zero(&self) -> bool {
        match self {
            Scalar::Integer(i) => i.is_zero(),
            Scalar::Rational(r) => r.is_zero(),
            Scalar::Real(r) => r.is_zero(),
            Scalar::Complex(c) => c.is_zero(),
        }
    }

    fn is_one(&self) -> bool {
        match self {
            Scalar::Integer(i) => i.is_one(),
            Scalar::Rational(r) => r.is_one(),
            Scalar::Real(r) => r.is_one(),
            Scalar::Complex(c) => c.is_one(),
        }
    }

    fn type_name(&self) -> String {
        match self {
            Scalar::Integer(_) => "integer",
            Scalar::Rational(_) => "rational",
            Scalar::Real(_) => "real",
            Scalar::Complex(_) => "complex",
        }
        .to_owned()
    }

    /// Only integers are accepted as exponents.
    fn integer_exponent(&self) -> Option<i64> {
        match self {
            Scalar::Integer(i) => i.to_i64(),
            _ => None,
        }
    }

    fn compare(&self, other: &Self) -> Result<Ordering> {
        match self.promote_pair(other) {
            (Scalar::Integer(a), Scalar::Integer(b)) => a.compare(&b),
            (Scalar::Rational(a), Scalar::Rational(b)) => a.compare(&b),
            (Scalar::Real(a), Scalar::Real(b)) => a.compare(&b),
            (a, _) => Err(ArithmeticError::unsupported("compare", a.type_name())),
        }
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use crate::{
        domains::{
            float::Complex, fraction::Rational, integer::Integer, scalar::Scalar, Arithmetic,
        },
        error::ErrorKind,
    };

    #[test]
    fn promotion() {
        let a = Scalar::from(2);
        let b = Scalar::from(Rational::try_from((1, 2)).unwrap());
        assert_eq!(a.add(&b).unwrap(), Scalar::from(Rational::try_from((5, 2)).unwrap()));
        assert_eq!(b.add(&b).unwrap(), Scalar::Integer(Integer::from(1)));

        let r = a.multiply(&Scalar::from(0.5)).unwrap();
        assert_eq!(r, Scalar::from(1.));

        let c = b.multiply(&Scalar::from(Complex::new(0., 2.))).unwrap();
        assert_eq!(c, Scalar::from(Complex::new(0., 1.)));
    }

    #[test]
    fn integer_division_is_rational() {
        let a = Scalar::from(3);
        let b = Scalar::from(6);
        assert_eq!(a.divide(&b).unwrap(), Scalar::from(Rational::try_from((1, 2)).unwrap()));
        assert_eq!(b.divide(&a).unwrap(), Scalar::from(2));
        assert_eq!(
            a.divide(&a.zero()).unwrap_err().kind(),
            ErrorKind::ArithmeticFailure
        );
    }

    #[test]
    fn exponents() {
        let a = Scalar::from(Rational::try_from((2, 3)).unwrap());
        assert_eq!(
            a.power(&Scalar::from(-2)).unwrap(),
            Scalar::from(Rational::try_from((9, 4)).unwrap())
        );
        assert_eq!(
            a.power(&Scalar::from(2.)).unwrap_err().kind(),
            ErrorKind::UnsupportedOperation
        );
        assert!(Scalar::from(-1).is_minus_one());
    }

    #[test]
    fn ordering() {
        assert_eq!(
            Scalar::from(1).compare(&Scalar::from(1.5)).unwrap(),
            Ordering::Less
        );
        assert_eq!(
            Scalar::from(Complex::new(1., 1.))
                .compare(&Scalar::from(1))
                .unwrap_err()
                .kind(),
            ErrorKind::UnsupportedOperation
        );
    }
}
