//! The localization `S^-1 M` of a ring: fractions `a/s` with numerators in `M` and
//! denominators from a multiplicative submonoid `S` of `M`.
//!
//! Equality is decided by cross-multiplication, `a/s = b/t <=> a*t = b*s`, which is
//! only an equivalence relation when `M` has no zero divisors.
//! Every operation returns the [representative](Fraction::representative) of its result,
//! which is the identity unless `M` overrides [Localizable::representative].

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
};

use rug::Rational as MultiPrecisionRational;

use crate::error::{ArithmeticError, Result};

use super::{
    float::{Complex, F64},
    integer::Integer,
    Arithmetic, Localizable,
};

/// The field of rational numbers, as fractions of integers.
pub type Rational = Fraction<Integer>;

/// An element `numerator / denominator` of a fraction field.
/// The denominator is never zero.
#[derive(Clone, Debug)]
pub struct Fraction<M: Localizable> {
    numerator: M,
    denominator: M,
}

impl<M: Localizable> Fraction<M> {
    /// Create the fraction `numerator / denominator`, in its canonical form.
    pub fn new(numerator: M, denominator: M) -> Result<Fraction<M>> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Fraction::reduced(numerator, denominator))
    }

    /// Embed `numerator` as `numerator / 1`.
    pub fn from_numerator(numerator: M) -> Result<Fraction<M>> {
        let denominator = numerator.one()?;
        Ok(Fraction::reduced(numerator, denominator))
    }

    #[inline]
    fn reduced(numerator: M, denominator: M) -> Fraction<M> {
        let (numerator, denominator) = M::representative(numerator, denominator);
        Fraction {
            numerator,
            denominator,
        }
    }

    pub fn numerator(&self) -> &M {
        &self.numerator
    }

    pub fn denominator(&self) -> &M {
        &self.denominator
    }

    pub fn into_parts(self) -> (M, M) {
        (self.numerator, self.denominator)
    }

    /// Get the canonical representative of the equivalence class of `self`.
    pub fn representative(&self) -> Fraction<M> {
        Fraction::reduced(self.numerator.clone(), self.denominator.clone())
    }

    /// Compute `(alpha * a) / s`.
    pub fn scale_numerator(&self, alpha: &M) -> Result<Fraction<M>> {
        Ok(Fraction::reduced(
            alpha.multiply(&self.numerator)?,
            self.denominator.clone(),
        ))
    }
}

impl<M: Localizable> PartialEq for Fraction<M> {
    fn eq(&self, other: &Self) -> bool {
        match (
            self.numerator.multiply(&other.denominator),
            other.numerator.multiply(&self.denominator),
        ) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}

impl<M: Localizable + Eq> Eq for Fraction<M> {}

impl<M: Localizable + Hash> Hash for Fraction<M> {
    /// Only canonical representatives can be hashed consistently with
    /// cross-multiplication equality. All other fractions share a bucket.
    fn hash<H: Hasher>(&self, state: &mut H) {
        if M::CANONICAL {
            self.numerator.hash(state);
            self.denominator.hash(state);
        } else {
            0u8.hash(state);
        }
    }
}

impl<M: Localizable + Display> Display for Fraction<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl<M: Localizable> Arithmetic for Fraction<M> {
    fn zero(&self) -> Self {
        Fraction::reduced(self.numerator.zero(), self.denominator.clone())
    }

    fn one(&self) -> Result<Self> {
        let one = self.denominator.one()?;
        Ok(Fraction::reduced(one.clone(), one))
    }

    /// `a/s + b/t = (t*a + s*b) / (s*t)`
    fn add(&self, other: &Self) -> Result<Self> {
        let num = other
            .denominator
            .multiply(&self.numerator)?
            .add(&self.denominator.multiply(&other.numerator)?)?;
        let den = self.denominator.multiply(&other.denominator)?;
        Ok(Fraction::reduced(num, den))
    }

    fn minus(&self) -> Self {
        Fraction::reduced(self.numerator.minus(), self.denominator.clone())
    }

    /// `a/s * b/t = (a*b) / (s*t)`
    fn multiply(&self, other: &Self) -> Result<Self> {
        Ok(Fraction::reduced(
            self.numerator.multiply(&other.numerator)?,
            self.denominator.multiply(&other.denominator)?,
        ))
    }

    /// `a/s / b/t = (a*t) / (s*b)`.
    ///
    /// The numerator `b` of the divisor must be invertible or lie in the
    /// submonoid of denominators. This is not verified.
    fn divide(&self, other: &Self) -> Result<Self> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Fraction::reduced(
            self.numerator.multiply(&other.denominator)?,
            self.denominator.multiply(&other.numerator)?,
        ))
    }

    fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(Fraction::reduced(
            self.denominator.clone(),
            self.numerator.clone(),
        ))
    }

    fn norm(&self) -> f64 {
        M::ratio_norm(&self.numerator, &self.denominator)
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }

    fn type_name(&self) -> String {
        format!("fraction over {}", self.numerator.type_name())
    }

    fn integer_exponent(&self) -> Option<i64> {
        if self.denominator.is_one() {
            self.numerator.integer_exponent()
        } else {
            None
        }
    }

    /// Compare `a*t` with `b*s` in the ordering of the numerators,
    /// reversed when `s*t` is negative.
    fn compare(&self, other: &Self) -> Result<Ordering> {
        let lhs = self.numerator.multiply(&other.denominator)?;
        let rhs = other.numerator.multiply(&self.denominator)?;
        let ord = lhs.compare(&rhs)?;

        let den = self.denominator.multiply(&other.denominator)?;
        if den.compare(&den.zero())? == Ordering::Less {
            Ok(ord.reverse())
        } else {
            Ok(ord)
        }
    }
}

impl Localizable for F64 {}

impl Localizable for Complex {}

macro_rules! impl_rational_try_from {
    ($($t:ty),*) => {
        $(
            impl TryFrom<($t, $t)> for Rational {
                type Error = ArithmeticError;

                /// Create a rational number from a numerator and a non-zero denominator.
                #[inline]
                fn try_from((num, den): ($t, $t)) -> Result<Self> {
                    Fraction::new(Integer::from(num), Integer::from(den))
                }
            }
        )*
    };
}

impl_rational_try_from!(i32, i64, Integer);

impl From<Integer> for Rational {
    fn from(value: Integer) -> Self {
        Fraction {
            numerator: value,
            denominator: Integer::new(1),
        }
    }
}

impl Rational {
    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn to_f64(&self) -> f64 {
        MultiPrecisionRational::from((
            self.numerator.as_rug().clone(),
            self.denominator.as_rug().clone(),
        ))
        .to_f64()
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use crate::{
        domains::{
            float::{Complex, F64},
            fraction::{Fraction, Rational},
            integer::Integer,
            Arithmetic,
        },
        error::{ArithmeticError, ErrorKind},
    };

    fn real(n: f64, d: f64) -> Fraction<F64> {
        Fraction::new(F64::from(n), F64::from(d)).unwrap()
    }

    #[test]
    fn cross_multiplication() {
        // no reduction takes place for reals, so these are distinct representatives
        let a = real(1., 2.);
        let b = real(2., 4.);
        assert_eq!(a.denominator(), &F64::from(2.));
        assert_eq!(b.denominator(), &F64::from(4.));
        assert_eq!(a, b);
        assert_ne!(a, real(1., 3.));
    }

    #[test]
    fn unreduced_sum() {
        let s = real(1., 2.).add(&real(1., 3.)).unwrap();
        assert_eq!(s.numerator(), &F64::from(5.));
        assert_eq!(s.denominator(), &F64::from(6.));
    }

    #[test]
    fn rational_reduction() {
        let a = Rational::try_from((6, -4)).unwrap();
        assert_eq!(a.numerator(), &Integer::from(-3));
        assert_eq!(a.denominator(), &Integer::from(2));
        assert_eq!(a.representative().representative(), a.representative());

        let s = Rational::try_from((1, 6)).unwrap().add(&Rational::try_from((1, 3)).unwrap()).unwrap();
        assert_eq!(s.numerator(), &Integer::from(1));
        assert_eq!(s.denominator(), &Integer::from(2));
        assert_eq!(s.to_f64(), 0.5);
    }

    #[test]
    fn division() {
        let a = Rational::try_from((3, 4)).unwrap();
        let b = Rational::try_from((-9, 2)).unwrap();
        assert_eq!(a.divide(&b).unwrap(), Rational::try_from((-1, 6)).unwrap());
        assert_eq!(
            a.divide(&a.zero()).unwrap_err(),
            ArithmeticError::DivisionByZero
        );
        assert_eq!(a.inverse().unwrap(), Rational::try_from((4, 3)).unwrap());
        assert_eq!(
            Fraction::new(Integer::from(1), Integer::from(0)).unwrap_err(),
            ArithmeticError::DivisionByZero
        );
    }

    #[test]
    fn scale() {
        let a = Rational::try_from((3, 4)).unwrap();
        assert_eq!(
            a.scale_numerator(&Integer::from(2)).unwrap(),
            Rational::try_from((3, 2)).unwrap()
        );
    }

    #[test]
    fn ordering() {
        let a = Rational::try_from((1, 3)).unwrap();
        let b = Rational::try_from((1, 2)).unwrap();
        assert_eq!(a.compare(&b).unwrap(), Ordering::Less);
        assert_eq!(b.minus().compare(&a).unwrap(), Ordering::Less);

        let z = Fraction::new(Complex::new(1., 1.), Complex::new(2., 0.)).unwrap();
        let err = z.compare(&z).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
        assert!(err.to_string().contains("complex"));
    }

    #[test]
    fn negative_denominators() {
        let a = real(1., -2.);
        let zero = real(0., 1.);
        assert_eq!(a.compare(&zero).unwrap(), Ordering::Less);
        assert_eq!(zero.compare(&a).unwrap(), Ordering::Greater);
        assert_eq!(a.compare(&real(-1., 2.)).unwrap(), Ordering::Equal);
        assert_eq!(real(-1., -3.).compare(&real(1., 2.)).unwrap(), Ordering::Less);
    }

    #[test]
    fn large_norm() {
        let p = rug::Integer::from(rug::Integer::u_pow_u(10, 400));
        let a = Rational::new(Integer::from(p.clone() * 10u32), Integer::from(p + 1u32)).unwrap();
        assert!((a.norm() - 10.).abs() < 1e-9);
        assert!(a.equals_within(&a.zero(), 100.).unwrap());
        assert!(a.minus().norm() > 9.);
    }

    #[test]
    fn rational_from_pair() {
        assert_eq!(Rational::try_from((2, 4)).unwrap(), Rational::try_from((1i64, 2i64)).unwrap());
        assert_eq!(
            Rational::try_from((Integer::from(1), Integer::from(0))).unwrap_err(),
            ArithmeticError::DivisionByZero
        );
        assert_eq!(
            Rational::try_from((3i32, 0i32)).unwrap_err().kind(),
            ErrorKind::ArithmeticFailure
        );
    }
}
