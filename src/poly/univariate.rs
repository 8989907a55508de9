use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
};

use tracing::{instrument, trace};

use crate::{
    domains::{Arithmetic, Euclidean},
    error::{ArithmeticError, Result},
};

/// A dense univariate polynomial `c_0 + c_1 x + ... + c_n x^n`.
///
/// The coefficient storage has a fixed capacity that is allocated at construction
/// and never grows. The degree is cached and is `None` for the zero polynomial.
#[derive(Clone, Debug)]
pub struct Polynomial<R: Arithmetic> {
    coefficients: Vec<R>,
    degree: Option<usize>,
    zero: R,
}

impl<R: Arithmetic> Polynomial<R> {
    /// Constructs the zero polynomial with room for `capacity` coefficients.
    pub fn new(zero: R, capacity: usize) -> Polynomial<R> {
        Polynomial {
            coefficients: vec![zero.clone(); capacity],
            degree: None,
            zero,
        }
    }

    /// Constructs a polynomial from its coefficients, starting with the constant term.
    /// The capacity equals the number of coefficients.
    pub fn from_coefficients(coefficients: Vec<R>) -> Result<Polynomial<R>> {
        let zero = match coefficients.first() {
            Some(c) => c.zero(),
            None => {
                return Err(ArithmeticError::IllegalArgument(
                    "a polynomial needs at least one coefficient to derive its zero".to_owned(),
                ))
            }
        };

        Ok(Polynomial::from_parts(zero, coefficients))
    }

    fn from_parts(zero: R, mut coefficients: Vec<R>) -> Polynomial<R> {
        if coefficients.is_empty() {
            coefficients.push(zero.clone());
        }

        let mut p = Polynomial {
            coefficients,
            degree: None,
            zero,
        };
        p.rescan();
        p
    }

    /// Constructs the constant polynomial `c`, inheriting the zero from `self`.
    pub fn constant(&self, c: R) -> Polynomial<R> {
        Polynomial::from_parts(self.zero.clone(), vec![c])
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.coefficients.len()
    }

    /// The degree of the polynomial, or `None` when it is zero.
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        self.degree
    }

    /// The coefficients up to and including the degree.
    pub fn coefficients(&self) -> &[R] {
        match self.degree {
            Some(d) => &self.coefficients[..=d],
            None => &[],
        }
    }

    pub fn leading_coefficient(&self) -> &R {
        match self.degree {
            Some(d) => &self.coefficients[d],
            None => &self.zero,
        }
    }

    pub fn is_constant(&self) -> bool {
        self.degree.unwrap_or(0) == 0
    }

    /// Get the coefficient of `x^index`.
    ///
    /// Above the degree but within the capacity the ring zero is returned.
    /// Beyond the capacity, an [ArithmeticError::IndexOutOfBounds] is raised.
    pub fn get(&self, index: usize) -> Result<&R> {
        match self.degree {
            Some(d) if index <= d => Ok(&self.coefficients[index]),
            _ if index < self.capacity() => Ok(&self.zero),
            _ => Err(ArithmeticError::IndexOutOfBounds {
                index,
                capacity: self.capacity(),
            }),
        }
    }

    /// Get the coefficient of `x^index`, which is zero for any index above the degree.
    #[inline]
    fn coefficient(&self, index: usize) -> &R {
        match self.degree {
            Some(d) if index <= d => &self.coefficients[index],
            _ => &self.zero,
        }
    }

    /// Set the coefficient of `x^index`. The storage does not grow, so the index
    /// must be smaller than the capacity.
    pub fn set(&mut self, index: usize, value: R) -> Result<()> {
        if index >= self.capacity() {
            return Err(ArithmeticError::unsupported(
                "set",
                format!(
                    "coefficient {} of a polynomial with capacity {}",
                    index,
                    self.capacity()
                ),
            ));
        }

        self.coefficients[index] = value;

        // below the cached degree, the leading coefficient is untouched
        match self.degree {
            Some(d) if index < d => {}
            _ => self.rescan(),
        }

        Ok(())
    }

    /// Set the coefficient of `x^index` from an optional value, where `None`
    /// is rejected as an illegal argument.
    pub fn set_checked(&mut self, index: usize, value: Option<R>) -> Result<()> {
        match value {
            Some(v) => self.set(index, v),
            None => Err(ArithmeticError::IllegalArgument(format!(
                "missing value for coefficient {}",
                index
            ))),
        }
    }

    /// Find the highest non-zero coefficient, starting from the top of the storage.
    fn rescan(&mut self) {
        self.degree = self.coefficients.iter().rposition(|c| !c.is_zero());
        trace!("Rescanned polynomial degree: {:?}", self.degree);
    }

    /// Evaluate the polynomial at `x` using Horner's scheme.
    pub fn evaluate(&self, x: &R) -> Result<R> {
        let Some(d) = self.degree else {
            return Ok(self.zero.clone());
        };

        let mut res = self.coefficients[d].clone();
        for c in self.coefficients[..d].iter().rev() {
            res = res.multiply(x)?.add(c)?;
        }

        Ok(res)
    }

    /// Multiply every coefficient by `alpha`.
    pub fn scale_coefficients(&self, alpha: &R) -> Result<Polynomial<R>> {
        let coefficients = self
            .coefficients()
            .iter()
            .map(|c| alpha.multiply(c))
            .collect::<Result<Vec<_>>>()?;
        Ok(self.resized(coefficients, self.capacity()))
    }

    /// Create a polynomial with the zero of `self` and at least the given capacity.
    fn resized(&self, mut coefficients: Vec<R>, capacity: usize) -> Polynomial<R> {
        if coefficients.len() < capacity {
            coefficients.resize(capacity, self.zero.clone());
        }
        Polynomial::from_parts(self.zero.clone(), coefficients)
    }

    fn combine(&self, other: &Self, op: impl Fn(&R, &R) -> Result<R>) -> Result<Polynomial<R>> {
        let len = self.degree.max(other.degree).map_or(0, |d| d + 1);

        let coefficients = (0..len)
            .map(|i| op(self.coefficient(i), other.coefficient(i)))
            .collect::<Result<Vec<_>>>()?;

        Ok(self.resized(coefficients, self.capacity().max(other.capacity())))
    }
}

impl<R: Arithmetic> PartialEq for Polynomial<R> {
    fn eq(&self, other: &Self) -> bool {
        self.coefficients() == other.coefficients()
    }
}

impl<R: Arithmetic + Eq> Eq for Polynomial<R> {}

impl<R: Arithmetic + Hash> Hash for Polynomial<R> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coefficients().hash(state);
    }
}

impl<R: Arithmetic + Display> Display for Polynomial<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.degree.is_none() {
            return write!(f, "0");
        }

        let mut first = true;
        for (e, c) in self.coefficients().iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            if first {
                first = false;
            } else {
                write!(f, "+")?;
            }

            match e {
                0 => write!(f, "{}", c)?,
                1 => write!(f, "{}*x", c)?,
                _ => write!(f, "{}*x^{}", c, e)?,
            }
        }
        Ok(())
    }
}

impl<R: Arithmetic> Arithmetic for Polynomial<R> {
    fn zero(&self) -> Self {
        Polynomial::new(self.zero.clone(), 1)
    }

    fn one(&self) -> Result<Self> {
        Ok(self.constant(self.zero.one()?))
    }

    fn add(&self, other: &Self) -> Result<Self> {
        self.combine(other, |a, b| a.add(b))
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        self.combine(other, |a, b| a.subtract(b))
    }

    fn minus(&self) -> Self {
        let coefficients = self.coefficients.iter().map(|c| c.minus()).collect();
        Polynomial {
            coefficients,
            degree: self.degree,
            zero: self.zero.clone(),
        }
    }

    /// The product by convolution of the coefficients.
    fn multiply(&self, other: &Self) -> Result<Self> {
        let capacity = self.capacity().max(other.capacity());
        let (Some(n), Some(m)) = (self.degree, other.degree) else {
            return Ok(Polynomial::new(self.zero.clone(), capacity));
        };

        let mut coefficients = vec![self.zero.clone(); n + m + 1];
        for (i, a) in self.coefficients().iter().enumerate() {
            if a.is_zero() {
                continue;
            }

            for (j, b) in other.coefficients().iter().enumerate() {
                coefficients[i + j] = coefficients[i + j].add(&a.multiply(b)?)?;
            }
        }

        Ok(self.resized(coefficients, capacity))
    }

    /// Only non-zero constants have an inverse.
    fn inverse(&self) -> Result<Self> {
        match self.degree {
            None => Err(ArithmeticError::DivisionByZero),
            Some(0) => Ok(self.constant(self.coefficients[0].inverse()?)),
            Some(_) => Err(ArithmeticError::unsupported(
                "inverse",
                format!("{} of positive degree", self.type_name()),
            )),
        }
    }

    /// The largest norm of the coefficients.
    fn norm(&self) -> f64 {
        self.coefficients()
            .iter()
            .map(|c| c.norm())
            .fold(0., f64::max)
    }

    fn is_zero(&self) -> bool {
        self.degree.is_none()
    }

    fn is_one(&self) -> bool {
        self.degree == Some(0) && self.coefficients[0].is_one()
    }

    fn type_name(&self) -> String {
        format!("polynomial over {}", self.zero.type_name())
    }

    fn integer_exponent(&self) -> Option<i64> {
        if self.is_constant() {
            self.coefficient(0).integer_exponent()
        } else {
            None
        }
    }
}

impl<R: Arithmetic> Euclidean for Polynomial<R> {
    type Degree = usize;

    fn degree(&self) -> Option<usize> {
        self.degree
    }

    /// Long division by the leading coefficient of `divisor`, which must be invertible.
    #[instrument(level = "trace", skip_all, fields(dividend = ?self.degree, divisor = ?divisor.degree))]
    fn quot_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        let Some(m) = divisor.degree else {
            return Err(ArithmeticError::DivisionByZero);
        };

        let lead_inv = divisor.coefficients[m].inverse()?;

        let n = match self.degree {
            Some(n) if n >= m => n,
            _ => return Ok((self.zero(), self.clone())),
        };

        let mut quotient = vec![self.zero.clone(); n - m + 1];
        let mut rem = self.coefficients().to_vec();

        for k in (0..=n - m).rev() {
            let c = rem[k + m].multiply(&lead_inv)?;

            if !c.is_zero() {
                for (j, d) in divisor.coefficients()[..m].iter().enumerate() {
                    rem[k + j] = rem[k + j].subtract(&c.multiply(d)?)?;
                }
            }

            // the leading term cancels exactly, even when rounding would leave a residue
            rem[k + m] = self.zero.clone();
            quotient[k] = c;
        }

        rem.truncate(m);
        trace!("Quotient of degree {} computed", n - m);

        Ok((self.resized(quotient, 1), self.resized(rem, 1)))
    }
}
