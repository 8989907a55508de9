use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
    ops::Index,
    slice::Chunks,
};

use tracing::debug;

use crate::{
    domains::Arithmetic,
    error::{ArithmeticError, Result},
};

use super::ProductArithmetic;

/// A matrix with its entries stored in row-major order.
#[derive(Clone, Debug)]
pub struct Matrix<E: Arithmetic> {
    pub(crate) data: Vec<E>,
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
}

impl<E: Arithmetic> Matrix<E> {
    /// Convert a linear representation of a matrix to a `Matrix`.
    pub fn from_linear(data: Vec<E>, nrows: usize, ncols: usize) -> Result<Matrix<E>> {
        if data.len() == nrows * ncols {
            Ok(Matrix { data, nrows, ncols })
        } else {
            Err(ArithmeticError::IllegalArgument(format!(
                "Data length does not match matrix dimensions: {} vs ({},{})",
                data.len(),
                nrows,
                ncols
            )))
        }
    }

    /// Create a new matrix from a 2-dimensional vector of entries.
    pub fn from_nested_vec(matrix: Vec<Vec<E>>) -> Result<Matrix<E>> {
        let nrows = matrix.len();
        let ncols = matrix.first().map(|r| r.len()).unwrap_or(0);

        let mut data = Vec::with_capacity(nrows * ncols);
        for row in matrix {
            if row.len() != ncols {
                return Err(ArithmeticError::IllegalArgument(
                    "Matrix is not rectangular".to_owned(),
                ));
            }

            data.extend(row);
        }

        Ok(Matrix { data, nrows, ncols })
    }

    /// Create a new square matrix with `nrows` rows and ones on the main diagonal and zeroes elsewhere,
    /// taking the zero and one from `element`.
    pub fn identity(nrows: usize, element: &E) -> Result<Matrix<E>> {
        let zero = element.zero();
        let one = element.one()?;
        Ok(Matrix {
            data: (0..nrows * nrows)
                .map(|i| {
                    if i % nrows == i / nrows {
                        one.clone()
                    } else {
                        zero.clone()
                    }
                })
                .collect(),
            nrows,
            ncols: nrows,
        })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> Chunks<'_, E> {
        self.data.chunks(self.ncols.max(1))
    }

    /// Transpose the matrix.
    pub fn transpose(&self) -> Matrix<E> {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.ncols {
            for i in 0..self.nrows {
                data.push(self[(i, j)].clone());
            }
        }

        Matrix {
            data,
            nrows: self.ncols,
            ncols: self.nrows,
        }
    }

    /// The matrix product `self * rhs`.
    pub fn mul_matrix(&self, rhs: &Matrix<E>) -> Result<Matrix<E>> {
        if self.ncols != rhs.nrows {
            return Err(ArithmeticError::shape_mismatch(
                (self.nrows, self.ncols),
                (rhs.nrows, rhs.ncols),
            ));
        }

        let Some(first) = self.data.first().or(rhs.data.first()) else {
            if self.nrows * rhs.ncols > 0 {
                return Err(ArithmeticError::IllegalArgument(format!(
                    "cannot derive the zero of a {}x{} product from empty factors",
                    self.nrows, rhs.ncols
                )));
            }
            return Ok(Matrix {
                data: vec![],
                nrows: self.nrows,
                ncols: rhs.ncols,
            });
        };
        let zero = first.zero();

        let mut data = Vec::with_capacity(self.nrows * rhs.ncols);
        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                let mut acc = zero.clone();
                for k in 0..self.ncols {
                    acc = acc.add(&self[(i, k)].multiply(&rhs[(k, j)])?)?;
                }
                data.push(acc);
            }
        }

        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: rhs.ncols,
        })
    }

    fn swap_rows(data: &mut [E], ncols: usize, r1: usize, r2: usize) {
        for c in 0..ncols {
            data.swap(r1 * ncols + c, r2 * ncols + c);
        }
    }

    fn not_square(&self, operation: &'static str) -> ArithmeticError {
        ArithmeticError::unsupported(operation, format!("the non-square {}", self.type_name()))
    }

    /// Compute the inverse of a square matrix using Gauss-Jordan elimination.
    /// If the matrix is not invertible, this function returns [ArithmeticError::Singular].
    pub fn inv(&self) -> Result<Matrix<E>> {
        if !self.is_square() {
            return Err(self.not_square("inverse"));
        }

        let n = self.nrows;
        let Some(first) = self.data.first() else {
            return Ok(self.clone());
        };

        let mut m = self.data.clone();
        let mut inv = Matrix::identity(n, first)?.data;

        for col in 0..n {
            let Some(pivot) = (col..n).find(|&r| !m[r * n + col].is_zero()) else {
                debug!("No pivot in column {}: matrix is singular", col);
                return Err(ArithmeticError::Singular);
            };

            if pivot != col {
                Self::swap_rows(&mut m, n, pivot, col);
                Self::swap_rows(&mut inv, n, pivot, col);
            }

            let p_inv = m[col * n + col].inverse()?;
            for c in 0..n {
                m[col * n + c] = p_inv.multiply(&m[col * n + c])?;
                inv[col * n + c] = p_inv.multiply(&inv[col * n + c])?;
            }

            for r in 0..n {
                if r == col || m[r * n + col].is_zero() {
                    continue;
                }

                let factor = m[r * n + col].clone();
                for c in 0..n {
                    m[r * n + c] = m[r * n + c].subtract(&factor.multiply(&m[col * n + c])?)?;
                    inv[r * n + c] = inv[r * n + c].subtract(&factor.multiply(&inv[col * n + c])?)?;
                }
            }
        }

        Ok(Matrix {
            data: inv,
            nrows: n,
            ncols: n,
        })
    }

    /// Compute the determinant of a square matrix by Gaussian elimination.
    pub fn det(&self) -> Result<E> {
        if !self.is_square() {
            return Err(self.not_square("determinant"));
        }

        let n = self.nrows;
        let Some(first) = self.data.first() else {
            return Err(ArithmeticError::IllegalArgument(
                "the determinant of an empty matrix has no ring to live in".to_owned(),
            ));
        };

        let mut m = self.data.clone();
        let mut det = first.one()?;

        for col in 0..n {
            let Some(pivot) = (col..n).find(|&r| !m[r * n + col].is_zero()) else {
                return Ok(first.zero());
            };

            if pivot != col {
                Self::swap_rows(&mut m, n, pivot, col);
                det = det.minus();
            }

            let p = m[col * n + col].clone();
            det = det.multiply(&p)?;
            let p_inv = p.inverse()?;

            for r in col + 1..n {
                if m[r * n + col].is_zero() {
                    continue;
                }

                let factor = m[r * n + col].multiply(&p_inv)?;
                for c in col..n {
                    m[r * n + c] = m[r * n + c].subtract(&factor.multiply(&m[col * n + c])?)?;
                }
            }
        }

        Ok(det)
    }
}

impl<E: Arithmetic> ProductArithmetic for Matrix<E> {
    type Element = E;
    type Shape = (usize, usize);

    fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    fn components(&self) -> impl Iterator<Item = &E> {
        self.data.iter()
    }

    fn components_mut(&mut self) -> impl Iterator<Item = &mut E> {
        self.data.iter_mut()
    }

    fn instantiate(&(nrows, ncols): &(usize, usize), fill: &E) -> Self {
        Matrix {
            data: vec![fill.clone(); nrows * ncols],
            nrows,
            ncols,
        }
    }
}

impl<E: Arithmetic> Index<(usize, usize)> for Matrix<E> {
    type Output = E;

    /// Get the entry at position `(row, col)`.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.ncols + col]
    }
}

impl<E: Arithmetic> PartialEq for Matrix<E> {
    fn eq(&self, other: &Self) -> bool {
        self.product_eq(other)
    }
}

impl<E: Arithmetic + Eq> Eq for Matrix<E> {}

impl<E: Arithmetic + Hash> Hash for Matrix<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.shape().hash(state);
        self.product_hash().hash(state);
    }
}

impl<E: Arithmetic + Display> Display for Matrix<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, row) in self.row_iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str("{")?;
            for (j, e) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}", e)?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}

impl<E: Arithmetic> Arithmetic for Matrix<E> {
    fn zero(&self) -> Self {
        self.zero_elementwise()
    }

    /// The identity matrix, which only exists for square matrices.
    fn one(&self) -> Result<Self> {
        if !self.is_square() {
            return Err(self.not_square("one"));
        }

        match self.data.first() {
            Some(e) => Matrix::identity(self.nrows, e),
            None => Ok(self.clone()),
        }
    }

    fn add(&self, other: &Self) -> Result<Self> {
        self.add_elementwise(other)
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        self.subtract_elementwise(other)
    }

    fn minus(&self) -> Self {
        self.minus_elementwise()
    }

    /// The matrix product. Use [ProductArithmetic::multiply_elementwise] for the
    /// componentwise product.
    fn multiply(&self, other: &Self) -> Result<Self> {
        self.mul_matrix(other)
    }

    fn inverse(&self) -> Result<Self> {
        self.inv()
    }

    fn norm(&self) -> f64 {
        self.product_norm()
    }

    fn is_zero(&self) -> bool {
        self.product_is_zero()
    }

    fn type_name(&self) -> String {
        format!("{}x{} matrix", self.nrows, self.ncols)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        domains::{fraction::Rational, integer::Integer, value::Value, Arithmetic},
        error::{ArithmeticError, ErrorKind},
        tensors::{matrix::Matrix, ProductArithmetic},
    };

    fn q(c: &[i64], nrows: usize, ncols: usize) -> Matrix<Rational> {
        Matrix::from_linear(
            c.iter().map(|x| Rational::try_from((*x, 1)).unwrap()).collect(),
            nrows,
            ncols,
        )
        .unwrap()
    }

    #[test]
    fn basics() {
        let a = Matrix::from_linear((1..=6).map(Integer::from).collect(), 2, 3).unwrap();

        assert_eq!(
            a.transpose().data,
            [1, 4, 2, 5, 3, 6].map(Integer::from).to_vec()
        );
        assert_eq!(a.minus().data, [-1, -2, -3, -4, -5, -6].map(Integer::from).to_vec());
        assert!(a.subtract(&a).unwrap().is_zero());

        let b = Matrix::from_nested_vec(vec![
            vec![Integer::from(7), Integer::from(8)],
            vec![Integer::from(9), Integer::from(10)],
            vec![Integer::from(11), Integer::from(12)],
        ])
        .unwrap();

        let c = a.multiply(&b).unwrap();
        assert_eq!(c.data, [58, 64, 139, 154].map(Integer::from).to_vec());
        assert_eq!(c[(0, 1)], Integer::from(64));
        assert_eq!(c.to_string(), "{{58,64},{139,154}}");

        let e = a.multiply_elementwise(&a).unwrap();
        assert_eq!(e.data, [1, 4, 9, 16, 25, 36].map(Integer::from).to_vec());

        assert_eq!(
            a.multiply(&a).unwrap_err(),
            ArithmeticError::shape_mismatch((2, 3), (2, 3))
        );
        assert_eq!(
            a.add(&b).unwrap_err(),
            ArithmeticError::shape_mismatch((2, 3), (3, 2))
        );
    }

    #[test]
    fn inverse() {
        let a = q(&[1, 2, 3, 4, 5, 16, 7, 8, 9], 3, 3);
        let inv = a.inverse().unwrap();
        assert_eq!(
            inv.data,
            vec![
                Rational::try_from((-83, 60)).unwrap(),
                Rational::try_from((1, 10)).unwrap(),
                Rational::try_from((17, 60)).unwrap(),
                Rational::try_from((19, 15)).unwrap(),
                Rational::try_from((-1, 5)).unwrap(),
                Rational::try_from((-1, 15)).unwrap(),
                Rational::try_from((-1, 20)).unwrap(),
                Rational::try_from((1, 10)).unwrap(),
                Rational::try_from((-1, 20)).unwrap(),
            ]
        );
        assert_eq!(a.multiply(&inv).unwrap(), a.one().unwrap());
        assert_eq!(a.det().unwrap(), Rational::try_from((60, 1)).unwrap());

        // requires a row swap
        let b = q(&[0, 1, 1, 0], 2, 2);
        assert_eq!(b.inverse().unwrap(), b);
        assert_eq!(b.det().unwrap(), Rational::try_from((-1, 1)).unwrap());
    }

    #[test]
    fn singular() {
        let a = q(&[1, 2, 3, 4, 5, 6, 7, 8, 9], 3, 3);
        assert_eq!(a.inverse().unwrap_err(), ArithmeticError::Singular);
        assert!(a.det().unwrap().is_zero());

        let r = q(&[1, 2, 3, 4, 5, 6], 2, 3);
        assert_eq!(
            r.inverse().unwrap_err().kind(),
            ErrorKind::UnsupportedOperation
        );
    }

    #[test]
    fn value_entries() {
        let a = Matrix::from_linear([2, 1, 1, 1].map(Value::from).to_vec(), 2, 2).unwrap();
        let inv = a.pow(-1).unwrap();
        assert_eq!(inv.data, [1, -1, -1, 2].map(Value::from).to_vec());
        assert_eq!(a.pow(2).unwrap().data, [5, 3, 3, 2].map(Value::from).to_vec());
    }

    #[test]
    fn empty_inner_dimension() {
        let a = Matrix::<Integer>::from_linear(vec![], 2, 0).unwrap();
        let b = Matrix::<Integer>::from_linear(vec![], 0, 3).unwrap();
        assert_eq!(a.multiply(&b).unwrap_err().kind(), ErrorKind::IllegalArgument);

        let c = Matrix::<Integer>::from_linear(vec![], 0, 2).unwrap();
        let d = Matrix::from_linear((1..=6).map(Integer::from).collect(), 2, 3).unwrap();
        let e = c.multiply(&d).unwrap();
        assert_eq!((e.nrows, e.ncols), (0, 3));
        assert!(e.data.is_empty());
    }
}
