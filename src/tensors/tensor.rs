use std::{
    fmt::{Display, Formatter},
    hash::{Hash, Hasher},
};

use smallvec::SmallVec;

use crate::{
    domains::Arithmetic,
    error::{ArithmeticError, Result},
};

use super::ProductArithmetic;

/// A dense tensor of arbitrary rank, with its components stored in row-major order.
#[derive(Clone, Debug)]
pub struct Tensor<E: Arithmetic> {
    dims: SmallVec<[usize; 4]>,
    data: Vec<E>,
}

impl<E: Arithmetic> Tensor<E> {
    pub fn new(dims: &[usize], data: Vec<E>) -> Result<Tensor<E>> {
        let size: usize = dims.iter().product();
        if size != data.len() {
            return Err(ArithmeticError::IllegalArgument(format!(
                "Data length does not match tensor dimensions: {} vs {:?}",
                data.len(),
                dims
            )));
        }

        Ok(Tensor {
            dims: dims.into(),
            data,
        })
    }

    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    fn flat_index(&self, index: &[usize]) -> Result<usize> {
        if index.len() != self.rank() {
            return Err(ArithmeticError::IllegalArgument(format!(
                "expected {} indices, got {}",
                self.rank(),
                index.len()
            )));
        }

        let mut flat = 0;
        for (&i, &d) in index.iter().zip(&self.dims) {
            if i >= d {
                return Err(ArithmeticError::IndexOutOfBounds {
                    index: i,
                    capacity: d,
                });
            }
            flat = flat * d + i;
        }
        Ok(flat)
    }

    /// Get the component at the given multi-index.
    pub fn get(&self, index: &[usize]) -> Result<&E> {
        let i = self.flat_index(index)?;
        Ok(&self.data[i])
    }

    pub fn set(&mut self, index: &[usize], value: E) -> Result<()> {
        let i = self.flat_index(index)?;
        self.data[i] = value;
        Ok(())
    }
}

impl<E: Arithmetic> ProductArithmetic for Tensor<E> {
    type Element = E;
    type Shape = SmallVec<[usize; 4]>;

    fn shape(&self) -> SmallVec<[usize; 4]> {
        self.dims.clone()
    }

    fn components(&self) -> impl Iterator<Item = &E> {
        self.data.iter()
    }

    fn components_mut(&mut self) -> impl Iterator<Item = &mut E> {
        self.data.iter_mut()
    }

    fn instantiate(shape: &SmallVec<[usize; 4]>, fill: &E) -> Self {
        Tensor {
            dims: shape.clone(),
            data: vec![fill.clone(); shape.iter().product()],
        }
    }
}

impl<E: Arithmetic> PartialEq for Tensor<E> {
    fn eq(&self, other: &Self) -> bool {
        self.product_eq(other)
    }
}

impl<E: Arithmetic + Eq> Eq for Tensor<E> {}

impl<E: Arithmetic + Hash> Hash for Tensor<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.dims.hash(state);
        self.product_hash().hash(state);
    }
}

impl<E: Arithmetic + Display> Display for Tensor<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "tensor{:?}[", self.dims.as_slice())?;
        for (i, e) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", e)?;
        }
        f.write_str("]")
    }
}

impl<E: Arithmetic> Arithmetic for Tensor<E> {
    fn zero(&self) -> Self {
        self.zero_elementwise()
    }

    fn one(&self) -> Result<Self> {
        Err(ArithmeticError::unsupported("one", self.type_name()))
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

    fn multiply(&self, other: &Self) -> Result<Self> {
        self.multiply_elementwise(other)
    }

    fn norm(&self) -> f64 {
        self.product_norm()
    }

    fn is_zero(&self) -> bool {
        self.product_is_zero()
    }

    fn type_name(&self) -> String {
        format!("tensor of shape {:?}", self.dims.as_slice())
    }
}

#[cfg(test)]
mod test {
    use crate::{
        domains::{float::F64, Arithmetic},
        error::ErrorKind,
        tensors::tensor::Tensor,
    };

    fn t(dims: &[usize], c: &[f64]) -> Tensor<F64> {
        Tensor::new(dims, c.iter().map(|x| F64::from(*x)).collect()).unwrap()
    }

    #[test]
    fn indexing() {
        let mut a = t(&[2, 2, 2], &[0., 1., 2., 3., 4., 5., 6., 7.]);
        assert_eq!(a.rank(), 3);
        assert_eq!(a.get(&[1, 0, 1]).unwrap(), &F64::from(5.));
        assert_eq!(
            a.get(&[0, 2, 0]).unwrap_err().kind(),
            ErrorKind::BoundsViolation
        );
        assert_eq!(a.get(&[0, 0]).unwrap_err().kind(), ErrorKind::IllegalArgument);

        a.set(&[0, 1, 1], F64::from(-1.)).unwrap();
        assert_eq!(a.get(&[0, 1, 1]).unwrap(), &F64::from(-1.));

        assert!(Tensor::new(&[2, 3], vec![F64::from(1.)]).is_err());
    }

    #[test]
    fn elementwise() {
        let a = t(&[2, 2], &[1., 2., 3., 4.]);
        let b = t(&[2, 2], &[0.5, 0.5, 0.5, 0.5]);
        let c = t(&[4], &[1., 2., 3., 4.]);

        let s = a.add(&b).unwrap().subtract(&b).unwrap();
        assert!(s.equals_within(&a, 1e-12).unwrap());
        assert_eq!(
            a.multiply(&b).unwrap(),
            t(&[2, 2], &[0.5, 1., 1.5, 2.])
        );
        assert_eq!(a.add(&c).unwrap_err().kind(), ErrorKind::IllegalArgument);
        assert_ne!(a, c);
    }
}
