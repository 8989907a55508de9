//! Errors raised by arithmetic operations.

use thiserror::Error;

/// The category of an [ArithmeticError].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The capability is not defined for this variant or shape.
    UnsupportedOperation,
    /// An absent or invalid input, including mismatched shapes.
    IllegalArgument,
    /// A coefficient index outside of the allocated storage.
    BoundsViolation,
    /// Division by the additive zero.
    ArithmeticFailure,
}

/// Errors that can occur when combining algebraic values.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("operation `{operation}` is not supported for {type_name}")]
    UnsupportedOperation {
        operation: &'static str,
        type_name: String,
    },
    #[error("illegal argument: {0}")]
    IllegalArgument(String),
    #[error("shape mismatch: {left} vs {right}")]
    ShapeMismatch { left: String, right: String },
    #[error("index {index} is out of bounds for storage of capacity {capacity}")]
    IndexOutOfBounds { index: usize, capacity: usize },
    #[error("division by zero")]
    DivisionByZero,
    #[error("the matrix is singular")]
    Singular,
}

impl ArithmeticError {
    pub fn unsupported(operation: &'static str, type_name: impl Into<String>) -> ArithmeticError {
        ArithmeticError::UnsupportedOperation {
            operation,
            type_name: type_name.into(),
        }
    }

    pub fn shape_mismatch(
        left: impl std::fmt::Debug,
        right: impl std::fmt::Debug,
    ) -> ArithmeticError {
        ArithmeticError::ShapeMismatch {
            left: format!("{:?}", left),
            right: format!("{:?}", right),
        }
    }

    /// Map the error onto the error taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArithmeticError::UnsupportedOperation { .. } => ErrorKind::UnsupportedOperation,
            ArithmeticError::IllegalArgument(_) | ArithmeticError::ShapeMismatch { .. } => {
                ErrorKind::IllegalArgument
            }
            ArithmeticError::IndexOutOfBounds { .. } => ErrorKind::BoundsViolation,
            ArithmeticError::DivisionByZero | ArithmeticError::Singular => {
                ErrorKind::ArithmeticFailure
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ArithmeticError>;

#[cfg(test)]
mod test {
    use super::{ArithmeticError, ErrorKind};

    #[test]
    fn kinds() {
        assert_eq!(
            ArithmeticError::shape_mismatch(2, 3).kind(),
            ErrorKind::IllegalArgument
        );
        assert_eq!(
            ArithmeticError::Singular.kind(),
            ErrorKind::ArithmeticFailure
        );
        assert_eq!(
            ArithmeticError::IndexOutOfBounds {
                index: 4,
                capacity: 3
            }
            .kind(),
            ErrorKind::BoundsViolation
        );
    }

    #[test]
    fn message_names_type() {
        let e = ArithmeticError::unsupported("inverse", "vector");
        assert_eq!(
            e.to_string(),
            "operation `inverse` is not supported for vector"
        );
    }
}
