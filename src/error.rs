use std::num::ParseFloatError;

use thiserror::Error;

/// Element access outside the four stored elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of bounds for a 2x2 matrix (valid: 0..4)")]
pub struct OutOfBoundsError {
    /// The rejected index
    pub index: usize,
}

/// Inverse (or division by a matrix) attempted when `ad - bc == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("matrix is singular (ad - bc == 0)")]
pub struct SingularMatrixError;

/// Division by a scalar that is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("division by zero scalar")]
pub struct DivideByZeroError;

/// Eigenvalue selector outside `{1, 2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("eigenvalue selector must be 1 or 2 (got {selector})")]
pub struct InvalidSelectorError {
    /// The rejected selector
    pub selector: u32,
}

/// Error generated when reading a matrix from text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseMatrixError {
    /// The input ran out before four elements were read.
    #[error("expected 4 matrix elements, input ended after {found}")]
    UnexpectedEof {
        /// How many elements parsed successfully
        found: usize,
    },
    /// A token that is not a floating-point literal.
    #[error("invalid element literal {text:?}")]
    InvalidLiteral {
        text: String,
        #[source]
        source: ParseFloatError,
    },
    /// Input continued past the fourth element.
    #[error("unexpected trailing input after 4 matrix elements")]
    TrailingInput,
    #[error("read error")]
    Io(#[from] std::io::Error),
}
