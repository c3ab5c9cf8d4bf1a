//! A 2x2 matrix of `f64` with value semantics.
//!
//! [`Matrix2x2`] stores four elements row-major and carries the closed-form
//! 2x2 linear algebra: determinant, trace, transpose, inverse, and the
//! eigenvalues of the characteristic equation. Elementwise and
//! matrix-algebra arithmetic comes as operator impls where the operation
//! cannot fail; division goes through checked `try_*` methods instead, since
//! a singular divisor or zero scalar is a real error here, not a `NaN`.
//!
//! `==` compares elementwise within [`Matrix2x2::EPSILON`].

mod error;
mod mat;

pub use error::{
    DivideByZeroError, InvalidSelectorError, OutOfBoundsError, ParseMatrixError,
    SingularMatrixError,
};
pub use mat::{Eigenvalue, Matrix2x2};
