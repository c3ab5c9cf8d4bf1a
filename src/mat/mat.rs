use float_cmp::{ApproxEq, F64Margin};

use crate::error::SingularMatrixError;

/// A 2x2 matrix of `f64`, stored in row-major order:
///
/// ```text
/// | a  b |      indices:  | 0  1 |
/// | c  d |                | 2  3 |
/// ```
///
/// Copies freely; all arithmetic producing a new matrix leaves its operands
/// untouched. Equality via `==` is tolerant to [`EPSILON`](Self::EPSILON),
/// while [`is_symmetric`](Self::is_symmetric) and
/// [`is_similar`](Self::is_similar) compare exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matrix2x2(pub(crate) [f64; 4]);

impl Matrix2x2 {
    /// Absolute per-element tolerance used by `==`.
    pub const EPSILON: f64 = 1e-6;

    /// Number of stored elements
    pub const LEN: usize = 4;

    /// Create a matrix from its four elements, row-major.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self([a, b, c, d])
    }

    /// Matrix full of zeroes
    #[inline]
    pub const fn zero() -> Self {
        Self([0.0; 4])
    }

    /// Identity matrix
    #[inline]
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    /// Top-left element
    #[inline(always)]
    pub const fn a(&self) -> f64 {
        self.0[0]
    }

    /// Top-right element
    #[inline(always)]
    pub const fn b(&self) -> f64 {
        self.0[1]
    }

    /// Bottom-left element
    #[inline(always)]
    pub const fn c(&self) -> f64 {
        self.0[2]
    }

    /// Bottom-right element
    #[inline(always)]
    pub const fn d(&self) -> f64 {
        self.0[3]
    }

    /// The elements in row-major order
    #[inline]
    pub const fn to_array(self) -> [f64; 4] {
        self.0
    }

    /// Determinant `ad - bc`
    pub fn determinant(&self) -> f64 {
        self.a() * self.d() - self.b() * self.c()
    }

    /// Sum of the diagonal, `a + d`
    pub fn trace(&self) -> f64 {
        self.a() + self.d()
    }

    /// Whether `b == c`. Exact comparison, no tolerance.
    pub fn is_symmetric(&self) -> bool {
        self.b() == self.c()
    }

    /// Whether `self` and `other` share determinant and trace.
    ///
    /// Exact comparison, like [`is_symmetric`](Self::is_symmetric); the
    /// epsilon tolerance applies to `==` only.
    pub fn is_similar(&self, other: &Matrix2x2) -> bool {
        self.determinant() == other.determinant() && self.trace() == other.trace()
    }

    /// Transpose; swaps the off-diagonal elements.
    pub fn transpose(&self) -> Matrix2x2 {
        let [a, b, c, d] = self.0;
        Matrix2x2::new(a, c, b, d)
    }

    /// Inverse, `(1/(ad - bc)) * (d, -b, -c, a)`.
    ///
    /// The determinant test is exact; a singular matrix is an error rather
    /// than a `inf`/`NaN`-filled result.
    pub fn inverse(&self) -> Result<Matrix2x2, SingularMatrixError> {
        let det = self.determinant();
        if det == 0.0 {
            return Err(SingularMatrixError);
        }
        let [a, b, c, d] = self.0;
        Ok(Matrix2x2::new(d, -b, -c, a).scale(det.recip()))
    }
}

/// Elementwise comparison within [`Matrix2x2::EPSILON`] (absolute).
impl PartialEq for Matrix2x2 {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(
            *other,
            F64Margin {
                epsilon: Self::EPSILON,
                ulps: 0,
            },
        )
    }
}

impl ApproxEq for Matrix2x2 {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin: Self::Margin = margin.into();
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(&lhs, &rhs)| lhs.approx_eq(rhs, margin))
    }
}
