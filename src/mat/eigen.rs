use crate::error::InvalidSelectorError;

use super::Matrix2x2;

/// A root of the characteristic equation `λ² - trace·λ + determinant = 0`.
///
/// A nonnegative discriminant yields [`Real`](Eigenvalue::Real) roots; a
/// negative one yields a [`Complex`](Eigenvalue::Complex) conjugate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Eigenvalue {
    /// A real root
    Real(f64),
    /// One of a complex-conjugate pair of roots
    Complex { re: f64, im: f64 },
}

impl Eigenvalue {
    /// Real part
    #[inline]
    pub const fn re(&self) -> f64 {
        match *self {
            Eigenvalue::Real(re) => re,
            Eigenvalue::Complex { re, .. } => re,
        }
    }

    /// Imaginary part (zero for real roots)
    #[inline]
    pub const fn im(&self) -> f64 {
        match *self {
            Eigenvalue::Real(_) => 0.0,
            Eigenvalue::Complex { im, .. } => im,
        }
    }

    /// Whether this root is real
    #[inline]
    pub const fn is_real(&self) -> bool {
        matches!(self, Eigenvalue::Real(_))
    }
}

impl Matrix2x2 {
    /// The eigenvalue selected by `1` (the `+` root) or `2` (the `-` root):
    /// `λ = (trace ± √(trace² - 4·determinant)) / 2`.
    ///
    /// When the discriminant is negative the roots are the complex-conjugate
    /// pair `trace/2 ± i·√(-Δ)/2`; selector 2 carries the negated imaginary
    /// part. Any other selector is rejected up front.
    pub fn eigenvalue(&self, selector: u32) -> Result<Eigenvalue, InvalidSelectorError> {
        let sign = match selector {
            1 => 1.0,
            2 => -1.0,
            _ => return Err(InvalidSelectorError { selector }),
        };
        Ok(self.characteristic_root(sign))
    }

    /// Both eigenvalues, `+` root first.
    pub fn eigenvalues(&self) -> (Eigenvalue, Eigenvalue) {
        (self.characteristic_root(1.0), self.characteristic_root(-1.0))
    }

    fn characteristic_root(&self, sign: f64) -> Eigenvalue {
        let tr = self.trace();
        let delta = tr * tr - 4.0 * self.determinant();
        if delta >= 0.0 {
            Eigenvalue::Real((tr + sign * delta.sqrt()) / 2.0)
        } else {
            Eigenvalue::Complex {
                re: tr / 2.0,
                im: sign * (-delta).sqrt() / 2.0,
            }
        }
    }
}
