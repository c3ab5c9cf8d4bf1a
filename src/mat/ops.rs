use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{DivideByZeroError, SingularMatrixError};

use super::Matrix2x2;

impl Matrix2x2 {
    /// Standard 2x2 matrix product
    pub fn matmul(&self, rhs: &Matrix2x2) -> Matrix2x2 {
        let [a, b, c, d] = self.0;
        let [e, f, g, h] = rhs.0;
        Matrix2x2::new(
            a * e + b * g,
            a * f + b * h,
            c * e + d * g,
            c * f + d * h,
        )
    }

    /// Scale every element
    pub fn scale(&self, scalar: f64) -> Matrix2x2 {
        Matrix2x2(self.0.map(|v| v * scalar))
    }

    /// `self * rhs⁻¹`. Fails when `rhs` is singular; `self` is left untouched.
    pub fn try_div(&self, rhs: &Matrix2x2) -> Result<Matrix2x2, SingularMatrixError> {
        Ok(self.matmul(&rhs.inverse()?))
    }

    /// `self * (1/scalar)`. Fails when `scalar` is exactly zero.
    pub fn try_div_scalar(&self, scalar: f64) -> Result<Matrix2x2, DivideByZeroError> {
        if scalar == 0.0 {
            return Err(DivideByZeroError);
        }
        Ok(self.scale(scalar.recip()))
    }

    /// A scalar divided by a matrix: `scalar * rhs⁻¹`.
    pub fn try_scalar_div(scalar: f64, rhs: &Matrix2x2) -> Result<Matrix2x2, SingularMatrixError> {
        Ok(rhs.inverse()?.scale(scalar))
    }
}

impl Add<Matrix2x2> for Matrix2x2 {
    type Output = Matrix2x2;

    fn add(mut self, rhs: Matrix2x2) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add<&Matrix2x2> for &Matrix2x2 {
    type Output = Matrix2x2;

    fn add(self, rhs: &Matrix2x2) -> Self::Output {
        *self + *rhs
    }
}

impl AddAssign<Matrix2x2> for Matrix2x2 {
    fn add_assign(&mut self, rhs: Matrix2x2) {
        for i in 0..Self::LEN {
            self.0[i] += rhs.0[i];
        }
    }
}

impl Add<f64> for Matrix2x2 {
    type Output = Matrix2x2;

    fn add(mut self, rhs: f64) -> Self::Output {
        self += rhs;
        self
    }
}

impl Add<Matrix2x2> for f64 {
    type Output = Matrix2x2;

    fn add(self, rhs: Matrix2x2) -> Self::Output {
        rhs + self
    }
}

impl AddAssign<f64> for Matrix2x2 {
    fn add_assign(&mut self, rhs: f64) {
        for v in &mut self.0 {
            *v += rhs;
        }
    }
}

impl Sub<Matrix2x2> for Matrix2x2 {
    type Output = Matrix2x2;

    fn sub(mut self, rhs: Matrix2x2) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Sub<&Matrix2x2> for &Matrix2x2 {
    type Output = Matrix2x2;

    fn sub(self, rhs: &Matrix2x2) -> Self::Output {
        *self - *rhs
    }
}

impl SubAssign<Matrix2x2> for Matrix2x2 {
    fn sub_assign(&mut self, rhs: Matrix2x2) {
        for i in 0..Self::LEN {
            self.0[i] -= rhs.0[i];
        }
    }
}

impl Sub<f64> for Matrix2x2 {
    type Output = Matrix2x2;

    fn sub(mut self, rhs: f64) -> Self::Output {
        self -= rhs;
        self
    }
}

/// `x - M` is elementwise, `-(M - x)`
impl Sub<Matrix2x2> for f64 {
    type Output = Matrix2x2;

    fn sub(self, rhs: Matrix2x2) -> Self::Output {
        -(rhs - self)
    }
}

impl SubAssign<f64> for Matrix2x2 {
    fn sub_assign(&mut self, rhs: f64) {
        for v in &mut self.0 {
            *v -= rhs;
        }
    }
}

impl Mul<Matrix2x2> for Matrix2x2 {
    type Output = Matrix2x2;

    fn mul(self, rhs: Matrix2x2) -> Self::Output {
        self.matmul(&rhs)
    }
}

impl Mul<&Matrix2x2> for &Matrix2x2 {
    type Output = Matrix2x2;

    fn mul(self, rhs: &Matrix2x2) -> Self::Output {
        self.matmul(rhs)
    }
}

impl MulAssign<Matrix2x2> for Matrix2x2 {
    fn mul_assign(&mut self, rhs: Matrix2x2) {
        *self = self.matmul(&rhs);
    }
}

impl Mul<f64> for Matrix2x2 {
    type Output = Matrix2x2;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Matrix2x2> for f64 {
    type Output = Matrix2x2;

    fn mul(self, rhs: Matrix2x2) -> Self::Output {
        rhs.scale(self)
    }
}

impl MulAssign<f64> for Matrix2x2 {
    fn mul_assign(&mut self, rhs: f64) {
        for v in &mut self.0 {
            *v *= rhs;
        }
    }
}

impl Neg for Matrix2x2 {
    type Output = Matrix2x2;

    fn neg(self) -> Self::Output {
        Matrix2x2(self.0.map(|v| -v))
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::Matrix2x2;
    use crate::error::{DivideByZeroError, SingularMatrixError};

    fn random_matrix(rng: &mut impl Rng) -> Matrix2x2 {
        Matrix2x2::new(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        )
    }

    #[test]
    fn add_matrix() {
        let m = Matrix2x2::new(1., 2., 3., 4.);
        let n = Matrix2x2::new(10., 20., 30., 40.);
        assert_eq!(m + n, Matrix2x2::new(11., 22., 33., 44.));
        assert_eq!(&m + &n, m + n);
    }

    #[test]
    fn sub_matrix() {
        let m = Matrix2x2::new(1., 2., 3., 4.);
        let n = Matrix2x2::new(4., 3., 2., 1.);
        assert_eq!(m - n, Matrix2x2::new(-3., -1., 1., 3.));
        assert_eq!(&m - &n, m - n);
    }

    #[test]
    fn scalar_add_sub() {
        let m = Matrix2x2::new(1., 2., 3., 4.);
        assert_eq!(m + 1., Matrix2x2::new(2., 3., 4., 5.));
        assert_eq!(1. + m, m + 1.);
        assert_eq!(m - 1., Matrix2x2::new(0., 1., 2., 3.));
        assert_eq!(3. - m, Matrix2x2::new(2., 1., 0., -1.));
    }

    #[test]
    fn matrix_product() {
        let m = Matrix2x2::new(1., 2., 3., 4.);
        let n = Matrix2x2::new(5., 6., 7., 8.);
        assert_eq!(m * n, Matrix2x2::new(19., 22., 43., 50.));
        // not commutative
        assert_eq!(n * m, Matrix2x2::new(23., 34., 31., 46.));
        assert_eq!(&m * &n, m * n);

        assert_eq!(m * Matrix2x2::identity(), m);
        assert_eq!(Matrix2x2::identity() * m, m);
    }

    #[test]
    fn scalar_product() {
        let m = Matrix2x2::new(1., 2., 3., 4.);
        assert_eq!(m * 2., Matrix2x2::new(2., 4., 6., 8.));
        assert_eq!(2. * m, m * 2.);
        assert_eq!(m * 0., Matrix2x2::zero());
    }

    #[test]
    fn assign_ops() {
        let mut m = Matrix2x2::new(1., 2., 3., 4.);
        m += Matrix2x2::identity();
        assert_eq!(m, Matrix2x2::new(2., 2., 3., 5.));
        m -= Matrix2x2::identity();
        m *= 2.;
        assert_eq!(m, Matrix2x2::new(2., 4., 6., 8.));
        m *= Matrix2x2::identity();
        assert_eq!(m, Matrix2x2::new(2., 4., 6., 8.));

        // increment/decrement
        m += 1.;
        assert_eq!(m, Matrix2x2::new(3., 5., 7., 9.));
        let before = m;
        m -= 1.;
        assert_eq!(before, Matrix2x2::new(3., 5., 7., 9.));
        assert_eq!(m, Matrix2x2::new(2., 4., 6., 8.));
    }

    #[test]
    fn neg_negates_every_element() {
        let m = Matrix2x2::new(1., -2., 0., 4.);
        // -0.0 compares equal to 0.0, so negating the zero is harmless
        assert_eq!(-m, Matrix2x2::new(-1., 2., 0., -4.));
        assert_eq!(-(-m), m);
    }

    #[test]
    fn div_by_matrix() {
        let m = Matrix2x2::new(19., 22., 43., 50.);
        let n = Matrix2x2::new(5., 6., 7., 8.);
        // (M * N) / N == M
        assert_eq!(m.try_div(&n).unwrap(), Matrix2x2::new(1., 2., 3., 4.));

        let singular = Matrix2x2::new(1., 2., 2., 4.);
        assert_eq!(m.try_div(&singular), Err(SingularMatrixError));
    }

    #[test]
    fn div_by_scalar() {
        let m = Matrix2x2::new(2., 4., 6., 8.);
        assert_eq!(m.try_div_scalar(2.).unwrap(), Matrix2x2::new(1., 2., 3., 4.));

        assert_eq!(m.try_div_scalar(0.), Err(DivideByZeroError));
        // operand untouched by the failed division
        assert_eq!(m, Matrix2x2::new(2., 4., 6., 8.));
    }

    #[test]
    fn scalar_div_by_matrix() {
        let m = Matrix2x2::new(1., 2., 3., 4.);
        // 2 * M⁻¹
        assert_eq!(
            Matrix2x2::try_scalar_div(2., &m).unwrap(),
            Matrix2x2::new(-4., 2., 3., -1.)
        );
        assert_eq!(
            Matrix2x2::try_scalar_div(2., &Matrix2x2::zero()),
            Err(SingularMatrixError)
        );
    }

    #[test]
    fn add_sub_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(0x2b99);
        for _ in 0..100 {
            let m = random_matrix(&mut rng);
            let n = random_matrix(&mut rng);
            assert_eq!((m + n) - n, m);
            assert_eq!(m, m);
            assert!(m.is_similar(&m));
        }
    }

    #[test]
    fn inverse_round_trip_random() {
        let mut rng = StdRng::seed_from_u64(0x517e);
        let mut checked = 0;
        while checked < 100 {
            let m = random_matrix(&mut rng);
            // stay away from near-singular matrices; the epsilon comparison
            // cannot absorb their rounding error
            if m.determinant().abs() < 1e-2 {
                continue;
            }
            let inv = m.inverse().unwrap();
            assert_eq!(m * inv, Matrix2x2::identity());
            checked += 1;
        }
    }

    #[test]
    fn transpose_involution_random() {
        let mut rng = StdRng::seed_from_u64(0x7a3d);
        for _ in 0..100 {
            let m = random_matrix(&mut rng);
            assert_eq!(m.transpose().transpose(), m);
        }
    }
}
