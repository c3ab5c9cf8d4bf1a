use std::ops::{Index, IndexMut};

use crate::error::OutOfBoundsError;

use super::Matrix2x2;

#[inline]
fn check(index: usize) -> Result<(), OutOfBoundsError> {
    if index < Matrix2x2::LEN {
        Ok(())
    } else {
        Err(OutOfBoundsError { index })
    }
}

impl Matrix2x2 {
    /// Element at `index` (row-major), if in bounds
    #[inline]
    pub fn get(&self, index: usize) -> Result<f64, OutOfBoundsError> {
        check(index)?;
        Ok(self.0[index])
    }

    /// Mutable reference to the element at `index`, if in bounds
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut f64, OutOfBoundsError> {
        check(index)?;
        Ok(&mut self.0[index])
    }

    /// Overwrite the element at `index`, if in bounds
    #[inline]
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), OutOfBoundsError> {
        *self.get_mut(index)? = value;
        Ok(())
    }
}

impl Index<usize> for Matrix2x2 {
    type Output = f64;

    /// Panics on out-of-bounds access; [`get`](Matrix2x2::get) is the checked form.
    fn index(&self, index: usize) -> &Self::Output {
        check(index).unwrap();

        &self.0[index]
    }
}

impl IndexMut<usize> for Matrix2x2 {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).unwrap()
    }
}
