//! Split-representation complex buffers.
//!
//! Signals are stored as two same-length buffers of real and imaginary
//! components rather than as an interleaved array of complex structs. All
//! kernels in this crate operate on the split representation directly; see
//! [`crate::utils`] for conversions from interleaved `Complex` slices.

use num_traits::Float;

use crate::error::FftError;

/// A fixed-length sequence of complex numbers held as split real/imaginary
/// buffers.
///
/// The two buffers always have identical length, and the length is fixed at
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexArray<T> {
    re: Vec<T>,
    im: Vec<T>,
}

impl<T: Float> ComplexArray<T> {
    /// Allocate a buffer of `n` zero-valued complex numbers.
    #[must_use]
    pub fn zeroed(n: usize) -> Self {
        Self {
            re: vec![T::zero(); n],
            im: vec![T::zero(); n],
        }
    }

    /// Build a buffer from pre-existing real and imaginary component vectors.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::LengthMismatch`] if the vectors differ in length.
    pub fn from_parts(re: Vec<T>, im: Vec<T>) -> Result<Self, FftError> {
        if re.len() != im.len() {
            return Err(FftError::LengthMismatch {
                expected: re.len(),
                actual: im.len(),
            });
        }
        Ok(Self { re, im })
    }

    /// The number of complex elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.re.len()
    }

    /// Whether the buffer holds zero elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    /// Read the complex value at `index` as a `(re, im)` pair.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> (T, T) {
        (self.re[index], self.im[index])
    }

    /// Write the complex value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn set(&mut self, index: usize, re: T, im: T) {
        self.re[index] = re;
        self.im[index] = im;
    }

    /// The real components.
    #[must_use]
    pub fn re(&self) -> &[T] {
        &self.re
    }

    /// The imaginary components.
    #[must_use]
    pub fn im(&self) -> &[T] {
        &self.im
    }

    /// Overwrite this buffer with the contents of `src`.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::LengthMismatch`] if the lengths differ.
    pub fn copy_from(&mut self, src: &Self) -> Result<(), FftError> {
        if self.len() != src.len() {
            return Err(FftError::LengthMismatch {
                expected: self.len(),
                actual: src.len(),
            });
        }
        self.re.copy_from_slice(&src.re);
        self.im.copy_from_slice(&src.im);
        Ok(())
    }

    /// Mutable views of both component buffers at once.
    pub(crate) fn parts_mut(&mut self) -> (&mut [T], &mut [T]) {
        (&mut self.re, &mut self.im)
    }
}
