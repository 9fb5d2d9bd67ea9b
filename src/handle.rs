//! The uniform handle contract: a prepared transform bundled with its own
//! input and output buffers.
//!
//! This is the surface the surrounding harnesses drive: prepare once, poke
//! values into the input, run in either direction any number of times, read
//! the output back. `dispose` exists for symmetry with bindings that manage
//! memory outside the host; in pure Rust it is an ordinary drop.

use num_traits::{Float, FloatConst};

use crate::buffer::ComplexArray;
use crate::error::FftError;
use crate::planner::{Algorithm, Direction, Planner};

/// A prepared FFT with internally managed input and output buffers.
pub struct FftHandle<T> {
    planner: Planner<T>,
    input: ComplexArray<T>,
    output: ComplexArray<T>,
}

impl<T: Float + FloatConst> FftHandle<T> {
    /// Prepare a handle of size `n` with the default strategy. Tables are
    /// built once, here.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::InvalidSize`] unless `n` is a power of two >= 1.
    pub fn prepare(n: usize) -> Result<Self, FftError> {
        Self::prepare_with(n, Algorithm::default())
    }

    /// Prepare a handle of size `n` with an explicit strategy.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::InvalidSize`] unless `n` is a power of two >= 1.
    pub fn prepare_with(n: usize, algorithm: Algorithm) -> Result<Self, FftError> {
        Ok(Self {
            planner: Planner::new(n, algorithm)?,
            input: ComplexArray::zeroed(n),
            output: ComplexArray::zeroed(n),
        })
    }

    /// The prepared transform size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.planner.size()
    }

    /// Write one complex value into the input buffer.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    pub fn set_input(&mut self, index: usize, re: T, im: T) {
        self.input.set(index, re, im);
    }

    /// Read back one complex value from the input buffer.
    ///
    /// `run` never mutates the input, so this returns whatever was last
    /// written via [`Self::set_input`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[must_use]
    pub fn get_input(&self, index: usize) -> (T, T) {
        self.input.get(index)
    }

    /// Execute one transform over the handle's buffers.
    ///
    /// The inverse direction is unnormalized, as with [`Planner::run`].
    ///
    /// # Errors
    ///
    /// The internal buffers always match the prepared size, so this only
    /// forwards errors from the planner and cannot fail in practice.
    pub fn run(&mut self, direction: Direction) -> Result<(), FftError> {
        self.planner.run(&self.input, &mut self.output, direction)
    }

    /// Read one complex value from the output buffer.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.size()`.
    #[must_use]
    pub fn get_output(&self, index: usize) -> (T, T) {
        self.output.get(index)
    }

    /// Release the handle. Buffers live in ordinary host memory, so this is
    /// just an explicit drop.
    pub fn dispose(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::assert_float_closeness;

    #[test]
    fn impulse_through_the_handle() {
        let mut handle = FftHandle::<f64>::prepare(4).unwrap();
        handle.set_input(0, 1.0, 0.0);
        handle.run(Direction::Forward).unwrap();

        for k in 0..4 {
            let (re, im) = handle.get_output(k);
            assert_float_closeness(re, 1.0, 1e-12);
            assert_float_closeness(im, 0.0, 1e-12);
        }
        // The input is untouched.
        assert_eq!(handle.get_input(0), (1.0, 0.0));
        assert_eq!(handle.get_input(1), (0.0, 0.0));

        handle.dispose();
    }

    #[test]
    fn repeated_runs_are_deterministic() {
        let mut handle = FftHandle::<f64>::prepare_with(8, Algorithm::Radix2).unwrap();
        for k in 0..8 {
            handle.set_input(k, k as f64, -(k as f64));
        }

        handle.run(Direction::Forward).unwrap();
        let first: Vec<(f64, f64)> = (0..8).map(|k| handle.get_output(k)).collect();
        handle.run(Direction::Forward).unwrap();
        let second: Vec<(f64, f64)> = (0..8).map(|k| handle.get_output(k)).collect();

        assert_eq!(first, second);
    }
}
