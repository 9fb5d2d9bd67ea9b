//! The planner prepares a transform of a fixed size: it validates the size,
//! selects a kernel strategy, and pre-computes the quarter-wave twiddle table
//! and the bit-reversal permutation exactly once. The prepared value is
//! immutable and may execute any number of transforms in either direction.

use num_traits::{Float, FloatConst};

use crate::buffer::ComplexArray;
use crate::error::FftError;
use crate::fft;
use crate::permute::bit_reversal_table;
use crate::twiddles::QuarterWave;

/// Reverse is for running the Inverse Fast Fourier Transform (IFFT)
/// Forward is for running the regular FFT
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Twiddles carry the negative exponent (the usual DFT convention).
    Forward = 1,
    /// Twiddles carry the positive exponent. The result is unnormalized:
    /// running Forward then Reverse yields `n` times the original signal.
    Reverse = -1,
}

/// Kernel strategy selected when a planner is built.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// One radix-2 butterfly pass per stage. Simple and useful as a
    /// cross-check against the fused strategy.
    Radix2,
    /// Fused radix-4 passes covering two stages each, with a single radix-2
    /// stage first when `log2(n)` is odd. Saves one complex multiply per
    /// 4-point group via the 90-degree-rotation twist.
    #[default]
    SplitRadix,
}

/// A prepared FFT of size `n`: strategy plus the tables built by `new`.
///
/// `run` is a pure function of the prepared state, the input buffer, and the
/// direction; it never mutates the planner, so a planner can be reused for
/// any number of transforms.
#[derive(Debug)]
pub struct Planner<T> {
    pub(crate) n: usize,
    pub(crate) log_n: usize,
    pub(crate) algorithm: Algorithm,
    /// `None` for `n <= 2`; those sizes take the direct fallback path.
    pub(crate) twiddles: Option<QuarterWave<T>>,
    /// Working slot -> input slot; `None` for `n <= 2`.
    pub(crate) permutation: Option<Vec<usize>>,
}

impl<T: Float + FloatConst> Planner<T> {
    /// Prepare a transform of size `n` with an explicit strategy.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::InvalidSize`] unless `n` is a power of two >= 1.
    pub fn new(n: usize, algorithm: Algorithm) -> Result<Self, FftError> {
        if n == 0 || !n.is_power_of_two() {
            return Err(FftError::InvalidSize { size: n });
        }

        let log_n = n.ilog2() as usize;
        let (twiddles, permutation) = if n <= 2 {
            (None, None)
        } else {
            (Some(QuarterWave::new(n)), Some(bit_reversal_table(n)))
        };

        Ok(Self {
            n,
            log_n,
            algorithm,
            twiddles,
            permutation,
        })
    }

    /// Prepare a transform of size `n` with the default strategy.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::InvalidSize`] unless `n` is a power of two >= 1.
    pub fn auto(n: usize) -> Result<Self, FftError> {
        Self::new(n, Algorithm::default())
    }

    /// The transform size this planner was prepared for.
    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }

    /// The strategy selected at construction.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Execute one transform: permute `input` into `output`, then run the
    /// butterfly passes over `output` in place.
    ///
    /// `input` is only read, never written; aliasing between the two buffers
    /// is ruled out by the borrow rules. The inverse transform is
    /// **unnormalized**: `run(run(x, Forward), Reverse) == n * x`, and scaling
    /// by `1/n` is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`FftError::LengthMismatch`] if either buffer's length differs
    /// from the prepared size.
    pub fn run(
        &self,
        input: &ComplexArray<T>,
        output: &mut ComplexArray<T>,
        direction: Direction,
    ) -> Result<(), FftError> {
        if input.len() != self.n {
            return Err(FftError::LengthMismatch {
                expected: self.n,
                actual: input.len(),
            });
        }
        if output.len() != self.n {
            return Err(FftError::LengthMismatch {
                expected: self.n,
                actual: output.len(),
            });
        }

        fft::execute(self, input, output, direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_power_of_two_sizes() {
        for n in [0usize, 3, 6, 12, 100] {
            let err = Planner::<f64>::auto(n).unwrap_err();
            assert_eq!(err, FftError::InvalidSize { size: n });
        }
    }

    #[test]
    fn prepared_state_is_debug_formattable() {
        let planner = Planner::<f64>::auto(8).unwrap();
        let repr = format!("{planner:?}");
        assert!(repr.contains("Planner") && repr.contains("log_n"));
    }

    #[test]
    fn no_tables_for_fallback_sizes() {
        for n in [1usize, 2] {
            let planner = Planner::<f64>::auto(n).unwrap();
            assert!(planner.twiddles.is_none() && planner.permutation.is_none());
        }
    }

    #[test]
    fn run_rejects_mismatched_buffers() {
        let planner = Planner::<f64>::auto(8).unwrap();
        let input = ComplexArray::zeroed(8);
        let mut short = ComplexArray::zeroed(4);
        assert_eq!(
            planner.run(&input, &mut short, Direction::Forward),
            Err(FftError::LengthMismatch {
                expected: 8,
                actual: 4
            })
        );

        let long = ComplexArray::zeroed(16);
        let mut output = ComplexArray::zeroed(8);
        assert_eq!(
            planner.run(&long, &mut output, Direction::Forward),
            Err(FftError::LengthMismatch {
                expected: 8,
                actual: 16
            })
        );
    }
}
