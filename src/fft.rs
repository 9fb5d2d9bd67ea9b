//! Transform execution: the stage loop driving the butterfly kernels.
//!
//! A transform is the bit-reversal scatter followed by `log2(n)` butterfly
//! stages over the output buffer in place. The radix-2 strategy runs one pass
//! per stage; the split-radix strategy fuses stages in pairs into radix-4
//! passes, with a single radix-2 stage first when `log2(n)` is odd. Sizes 1
//! and 2 have no butterfly stage and are computed directly.

use num_traits::{Float, FloatConst};

use crate::buffer::ComplexArray;
use crate::error::FftError;
use crate::kernels::radix2::{butterfly_chunk_2, butterfly_chunk_4, butterfly_pass};
use crate::kernels::radix4::butterfly_pass_4;
use crate::permute;
use crate::planner::{Algorithm, Direction, Planner};
use crate::twiddles::QuarterWave;

/// Run one prepared transform. Buffer lengths are validated by the caller.
pub(crate) fn execute<T: Float + FloatConst>(
    planner: &Planner<T>,
    input: &ComplexArray<T>,
    output: &mut ComplexArray<T>,
    direction: Direction,
) -> Result<(), FftError> {
    match planner.n {
        1 => output.copy_from(input),
        2 => {
            let (a_re, a_im) = input.get(0);
            let (b_re, b_im) = input.get(1);
            output.set(0, a_re + b_re, a_im + b_im);
            output.set(1, a_re - b_re, a_im - b_im);
            Ok(())
        }
        _ => {
            let table = planner.permutation.as_deref().unwrap();
            let twiddles = planner.twiddles.as_ref().unwrap();
            permute::apply_into(table, input, output);

            let (reals, imags) = output.parts_mut();
            match planner.algorithm {
                Algorithm::Radix2 => {
                    run_radix2(reals, imags, twiddles, planner.log_n, direction);
                }
                Algorithm::SplitRadix => {
                    run_split_radix(reals, imags, twiddles, planner.log_n, direction);
                }
            }
            Ok(())
        }
    }
}

/// One radix-2 pass per stage, block size doubling from 2 up to `n`.
fn run_radix2<T: Float + FloatConst>(
    reals: &mut [T],
    imags: &mut [T],
    twiddles: &QuarterWave<T>,
    log_n: usize,
    direction: Direction,
) {
    for stage in 0..log_n {
        let dist = 1 << stage;
        if dist == 1 {
            butterfly_chunk_2(reals, imags);
        } else if dist == 2 {
            butterfly_chunk_4(reals, imags, direction);
        } else {
            butterfly_pass(reals, imags, twiddles, dist, direction);
        }
    }
}

/// Fused radix-4 passes, two stages each; a lone radix-2 stage leads when the
/// stage count is odd so the remaining count is even.
fn run_split_radix<T: Float + FloatConst>(
    reals: &mut [T],
    imags: &mut [T],
    twiddles: &QuarterWave<T>,
    log_n: usize,
    direction: Direction,
) {
    let mut stage = 0;
    if log_n % 2 == 1 {
        butterfly_chunk_2(reals, imags);
        stage = 1;
    }
    while stage < log_n {
        let quarter_dist = 1 << stage;
        butterfly_pass_4(reals, imags, twiddles, quarter_dist, direction);
        stage += 2;
    }
}

/// Plan and run a forward transform, returning a freshly allocated output.
///
/// Convenience wrapper over [`Planner::auto`] + [`Planner::run`]; prepare a
/// [`Planner`] yourself if you transform the same size repeatedly.
///
/// # Errors
///
/// Returns [`FftError::InvalidSize`] unless the input length is a power of
/// two >= 1.
pub fn fft_forward<T: Float + FloatConst>(
    input: &ComplexArray<T>,
) -> Result<ComplexArray<T>, FftError> {
    let planner = Planner::auto(input.len())?;
    let mut output = ComplexArray::zeroed(input.len());
    planner.run(input, &mut output, Direction::Forward)?;
    Ok(output)
}

/// Plan and run an **unnormalized** inverse transform, returning a freshly
/// allocated output: `fft_inverse(&fft_forward(x))` equals `n * x`.
///
/// # Errors
///
/// Returns [`FftError::InvalidSize`] unless the input length is a power of
/// two >= 1.
pub fn fft_inverse<T: Float + FloatConst>(
    input: &ComplexArray<T>,
) -> Result<ComplexArray<T>, FftError> {
    let planner = Planner::auto(input.len())?;
    let mut output = ComplexArray::zeroed(input.len());
    planner.run(input, &mut output, Direction::Reverse)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::assert_float_closeness;

    #[test]
    fn size_1_copies_input() {
        let input = ComplexArray::from_parts(vec![3.5f64], vec![-1.25]).unwrap();
        let output = fft_forward(&input).unwrap();
        assert_eq!(output.get(0), (3.5, -1.25));
    }

    #[test]
    fn size_2_sum_difference() {
        let input = ComplexArray::from_parts(vec![1.0f64, 2.0], vec![3.0, -1.0]).unwrap();
        let output = fft_forward(&input).unwrap();
        assert_eq!(output.get(0), (3.0, 2.0));
        assert_eq!(output.get(1), (-1.0, 4.0));
    }

    #[test]
    fn unit_impulse_spreads_flat() {
        for algorithm in [Algorithm::Radix2, Algorithm::SplitRadix] {
            let planner = Planner::new(4, algorithm).unwrap();
            let mut input = ComplexArray::<f64>::zeroed(4);
            input.set(0, 1.0, 0.0);
            let mut output = ComplexArray::zeroed(4);
            planner.run(&input, &mut output, Direction::Forward).unwrap();

            for k in 0..4 {
                let (re, im) = output.get(k);
                assert_float_closeness(re, 1.0, 1e-12);
                assert_float_closeness(im, 0.0, 1e-12);
            }
        }
    }

    #[test]
    fn dc_concentrates_in_bin_zero() {
        for algorithm in [Algorithm::Radix2, Algorithm::SplitRadix] {
            let planner = Planner::new(4, algorithm).unwrap();
            let input =
                ComplexArray::from_parts(vec![1.0f64; 4], vec![0.0f64; 4]).unwrap();
            let mut output = ComplexArray::zeroed(4);
            planner.run(&input, &mut output, Direction::Forward).unwrap();

            let (re0, im0) = output.get(0);
            assert_float_closeness(re0, 4.0, 1e-12);
            assert_float_closeness(im0, 0.0, 1e-12);
            for k in 1..4 {
                let (re, im) = output.get(k);
                assert_float_closeness(re, 0.0, 1e-12);
                assert_float_closeness(im, 0.0, 1e-12);
            }
        }
    }
}
