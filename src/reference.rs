//! Naive recursive radix-2 FFT used as a correctness oracle.
//!
//! No precomputation, no permutation table: the input is split into even and
//! odd halves, both halves are transformed recursively, and the results are
//! combined with twiddles evaluated by `sin_cos` on the spot. Allocates at
//! every level and is far slower than the iterative kernels; it exists only
//! so tests have an independent implementation to compare against.

use num_traits::{Float, FloatConst};

use crate::buffer::ComplexArray;
use crate::error::FftError;
use crate::planner::Direction;

/// Transform `input` recursively, returning a freshly allocated output.
///
/// Follows the same conventions as the iterative kernels: `Forward` carries
/// the negative exponent and `Reverse` is unnormalized.
///
/// # Errors
///
/// Returns [`FftError::InvalidSize`] unless the input length is a power of
/// two >= 1.
pub fn naive_fft<T: Float + FloatConst>(
    input: &ComplexArray<T>,
    direction: Direction,
) -> Result<ComplexArray<T>, FftError> {
    let n = input.len();
    if n == 0 || !n.is_power_of_two() {
        return Err(FftError::InvalidSize { size: n });
    }

    let sign = match direction {
        Direction::Forward => -T::one(),
        Direction::Reverse => T::one(),
    };
    let (re, im) = recurse(input.re(), input.im(), sign);
    ComplexArray::from_parts(re, im)
}

fn recurse<T: Float + FloatConst>(re: &[T], im: &[T], sign: T) -> (Vec<T>, Vec<T>) {
    let n = re.len();
    if n == 1 {
        return (re.to_vec(), im.to_vec());
    }

    let (even_re, odd_re): (Vec<T>, Vec<T>) = re.chunks_exact(2).map(|c| (c[0], c[1])).unzip();
    let (even_im, odd_im): (Vec<T>, Vec<T>) = im.chunks_exact(2).map(|c| (c[0], c[1])).unzip();

    let (e_re, e_im) = recurse(&even_re, &even_im, sign);
    let (o_re, o_im) = recurse(&odd_re, &odd_im, sign);

    let half = n / 2;
    let step = sign * T::TAU() / T::from(n).unwrap();
    let mut out_re = vec![T::zero(); n];
    let mut out_im = vec![T::zero(); n];
    for k in 0..half {
        let (s, c) = (step * T::from(k).unwrap()).sin_cos();
        let w_re = c * o_re[k] - s * o_im[k];
        let w_im = c * o_im[k] + s * o_re[k];

        out_re[k] = e_re[k] + w_re;
        out_im[k] = e_im[k] + w_im;
        out_re[k + half] = e_re[k] - w_re;
        out_im[k + half] = e_im[k] - w_im;
    }

    (out_re, out_im)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::assert_float_closeness;

    #[test]
    fn rejects_invalid_sizes() {
        let input = ComplexArray::<f64>::zeroed(6);
        assert_eq!(
            naive_fft(&input, Direction::Forward),
            Err(FftError::InvalidSize { size: 6 })
        );
    }

    #[test]
    fn matches_hand_computed_dft_of_size_4() {
        let input =
            ComplexArray::from_parts(vec![1.0f64, 2.0, 3.0, 4.0], vec![0.0f64; 4]).unwrap();
        let output = naive_fft(&input, Direction::Forward).unwrap();

        // X = [10, -2+2i, -2, -2-2i]
        let expected = [(10.0, 0.0), (-2.0, 2.0), (-2.0, 0.0), (-2.0, -2.0)];
        for (k, (re, im)) in expected.iter().enumerate() {
            let (out_re, out_im) = output.get(k);
            assert_float_closeness(out_re, *re, 1e-12);
            assert_float_closeness(out_im, *im, 1e-12);
        }
    }
}
