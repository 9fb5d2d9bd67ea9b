//! Bit-reversal permutation tables.
//!
//! The iterative decimation-in-time kernels want their input reordered so that
//! element `k` of the working buffer holds input element `bit_reverse(k)`. The
//! table is built once per prepared size by simulating the recursive even/odd
//! split iteratively: walking the block size down from `n` to `2` while a
//! stride doubles from `1`, and adding the stride to every slot in the odd
//! half of each block. No recursion, one flat accumulator array.

use num_traits::Float;

use crate::buffer::ComplexArray;

/// Build the bit-reversal table for size `n` (a power of two).
///
/// Entry `k` is the input position that lands in working slot `k`, i.e.
/// `table[k] == bit_reverse(k, log2(n))`.
#[must_use]
pub fn bit_reversal_table(n: usize) -> Vec<usize> {
    debug_assert!(n.is_power_of_two());

    let mut table = vec![0usize; n];
    let mut len = n;
    let mut stride = 1usize;

    while len >= 2 {
        let half = len / 2;
        for block in table.chunks_exact_mut(len) {
            for slot in &mut block[half..] {
                *slot += stride;
            }
        }
        len = half;
        stride <<= 1;
    }

    table
}

/// Reverse the low `log_n` bits of `x`.
#[must_use]
pub fn bit_reverse(x: usize, log_n: usize) -> usize {
    if log_n == 0 {
        return x;
    }
    let shift = usize::BITS as usize - log_n;
    x.reverse_bits() >> shift
}

/// Scatter `src` into `dst` according to `table`: `dst[k] = src[table[k]]`.
///
/// This is the only step of a transform that reads the caller's input buffer;
/// `src` is never written.
pub(crate) fn apply_into<T: Float>(table: &[usize], src: &ComplexArray<T>, dst: &mut ComplexArray<T>) {
    debug_assert_eq!(table.len(), src.len());
    debug_assert_eq!(table.len(), dst.len());

    let (dst_re, dst_im) = dst.parts_mut();
    let (src_re, src_im) = (src.re(), src.im());
    for (k, &from) in table.iter().enumerate() {
        dst_re[k] = src_re[from];
        dst_im[k] = src_im[from];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulator_table_matches_bit_reverse() {
        for log_n in 0..=12 {
            let n = 1usize << log_n;
            let table = bit_reversal_table(n);
            for (k, &from) in table.iter().enumerate() {
                assert_eq!(from, bit_reverse(k, log_n), "n = {n}, slot {k}");
            }
        }
    }

    #[test]
    fn table_is_a_bijection() {
        for log_n in 0..=10 {
            let n = 1usize << log_n;
            let mut table = bit_reversal_table(n);
            table.sort_unstable();
            assert!(table.iter().enumerate().all(|(k, &v)| k == v));
        }
    }

    #[test]
    fn small_tables() {
        assert_eq!(bit_reversal_table(1), vec![0]);
        assert_eq!(bit_reversal_table(2), vec![0, 1]);
        assert_eq!(bit_reversal_table(4), vec![0, 2, 1, 3]);
        assert_eq!(bit_reversal_table(8), vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn apply_scatters_without_touching_source() {
        let src = ComplexArray::from_parts(
            vec![0.0f64, 1.0, 2.0, 3.0],
            vec![0.0f64, -1.0, -2.0, -3.0],
        )
        .unwrap();
        let snapshot = src.clone();
        let mut dst = ComplexArray::zeroed(4);

        apply_into(&bit_reversal_table(4), &src, &mut dst);

        assert_eq!(src, snapshot);
        assert_eq!(dst.re(), &[0.0, 2.0, 1.0, 3.0]);
        assert_eq!(dst.im(), &[0.0, -2.0, -1.0, -3.0]);
    }
}
