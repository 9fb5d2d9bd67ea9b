//! Fused radix-4 decimation-in-time butterfly pass.
//!
//! One call covers two consecutive radix-2 stages over blocks of
//! `4 * quarter_dist`: the four sub-blocks are first combined pairwise with
//! the inner-stage twiddle `w1`, then across with the outer-stage twiddle
//! `w2`. The twiddle of the odd-odd cross term is `w2` advanced by a quarter
//! turn, which is a 90-degree rotation rather than a third general complex
//! multiply. That rotation is the split-radix trick saving one multiplication
//! per 4-point group.

use num_traits::{Float, FloatConst};

use crate::planner::Direction;
use crate::twiddles::QuarterWave;

/// Multiply `re + i*im` by `-i` (forward) or `+i` (reverse).
#[inline]
fn rot90<T: Float>(re: T, im: T, direction: Direction) -> (T, T) {
    match direction {
        Direction::Forward => (im, -re),
        Direction::Reverse => (-im, re),
    }
}

/// Fused radix-4 pass over blocks of `4 * quarter_dist`.
///
/// Twiddles are read from the quarter-wave table along two interleaved stride
/// sequences: `w1` at `2 * j * step` for the inner stage and `w2` at
/// `j * step` for the outer one, with `step = n / (4 * quarter_dist)`; the
/// third sequence is `rot90(w2)`.
#[multiversion::multiversion(targets("x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl", // x86_64-v4
                                     "x86_64+avx2+fma", // x86_64-v3
                                     "x86_64+sse4.2", // x86_64-v2
                                     "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
                                     "x86+avx2+fma",
                                     "x86+sse4.2",
                                     "x86+sse2",
                                     "aarch64+neon", // ARM64 with NEON (Apple Silicon M1/M2)
))]
#[inline]
pub(crate) fn butterfly_pass_4<T: Float + FloatConst>(
    reals: &mut [T],
    imags: &mut [T],
    twiddles: &QuarterWave<T>,
    quarter_dist: usize,
    direction: Direction,
) {
    let chunk_size = quarter_dist << 2;
    let step = twiddles.size() / chunk_size;
    debug_assert!(step >= 1);

    reals
        .chunks_exact_mut(chunk_size)
        .zip(imags.chunks_exact_mut(chunk_size))
        .for_each(|(reals_chunk, imags_chunk)| {
            let (re_ab, re_cd) = reals_chunk.split_at_mut(2 * quarter_dist);
            let (im_ab, im_cd) = imags_chunk.split_at_mut(2 * quarter_dist);
            let (re_a, re_b) = re_ab.split_at_mut(quarter_dist);
            let (im_a, im_b) = im_ab.split_at_mut(quarter_dist);
            let (re_c, re_d) = re_cd.split_at_mut(quarter_dist);
            let (im_c, im_d) = im_cd.split_at_mut(quarter_dist);

            for j in 0..quarter_dist {
                let (w1_re, w1_im) = twiddles.twiddle(2 * j * step, direction);
                let (w2_re, w2_im) = twiddles.twiddle(j * step, direction);
                let (w3_re, w3_im) = rot90(w2_re, w2_im, direction);

                let a_re = re_a[j];
                let a_im = im_a[j];
                let b_re = re_b[j];
                let b_im = im_b[j];
                let c_re = re_c[j];
                let c_im = im_c[j];
                let d_re = re_d[j];
                let d_im = im_d[j];

                // Inner stage: same-parity pairs with w1.
                let wb_re = w1_re * b_re - w1_im * b_im;
                let wb_im = w1_re * b_im + w1_im * b_re;
                let wd_re = w1_re * d_re - w1_im * d_im;
                let wd_im = w1_re * d_im + w1_im * d_re;

                let t0_re = a_re + wb_re;
                let t0_im = a_im + wb_im;
                let t1_re = a_re - wb_re;
                let t1_im = a_im - wb_im;
                let t2_re = c_re + wd_re;
                let t2_im = c_im + wd_im;
                let t3_re = c_re - wd_re;
                let t3_im = c_im - wd_im;

                // Outer stage: cross combination; the odd-odd term uses the
                // rotated twiddle w3 = rot90(w2).
                let u2_re = w2_re * t2_re - w2_im * t2_im;
                let u2_im = w2_re * t2_im + w2_im * t2_re;
                let u3_re = w3_re * t3_re - w3_im * t3_im;
                let u3_im = w3_re * t3_im + w3_im * t3_re;

                re_a[j] = t0_re + u2_re;
                im_a[j] = t0_im + u2_im;
                re_b[j] = t1_re + u3_re;
                im_b[j] = t1_im + u3_im;
                re_c[j] = t0_re - u2_re;
                im_c[j] = t0_im - u2_im;
                re_d[j] = t1_re - u3_re;
                im_d[j] = t1_im - u3_im;
            }
        });
}
