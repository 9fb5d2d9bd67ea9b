//! Radix-2 decimation-in-time butterfly passes.

use num_traits::{Float, FloatConst};

use crate::planner::Direction;
use crate::twiddles::QuarterWave;

/// Pass over blocks of size 2: `(a, b) -> (a + b, a - b)`.
///
/// The twiddle is `1` for every pair, so the direction is irrelevant.
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
pub(crate) fn butterfly_chunk_2<T: Float>(reals: &mut [T], imags: &mut [T]) {
    reals
        .chunks_exact_mut(2)
        .zip(imags.chunks_exact_mut(2))
        .for_each(|(reals_chunk, imags_chunk)| {
            let z0_re = reals_chunk[0];
            let z0_im = imags_chunk[0];
            let z1_re = reals_chunk[1];
            let z1_im = imags_chunk[1];

            reals_chunk[0] = z0_re + z1_re;
            imags_chunk[0] = z0_im + z1_im;
            reals_chunk[1] = z0_re - z1_re;
            imags_chunk[1] = z0_im - z1_im;
        });
}

/// Pass over blocks of size 4 with hardcoded twiddles `1` and `-i*direction`.
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
pub(crate) fn butterfly_chunk_4<T: Float>(reals: &mut [T], imags: &mut [T], direction: Direction) {
    const DIST: usize = 2;
    const CHUNK_SIZE: usize = DIST << 1;

    let two = T::from(2.0).unwrap();

    reals
        .chunks_exact_mut(CHUNK_SIZE)
        .zip(imags.chunks_exact_mut(CHUNK_SIZE))
        .for_each(|(reals_chunk, imags_chunk)| {
            let (reals_s0, reals_s1) = reals_chunk.split_at_mut(DIST);
            let (imags_s0, imags_s1) = imags_chunk.split_at_mut(DIST);

            // First pair, twiddle 1.
            let in0_re = reals_s0[0];
            let in1_re = reals_s1[0];
            let in0_im = imags_s0[0];
            let in1_im = imags_s1[0];

            reals_s0[0] = in0_re + in1_re;
            imags_s0[0] = in0_im + in1_im;
            reals_s1[0] = two * in0_re - reals_s0[0];
            imags_s1[0] = two * in0_im - imags_s0[0];

            // Second pair, twiddle -i (forward) or +i (reverse):
            // z * (-i) = (im, -re), z * (+i) = (-im, re).
            let in0_re = reals_s0[1];
            let in1_re = reals_s1[1];
            let in0_im = imags_s0[1];
            let in1_im = imags_s1[1];

            match direction {
                Direction::Forward => {
                    reals_s0[1] = in0_re + in1_im;
                    imags_s0[1] = in0_im - in1_re;
                }
                Direction::Reverse => {
                    reals_s0[1] = in0_re - in1_im;
                    imags_s0[1] = in0_im + in1_re;
                }
            }
            reals_s1[1] = two * in0_re - reals_s0[1];
            imags_s1[1] = two * in0_im - imags_s0[1];
        });
}

/// Generic radix-2 pass over blocks of `2 * dist`, twiddles looked up from the
/// quarter-wave table at stride `n / (2 * dist)`.
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
pub(crate) fn butterfly_pass<T: Float + FloatConst>(
    reals: &mut [T],
    imags: &mut [T],
    twiddles: &QuarterWave<T>,
    dist: usize,
    direction: Direction,
) {
    let chunk_size = dist << 1;
    let step = twiddles.size() / chunk_size;
    debug_assert!(step >= 1);

    reals
        .chunks_exact_mut(chunk_size)
        .zip(imags.chunks_exact_mut(chunk_size))
        .for_each(|(reals_chunk, imags_chunk)| {
            let (reals_s0, reals_s1) = reals_chunk.split_at_mut(dist);
            let (imags_s0, imags_s1) = imags_chunk.split_at_mut(dist);

            for j in 0..dist {
                let (w_re, w_im) = twiddles.twiddle(j * step, direction);

                let in0_re = reals_s0[j];
                let in0_im = imags_s0[j];
                let in1_re = reals_s1[j];
                let in1_im = imags_s1[j];

                let tw_re = w_re * in1_re - w_im * in1_im;
                let tw_im = w_re * in1_im + w_im * in1_re;

                reals_s0[j] = in0_re + tw_re;
                imags_s0[j] = in0_im + tw_im;
                reals_s1[j] = in0_re - tw_re;
                imags_s1[j] = in0_im - tw_im;
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::assert_float_closeness;

    #[test]
    fn chunk_2_sum_difference() {
        let mut reals = vec![1.0f64, 2.0, 3.0, 5.0];
        let mut imags = vec![0.5f64, -0.5, 1.0, -1.0];

        butterfly_chunk_2(&mut reals, &mut imags);

        assert_eq!(reals, vec![3.0, -1.0, 8.0, -2.0]);
        assert_eq!(imags, vec![0.0, 1.0, 0.0, 2.0]);
    }

    #[test]
    fn chunk_4_matches_generic_pass() {
        let table = QuarterWave::<f64>::new(4);
        for direction in [Direction::Forward, Direction::Reverse] {
            let mut re_a = vec![1.0, -2.0, 0.5, 3.0];
            let mut im_a = vec![0.0, 1.0, -1.5, 0.25];
            let mut re_b = re_a.clone();
            let mut im_b = im_a.clone();

            butterfly_chunk_4(&mut re_a, &mut im_a, direction);
            butterfly_pass(&mut re_b, &mut im_b, &table, 2, direction);

            for j in 0..4 {
                assert_float_closeness(re_a[j], re_b[j], 1e-12);
                assert_float_closeness(im_a[j], im_b[j], 1e-12);
            }
        }
    }
}
