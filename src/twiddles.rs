//! Twiddle factor tables.
//!
//! The iterative kernels consume roots of unity `exp(i*direction*2*pi*k/n)`.
//! Rather than storing all `n` complex values, [`QuarterWave`] stores only
//! `cos(2*pi*k/n)` for `k = 0..=n/4` and reconstructs any cosine or sine by
//! folding the query index into the first quadrant. This quarters the table's
//! memory traffic for large `n`; the transform direction is applied at lookup
//! time through the sign of the sine component, so one table serves both the
//! forward and the inverse transform.

use num_traits::{Float, FloatConst};

use crate::planner::Direction;

/// Quarter-wave compressed twiddle table for a transform of size `n`.
///
/// Immutable once built; construction is the only place the trigonometric
/// functions are evaluated.
#[derive(Debug)]
pub struct QuarterWave<T> {
    n: usize,
    /// `n / 4`; quadrant index and offset are derived from it.
    quarter_len: usize,
    /// `cos(2*pi*k/n)` for `k = 0..=n/4`, endpoints pinned exactly.
    quarter: Vec<T>,
}

impl<T: Float + FloatConst> QuarterWave<T> {
    /// Build the table for size `n`.
    ///
    /// Sizes 1 and 2 never consult a table (the fallback path handles them),
    /// so `n >= 4` is required here.
    ///
    /// # Panics
    ///
    /// Panics if `n` is not a power of two or if `n < 4`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        assert!(n.is_power_of_two() && n >= 4);

        let quarter_len = n / 4;
        let step = T::TAU() / T::from(n).unwrap();
        let mut quarter: Vec<T> = (0..=quarter_len)
            .map(|k| (step * T::from(k).unwrap()).cos())
            .collect();

        // Pin the endpoints so that cos(0) and cos(pi/2) are exact.
        quarter[0] = T::one();
        quarter[quarter_len] = T::zero();

        Self {
            n,
            quarter_len,
            quarter,
        }
    }

    /// The transform size this table was built for.
    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }

    /// `cos(2*pi*k/n)` for any `k`, reduced modulo `n`.
    #[inline]
    #[must_use]
    pub fn cos_at(&self, k: usize) -> T {
        let k = k & (self.n - 1);
        let quadrant = k / self.quarter_len;
        let lo = k % self.quarter_len;
        match quadrant {
            0 => self.quarter[lo],
            1 => -self.quarter[self.quarter_len - lo],
            2 => -self.quarter[lo],
            _ => self.quarter[self.quarter_len - lo],
        }
    }

    /// `sin(2*pi*k/n)` for any `k`, reduced modulo `n`.
    ///
    /// Uses `sin(x) = cos(x - pi/2)`, i.e. a lookup shifted by a quarter turn.
    #[inline]
    #[must_use]
    pub fn sin_at(&self, k: usize) -> T {
        self.cos_at(k.wrapping_add(self.n - self.quarter_len))
    }

    /// The twiddle `exp(i*direction*2*pi*k/n)` as a `(re, im)` pair.
    ///
    /// `Forward` carries the negative exponent, matching the usual DFT sign
    /// convention; `Reverse` the positive one.
    #[inline]
    #[must_use]
    pub fn twiddle(&self, k: usize, direction: Direction) -> (T, T) {
        let c = self.cos_at(k);
        let s = self.sin_at(k);
        match direction {
            Direction::Forward => (c, -s),
            Direction::Reverse => (c, s),
        }
    }
}

/// Generate the full half-circle twiddle table `exp(i*sign*pi*k/dist)` for
/// `k = 0..dist` as split real/imaginary vectors.
///
/// Every value is computed with a fresh `sin_cos` evaluation. The iterative
/// kernels do not use this table (they reconstruct from [`QuarterWave`]); it
/// exists to cross-check the compressed lookup and for callers that want the
/// uncompressed values.
#[must_use]
pub fn generate_twiddles<T: Float + FloatConst>(
    dist: usize,
    direction: Direction,
) -> (Vec<T>, Vec<T>) {
    let sign = match direction {
        Direction::Forward => -T::one(),
        Direction::Reverse => T::one(),
    };
    let step = sign * T::PI() / T::from(dist).unwrap();

    let mut twiddles_re = Vec::with_capacity(dist);
    let mut twiddles_im = Vec::with_capacity(dist);
    for k in 0..dist {
        let (s, c) = (step * T::from(k).unwrap()).sin_cos();
        twiddles_re.push(c);
        twiddles_im.push(s);
    }

    (twiddles_re, twiddles_im)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_1_SQRT_2;

    use super::*;
    use crate::utils::assert_float_closeness;

    #[test]
    fn quarter_wave_8() {
        let table = QuarterWave::<f64>::new(8);

        // k = 0 .. 7 walks the unit circle in eighth turns.
        let expected = [
            (1.0, 0.0),
            (FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            (0.0, 1.0),
            (-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            (-1.0, 0.0),
            (-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
            (0.0, -1.0),
            (FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
        ];
        for (k, (c, s)) in expected.iter().enumerate() {
            assert_float_closeness(table.cos_at(k), *c, 1e-12);
            assert_float_closeness(table.sin_at(k), *s, 1e-12);
        }
    }

    #[test]
    fn lookup_wraps_modulo_n() {
        let table = QuarterWave::<f64>::new(16);
        for k in 0..16 {
            assert_float_closeness(table.cos_at(k + 16), table.cos_at(k), 1e-15);
            assert_float_closeness(table.sin_at(k + 32), table.sin_at(k), 1e-15);
        }
    }

    #[test]
    fn quarter_wave_matches_full_table() {
        for n in [4usize, 8, 64, 256] {
            let table = QuarterWave::<f64>::new(n);
            let (full_re, full_im) = generate_twiddles(n / 2, Direction::Forward);
            for k in 0..n / 2 {
                let (re, im) = table.twiddle(k, Direction::Forward);
                assert_float_closeness(re, full_re[k], 1e-12);
                assert_float_closeness(im, full_im[k], 1e-12);
            }
        }
    }

    #[test]
    fn direction_flips_sine_sign() {
        let table = QuarterWave::<f64>::new(32);
        for k in 0..32 {
            let (f_re, f_im) = table.twiddle(k, Direction::Forward);
            let (r_re, r_im) = table.twiddle(k, Direction::Reverse);
            assert_float_closeness(f_re, r_re, 1e-15);
            assert_float_closeness(f_im, -r_im, 1e-15);
        }
    }
}
