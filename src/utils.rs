//! Shared helpers: the closeness assertion used across the test suite and,
//! behind the `complex-nums` feature, conversions between interleaved
//! `Complex` slices and the split representation.

#[cfg(feature = "complex-nums")]
use bytemuck::cast_slice;
#[cfg(feature = "complex-nums")]
use num_complex::Complex;

use num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() > epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Separates interleaved data like `[1, 2, 3, 4]` into `([1, 3], [2, 4])`.
#[cfg(feature = "complex-nums")]
fn deinterleave<T: Copy>(input: &[T]) -> (Vec<T>, Vec<T>) {
    input.chunks_exact(2).map(|c| (c[0], c[1])).unzip()
}

/// Split a slice of `Complex<f64>` into real and imaginary component vectors.
#[cfg(feature = "complex-nums")]
#[must_use]
pub fn deinterleave_complex64(signal: &[Complex<f64>]) -> (Vec<f64>, Vec<f64>) {
    let components: &[f64] = cast_slice(signal);
    deinterleave(components)
}

/// Split a slice of `Complex<f32>` into real and imaginary component vectors.
#[cfg(feature = "complex-nums")]
#[must_use]
pub fn deinterleave_complex32(signal: &[Complex<f32>]) -> (Vec<f32>, Vec<f32>) {
    let components: &[f32] = cast_slice(signal);
    deinterleave(components)
}

/// Combine split real and imaginary components into `Complex` values.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`.
#[cfg(feature = "complex-nums")]
#[must_use]
pub fn combine_re_im<T: Float>(reals: &[T], imags: &[T]) -> Vec<Complex<T>> {
    assert_eq!(reals.len(), imags.len());

    reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Complex::new(*z_re, *z_im))
        .collect()
}
