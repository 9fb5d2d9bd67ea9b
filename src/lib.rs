//! Iterative power-of-two FFT kernels with quarter-wave twiddle compression.
//!
//! A [`Planner`] prepares a transform of a fixed size once: it builds the
//! bit-reversal permutation table and a quarter-wave cosine table from which
//! every twiddle factor is reconstructed in O(1). The prepared planner then
//! runs any number of transforms in either direction, permuting the caller's
//! input into the output buffer and applying the butterfly passes in place.
//! Two strategies are available: plain radix-2 and the default split-radix
//! (fused radix-4 with a radix-2 tail stage), which eliminates one complex
//! multiply per 4-point group via a 90-degree-rotation identity.
//!
//! The inverse direction is **unnormalized**: a forward/inverse round trip
//! scales the signal by `n`, and dividing by `n` is left to the caller.
//!
//! ```
//! use quartfft::{ComplexArray, Direction, Planner};
//!
//! let planner = Planner::<f64>::auto(8).unwrap();
//! let mut input = ComplexArray::zeroed(8);
//! input.set(0, 1.0, 0.0); // unit impulse
//! let mut output = ComplexArray::zeroed(8);
//! planner.run(&input, &mut output, Direction::Forward).unwrap();
//!
//! // The spectrum of an impulse is flat.
//! for k in 0..8 {
//!     let (re, im) = output.get(k);
//!     assert!((re - 1.0).abs() < 1e-12 && im.abs() < 1e-12);
//! }
//! ```

mod buffer;
mod error;
mod fft;
mod handle;
mod kernels;
pub mod permute;
mod planner;
pub mod reference;
pub mod twiddles;
pub mod utils;

pub use buffer::ComplexArray;
pub use error::FftError;
pub use fft::{fft_forward, fft_inverse};
pub use handle::FftHandle;
pub use planner::{Algorithm, Direction, Planner};
