//! FFT butterfly kernels.
//!
//! All kernels operate in place on split real/imaginary buffers that have
//! already been put into bit-reversed order, and are compiled for multiple
//! CPU feature levels with runtime dispatch.
//!
//! ## Organization
//!
//! - `radix2`: the generic radix-2 pass plus hardcoded-twiddle passes for the
//!   two smallest block sizes
//! - `radix4`: the fused radix-4 pass used by the split-radix strategy, where
//!   the odd-odd twiddle is a 90-degree rotation of the even one

pub(crate) mod radix2;
pub(crate) mod radix4;
