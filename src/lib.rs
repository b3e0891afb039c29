//! Contribution windows for one-dimensional image resampling.
//!
//! A 2-D scaler resamples one axis at a time. For every destination sample
//! on that axis this crate computes which source samples contribute and with
//! what weight, under a chosen interpolation kernel. Support is widened by
//! the scale ratio when downscaling, so every source sample is accounted for.
//! Weights of each window sum to 1.
//!
//! # Examples
//!
//! ```
//! use resample_weights::{Context, InterpolationDetails, LineContributions, Type};
//!
//! let mut ctx = Context::new();
//! let details = InterpolationDetails::create(&mut ctx, Type::Lanczos3)?;
//! let row = LineContributions::create(&mut ctx, 100, 640, &details)?;
//!
//! let src = vec![0.5f64; 640];
//! let dst: Vec<f64> = row.windows().map(|w| {
//!     w.weights.iter().zip(&src[w.left..=w.right]).map(|(c, p)| c * p).sum()
//! }).collect();
//! assert!((dst[42] - 0.5).abs() < 1e-9);
//! # Ok::<_, resample_weights::Error>(())
//! ```
// Windowing follows the classic Fant/PIL convolution resampler; kernel
// shapes follow the `resize` and imageflow filter sets.
#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use alloc::collections::TryReserveError;
use core::fmt;

mod context;
mod contrib;
mod details;
mod filter;
mod math;
#[cfg(not(feature = "std"))]
mod no_std_float;

pub use crate::context::Context;
pub use crate::contrib::{ContributionWindow, LineContributions};
pub use crate::details::InterpolationDetails;
pub use crate::filter::{Filter, Kernel, Type};

/// Window-building failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// Storage for the windows could not be reserved.
    AllocationFailure,
    /// A length was zero, or a blur factor or filter parameter was out of range.
    InvalidParameters,
}

impl From<TryReserveError> for Error {
    #[inline(always)]
    fn from(_: TryReserveError) -> Self {
        Self::AllocationFailure
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AllocationFailure => "out of memory",
            Self::InvalidParameters => "invalid parameters",
        })
    }
}

/// Compute the windows for one axis in a single step, with a fresh [`Context`].
///
/// ```
/// let row = resample_weights::contributions(4, 6, resample_weights::Type::Triangle).unwrap();
/// assert_eq!(row.destination_len(), 4);
/// ```
pub fn contributions(destination_len: usize, source_len: usize, filter: Type) -> Result<LineContributions, Error> {
    let mut ctx = Context::new();
    let details = InterpolationDetails::create(&mut ctx, filter)?;
    LineContributions::create(&mut ctx, destination_len, source_len, &details)
}
