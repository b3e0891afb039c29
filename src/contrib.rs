//! Per-destination contribution windows for resampling one axis.

use crate::math::{clamp, round_half_up};
use crate::{Context, Error, InterpolationDetails};
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use crate::no_std_float::FloatExt;
use alloc::vec::Vec;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Raw weight sums this close to zero are replaced by uniform weights.
const DEGENERATE_SUM: f64 = 1e-12;

/// The source samples blended into one destination sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContributionWindow<'a> {
    /// First contributing source index.
    pub left: usize,
    /// Last contributing source index, inclusive.
    pub right: usize,
    /// One weight per index in `left..=right`, summing to 1.
    pub weights: &'a [f64],
}

impl ContributionWindow<'_> {
    /// Number of contributing source samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always `false`; every window covers at least one sample.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Bounds {
    left: usize,
    right: usize,
}

/// All contribution windows for resampling `N` source samples into `M`.
///
/// ```
/// use resample_weights::{Context, InterpolationDetails, LineContributions, Type};
///
/// let mut ctx = Context::new();
/// let details = InterpolationDetails::create(&mut ctx, Type::Triangle).unwrap();
/// let lct = LineContributions::create(&mut ctx, 3, 6, &details).unwrap();
/// let w = lct.window(1).unwrap();
/// assert_eq!((w.left, w.right), (1, 4));
/// assert_eq!(w.weights.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LineContributions {
    source_len: usize,
    // Weights of window `d` start at `d * stride`.
    stride: usize,
    bounds: Vec<Bounds>,
    weights: Vec<f64>,
}

impl LineContributions {
    /// Compute the windows for resampling `source_len` samples into `destination_len`.
    ///
    /// Both lengths must be non-zero. Nothing is returned on failure; any
    /// storage already reserved is released.
    pub fn create(
        ctx: &mut Context,
        destination_len: usize,
        source_len: usize,
        details: &InterpolationDetails,
    ) -> Result<LineContributions, Error> {
        ctx.run(|| Self::build(destination_len, source_len, details))
    }

    fn build(destination_len: usize, source_len: usize, details: &InterpolationDetails) -> Result<LineContributions, Error> {
        if destination_len == 0 || source_len == 0 {
            return Err(Error::InvalidParameters);
        }
        let axis = Axis::new(destination_len, source_len, details);
        let stride = axis.max_window_len();
        let total = destination_len.checked_mul(stride).ok_or(Error::AllocationFailure)?;

        let mut bounds = Vec::new();
        bounds.try_reserve_exact(destination_len)?;
        bounds.resize(destination_len, Bounds::default());
        let mut weights = Vec::new();
        weights.try_reserve_exact(total)?;
        weights.resize(total, 0.0);

        axis.fill_all(&mut bounds, &mut weights, stride);

        Ok(LineContributions { source_len, stride, bounds, weights })
    }

    /// Number of destination samples `M`, i.e. number of windows.
    #[inline]
    pub fn destination_len(&self) -> usize {
        self.bounds.len()
    }

    /// Number of source samples `N` the windows index into.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    /// Window for destination index `d`, or `None` past the end.
    pub fn window(&self, d: usize) -> Option<ContributionWindow<'_>> {
        self.bounds.get(d).map(|&b| self.window_at(d, b))
    }

    /// All windows in destination order.
    pub fn windows(&self) -> impl ExactSizeIterator<Item = ContributionWindow<'_>> + '_ {
        self.bounds.iter().enumerate().map(move |(d, &b)| self.window_at(d, b))
    }

    /// Length of the widest window, for sizing scratch buffers.
    pub fn max_window_len(&self) -> usize {
        self.bounds.iter().map(|b| b.right - b.left + 1).max().unwrap_or(0)
    }

    #[inline]
    fn window_at(&self, d: usize, b: Bounds) -> ContributionWindow<'_> {
        let start = d * self.stride;
        ContributionWindow {
            left: b.left,
            right: b.right,
            weights: &self.weights[start..start + (b.right - b.left + 1)],
        }
    }
}

/// Geometry shared by every window of one build.
struct Axis<'a> {
    source_len: usize,
    scale: f64,
    filter_scale: f64,
    support: f64,
    details: &'a InterpolationDetails,
}

impl<'a> Axis<'a> {
    fn new(destination_len: usize, source_len: usize, details: &'a InterpolationDetails) -> Self {
        let scale = source_len as f64 / destination_len as f64;
        // Scale the filter when downsampling.
        let filter_scale = scale.max(1.0);
        Axis {
            source_len,
            scale,
            filter_scale,
            support: details.support() * filter_scale,
            details,
        }
    }

    /// No window spans more than `ceil(2 * support) + 1` samples, nor more
    /// than the whole source.
    fn max_window_len(&self) -> usize {
        let span = (2.0 * self.support).ceil() as usize;
        clamp(span.saturating_add(1), 1, self.source_len)
    }

    #[cfg(feature = "rayon")]
    fn fill_all(&self, bounds: &mut [Bounds], weights: &mut [f64], stride: usize) {
        bounds
            .par_iter_mut()
            .zip(weights.par_chunks_mut(stride))
            .enumerate()
            .for_each(|(d, (b, w))| *b = self.fill(d, w));
    }

    #[cfg(not(feature = "rayon"))]
    fn fill_all(&self, bounds: &mut [Bounds], weights: &mut [f64], stride: usize) {
        for (d, (b, w)) in bounds.iter_mut().zip(weights.chunks_mut(stride)).enumerate() {
            *b = self.fill(d, w);
        }
    }

    /// Write the normalized weights of window `d` to the front of `out`.
    fn fill(&self, d: usize, out: &mut [f64]) -> Bounds {
        let center = (d as f64 + 0.5) * self.scale;
        // Float to int casts saturate, so far out of range values land on 0.
        let mut xmin = round_half_up(center - self.support).max(0.0) as usize;
        let mut xmax = round_half_up(center + self.support).min(self.source_len as f64) as usize;
        if xmax <= xmin {
            xmin = xmin.min(self.source_len - 1);
            xmax = xmin + 1;
        }
        debug_assert!(xmax - xmin <= out.len());
        let len = (xmax - xmin).min(out.len());
        let out = &mut out[..len];

        let mut sum = 0.0;
        for (i, w) in out.iter_mut().enumerate() {
            let s = (xmin + i) as f64;
            *w = self.details.evaluate((s - center + 0.5) / self.filter_scale);
            sum += *w;
        }
        if sum.abs() > DEGENERATE_SUM {
            for w in out.iter_mut() {
                *w /= sum;
            }
        } else {
            let uniform = 1.0 / out.len() as f64;
            for w in out.iter_mut() {
                *w = uniform;
            }
        }

        Bounds { left: xmin, right: xmin + out.len() - 1 }
    }
}
