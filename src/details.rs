//! A filter bound to a blur factor: the configuration handed to the window builder.

use crate::{Context, Error, Filter, Type};
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use crate::no_std_float::FloatExt;

/// Upper bound on the number of probes a single [`InterpolationDetails::probe`] walk makes.
const MAX_PROBE_STEPS: usize = 1 << 24;

/// A filter together with the blur factor it is applied with.
///
/// Immutable once created, so any number of builds, on any number of
/// threads, may borrow the same instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpolationDetails {
    filter: Filter,
    blur: f64,
}

impl InterpolationDetails {
    /// Details for `filter` with no extra blur.
    pub fn create(ctx: &mut Context, filter: Type) -> Result<InterpolationDetails, Error> {
        Self::create_with_blur(ctx, filter, 1.0)
    }

    /// Details for `filter`, stretched by `blur`.
    ///
    /// `blur` must be finite and at least 1. Values above 1 widen the
    /// support and soften the result.
    pub fn create_with_blur(ctx: &mut Context, filter: Type, blur: f64) -> Result<InterpolationDetails, Error> {
        ctx.run(|| {
            if !(blur.is_finite() && blur >= 1.0) {
                return Err(Error::InvalidParameters);
            }
            Ok(InterpolationDetails { filter: filter.filter(), blur })
        })
    }

    /// The underlying filter, without blur applied.
    #[inline]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    /// Blur factor `b`.
    #[inline]
    pub fn blur(&self) -> f64 {
        self.blur
    }

    /// Effective support radius `W * b`.
    #[inline]
    pub fn support(&self) -> f64 {
        self.filter.support() * self.blur
    }

    /// Blurred kernel value at `x`: zero for `|x| >= W * b`.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.filter.evaluate(x / self.blur)
    }

    /// Area of the negative lobes relative to the positive area over `[0, W * b]`.
    ///
    /// Zero for kernels that never go negative.
    pub fn percent_negative_weight(&self) -> f64 {
        let samples = 50;
        let step = self.support() / samples as f64;
        let mut last_height = self.evaluate(-step);
        let mut positive_area = 0.0;
        let mut negative_area = 0.0;
        for i in 0..samples + 3 {
            let height = self.evaluate(i as f64 * step);
            let area = (height + last_height) / 2.0 * step;
            last_height = height;
            if area > 0.0 {
                positive_area += area;
            } else {
                negative_area -= area;
            }
        }
        if positive_area > 0.0 {
            negative_area / positive_area
        } else {
            0.0
        }
    }

    /// Fill `buf` with evenly spaced samples of [`evaluate`](Self::evaluate)
    /// starting at `from`, stepping `(to - from) / buf.len()`.
    pub fn sample_into(&self, from: f64, to: f64, buf: &mut [f64]) {
        let len = buf.len() as f64;
        for (i, out) in buf.iter_mut().enumerate() {
            let x = (to - from) * (i as f64 / len) + from;
            *out = self.evaluate(x);
        }
    }

    /// Walk from `start` in increments of `step` while `|x| < |stop_at_abs|`
    /// and check every value lies in `[low, high]`.
    ///
    /// Returns the first offending `(x, value)`. The walk is capped at a
    /// fixed number of steps, so a `step` pointing the wrong way, or a zero
    /// step, terminates.
    ///
    /// ```
    /// use resample_weights::{Context, InterpolationDetails, Type};
    /// let d = InterpolationDetails::create(&mut Context::new(), Type::Triangle).unwrap();
    /// assert!(d.probe(0.0, 1.0, 0.05, 0.0, 1.0).is_ok());
    /// assert!(d.probe(0.0, 1.0, 0.05, 0.5, 1.0).is_err());
    /// ```
    pub fn probe(&self, start: f64, stop_at_abs: f64, step: f64, low: f64, high: f64) -> Result<(), (f64, f64)> {
        let limit = stop_at_abs.abs();
        let steps = if step.is_finite() && step != 0.0 {
            let span = ((limit + start.abs()) / step.abs()).ceil();
            if span.is_finite() && span < MAX_PROBE_STEPS as f64 {
                span as usize + 1
            } else {
                MAX_PROBE_STEPS
            }
        } else {
            1
        };
        for i in 0..steps {
            let x = start + step * i as f64;
            if x.abs() >= limit {
                break;
            }
            let value = self.evaluate(x);
            if value < low || value > high {
                return Err((x, value));
            }
        }
        Ok(())
    }
}
