//! Numeric helpers shared by the kernels and the window builder.

#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use crate::no_std_float::FloatExt;
use core::f64::consts::PI;

/// `floor(v + 0.5)`: exact halves always go up, also for negative `v`.
#[inline]
pub(crate) fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[inline]
pub(crate) fn clamp<N: PartialOrd>(v: N, min: N, max: N) -> N {
    if v <= min {
        min
    } else if v >= max {
        max
    } else {
        v
    }
}

#[inline]
pub(crate) fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let a = x * PI;
        a.sin() / a
    }
}

/// Bessel function of the first kind, order one.
///
/// Rational approximation below 8, asymptotic expansion above
/// (Numerical Recipes `bessj1`).
pub(crate) fn bessel_j1(x: f64) -> f64 {
    let ax = x.abs();
    if ax < 8.0 {
        // Odd in `x` through the leading factor.
        let y = x * x;
        let ans1 = x * (72362614232.0 + y * (-7895059235.0 + y * (242396853.1
            + y * (-2972611.439 + y * (15704.48260 + y * (-30.16036606))))));
        let ans2 = 144725228442.0 + y * (2300535178.0 + y * (18583304.74
            + y * (99447.43394 + y * (376.9991397 + y))));
        ans1 / ans2
    } else {
        let z = 8.0 / ax;
        let y = z * z;
        let xx = ax - 2.356194491;
        let ans1 = 1.0 + y * (0.183105e-2 + y * (-0.3516396496e-4
            + y * (0.2457520174e-5 + y * (-0.240337019e-6))));
        let ans2 = 0.04687499995 + y * (-0.2002690873e-3
            + y * (0.8449199096e-5 + y * (-0.88228987e-6
            + y * 0.105787412e-6)));
        let ans = (0.636619772 / ax).sqrt() * (xx.cos() * ans1 - z * xx.sin() * ans2);
        if x < 0.0 {
            -ans
        } else {
            ans
        }
    }
}
