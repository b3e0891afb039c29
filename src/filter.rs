//! Catalog of 1-D interpolation kernels.
// Cubic splines follow
// https://github.com/PistonDevelopers/image/blob/2921cd7/src/imageops/sample.rs#L68
// and the sinc/jinc family follows the imageflow weighting code.

use crate::math::{bessel_j1, sinc};
use crate::Error;
#[cfg(not(feature = "std"))]
#[allow(unused_imports)]
use crate::no_std_float::FloatExt;
use core::f64::consts::PI;

/// First zero of `J1(pi * x)`, divided by pi.
const JINC_FIRST_ZERO: f64 = 1.2196698912665046;

/// Shape of an interpolation kernel.
///
/// Every variant is even and peaks at `x = 0`. Evaluation is pure, so one
/// kernel can be shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kernel {
    /// 1 for `|x| < 0.5`, 0 elsewhere.
    Box,
    /// `max(1 - |x|, 0)`.
    Triangle,
    /// Mitchell-Netravali cubic spline with the given `B`/`C` parameters.
    Cubic {
        /// Blur parameter `B`.
        b: f64,
        /// Ringing parameter `C`.
        c: f64,
    },
    /// Keys cubic convolution with `a = -1`.
    CubicFast,
    /// Plain `sinc`, only truncated by the filter support.
    Sinc,
    /// `sinc(x) * sinc(x / taps)`.
    Lanczos {
        /// Number of lobes of the sinc window.
        taps: f64,
    },
    /// `sinc` windowed by the first lobe of a jinc stretched over `window`.
    Ginseng {
        /// Distance at which the jinc window reaches zero.
        window: f64,
    },
    /// Gaussian bell.
    Gaussian {
        /// Standard deviation.
        sigma: f64,
    },
}

impl Kernel {
    /// Value of the kernel at `x`, ignoring any support cutoff.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        let x = x.abs();
        match *self {
            Kernel::Box => {
                if x < 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
            Kernel::Triangle => f64::max(1.0 - x, 0.0),
            Kernel::Cubic { b, c } => bc_cubic_spline(b, c, x),
            Kernel::CubicFast => cubic_fast(x),
            Kernel::Sinc => sinc(x),
            Kernel::Lanczos { taps } => lanczos(taps, x),
            Kernel::Ginseng { window } => ginseng(window, x),
            Kernel::Gaussian { sigma } => gaussian(x, sigma),
        }
    }

    fn params_valid(&self) -> bool {
        match *self {
            Kernel::Box | Kernel::Triangle | Kernel::CubicFast | Kernel::Sinc => true,
            Kernel::Cubic { b, c } => b.is_finite() && c.is_finite(),
            Kernel::Lanczos { taps: p } | Kernel::Ginseng { window: p } | Kernel::Gaussian { sigma: p } => {
                p.is_finite() && p > 0.0
            }
        }
    }
}

#[inline]
fn bc_cubic_spline(b: f64, c: f64, a: f64) -> f64 {
    let k = if a < 1.0 {
        (12.0 - 9.0 * b - 6.0 * c) * a.powi(3) +
        (-18.0 + 12.0 * b + 6.0 * c) * a.powi(2) +
        (6.0 - 2.0 * b)
    } else if a < 2.0 {
        (-b - 6.0 * c) * a.powi(3) +
        (6.0 * b + 30.0 * c) * a.powi(2) +
        (-12.0 * b - 48.0 * c) * a +
        (8.0 * b + 24.0 * c)
    } else {
        0.0
    };
    k / 6.0
}

#[inline]
fn cubic_fast(a: f64) -> f64 {
    let a2 = a * a;
    if a < 1.0 {
        1.0 - 2.0 * a2 + a2 * a
    } else if a < 2.0 {
        4.0 - 8.0 * a + 5.0 * a2 - a2 * a
    } else {
        0.0
    }
}

#[inline]
fn lanczos(taps: f64, x: f64) -> f64 {
    if x < taps {
        sinc(x) * sinc(x / taps)
    } else {
        0.0
    }
}

#[inline]
fn ginseng(window: f64, x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }
    let t_pi = x * PI;
    let jinc_input = JINC_FIRST_ZERO * t_pi / window;
    let jinc = bessel_j1(jinc_input) / (jinc_input * 0.5);
    jinc * t_pi.sin() / t_pi
}

#[inline]
fn gaussian(x: f64, sigma: f64) -> f64 {
    ((2.0 * PI).sqrt() * sigma).recip() * (-x.powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Resampling filter: a kernel shape plus the radius beyond which it is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filter {
    kernel: Kernel,
    support: f64,
}

impl Filter {
    /// Create a new filter.
    ///
    /// `support` must be finite and positive, and so must the kernel's
    /// `taps`, `window` or `sigma`.
    ///
    /// # Examples
    ///
    /// ```
    /// use resample_weights::{Filter, Kernel};
    /// let filter = Filter::new(Kernel::Cubic { b: 0.5, c: 0.25 }, 2.0).unwrap();
    /// assert_eq!(filter.evaluate(2.0), 0.0);
    /// ```
    pub fn new(kernel: Kernel, support: f64) -> Result<Filter, Error> {
        if !(support.is_finite() && support > 0.0 && kernel.params_valid()) {
            return Err(Error::InvalidParameters);
        }
        Ok(Filter { kernel, support })
    }

    /// The kernel shape.
    #[inline]
    pub fn kernel(&self) -> Kernel {
        self.kernel
    }

    /// Support radius `W`.
    #[inline]
    pub fn support(&self) -> f64 {
        self.support
    }

    /// Kernel value at `x`; exactly zero for `|x| >= W`.
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        if x.abs() >= self.support {
            0.0
        } else {
            self.kernel.eval(x)
        }
    }
}

/// Interpolation filter to use.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum Type {
    /// Box (nearest) filter, support 0.5.
    Box,
    /// Triangle (bilinear) filter, support 1.
    Triangle,
    /// Hermite cubic (`B = 0, C = 0`), support 1.
    Hermite,
    /// Catmull-Rom cubic (`B = 0, C = 0.5`).
    CatmullRom,
    /// Mitchell-Netravali cubic (`B = C = 1/3`).
    Mitchell,
    /// Cubic B-spline (`B = 1, C = 0`), blurry but never negative.
    CubicBSpline,
    /// Sharp cubic (`B = 0, C = 1`).
    Cubic,
    /// Keys cubic with `a = -1`.
    CubicFast,
    /// Robidoux cubic, tuned for downscaling.
    Robidoux,
    /// Sharper variant of Robidoux.
    RobidouxSharp,
    /// Sinc-windowed sinc with radius of 2.
    Lanczos2,
    /// Sinc-windowed sinc with radius of 3.
    Lanczos3,
    /// Unwindowed sinc truncated at radius 2.
    RawLanczos2,
    /// Unwindowed sinc truncated at radius 3.
    RawLanczos3,
    /// Jinc-windowed sinc with radius of 3.
    Ginseng,
    /// Gaussian with standard deviation 0.5, truncated at radius 3.
    Gaussian,
    /// Resize using custom filter.
    Custom(Filter),
}

impl Type {
    /// Every built-in preset, in declaration order.
    pub const PRESETS: [Type; 16] = [
        Type::Box,
        Type::Triangle,
        Type::Hermite,
        Type::CatmullRom,
        Type::Mitchell,
        Type::CubicBSpline,
        Type::Cubic,
        Type::CubicFast,
        Type::Robidoux,
        Type::RobidouxSharp,
        Type::Lanczos2,
        Type::Lanczos3,
        Type::RawLanczos2,
        Type::RawLanczos3,
        Type::Ginseng,
        Type::Gaussian,
    ];

    /// The kernel and support radius this type stands for.
    pub fn filter(self) -> Filter {
        let (kernel, support) = match self {
            Type::Box           => (Kernel::Box, 0.5),
            Type::Triangle      => (Kernel::Triangle, 1.0),
            Type::Hermite       => (Kernel::Cubic { b: 0.0, c: 0.0 }, 1.0),
            Type::CatmullRom    => (Kernel::Cubic { b: 0.0, c: 0.5 }, 2.0),
            Type::Mitchell      => (Kernel::Cubic { b: 1.0 / 3.0, c: 1.0 / 3.0 }, 2.0),
            Type::CubicBSpline  => (Kernel::Cubic { b: 1.0, c: 0.0 }, 2.0),
            Type::Cubic         => (Kernel::Cubic { b: 0.0, c: 1.0 }, 2.0),
            Type::CubicFast     => (Kernel::CubicFast, 2.0),
            Type::Robidoux      => (Kernel::Cubic { b: 0.3782157550939987, c: 0.3108921224530007 }, 2.0),
            Type::RobidouxSharp => (Kernel::Cubic { b: 0.2620145123990142, c: 0.3689927438004929 }, 2.0),
            Type::Lanczos2      => (Kernel::Lanczos { taps: 2.0 }, 2.0),
            Type::Lanczos3      => (Kernel::Lanczos { taps: 3.0 }, 3.0),
            Type::RawLanczos2   => (Kernel::Sinc, 2.0),
            Type::RawLanczos3   => (Kernel::Sinc, 3.0),
            Type::Ginseng       => (Kernel::Ginseng { window: 3.0 }, 3.0),
            Type::Gaussian      => (Kernel::Gaussian { sigma: 0.5 }, 3.0),
            Type::Custom(f)     => return f,
        };
        Filter { kernel, support }
    }
}
