use resample_weights::{Context, Filter, InterpolationDetails, Kernel, Type};

fn details(t: Type) -> InterpolationDetails {
    InterpolationDetails::create(&mut Context::new(), t).unwrap()
}

/// Probe outward from `start` in both directions.
fn bounded_both(d: &InterpolationDetails, start: f64, stop_at_abs: f64, step: f64, low: f64, high: f64, what: &str) {
    for &sign in [1.0, -1.0].iter() {
        if let Err((x, v)) = d.probe(start * sign, stop_at_abs, step * sign, low, high) {
            panic!("{:?}: value {:.4} outside [{}, {}] at x={:.4} ({})", d.filter().kernel(), v, low, high, x, what);
        }
    }
}

/// `near0` is `(x, threshold)`: from `x` up to the second crossing (or the
/// support radius) the kernel must stay at or below `threshold`.
fn check_shape(t: Type, crossings: Option<(f64, f64)>, near0: Option<(f64, f64)>) {
    let d = details(t);
    let end = d.support();
    let top = d.evaluate(0.0);
    assert!(top > 0.0, "{:?}", t);

    bounded_both(&d, 0.0, end, 0.05, -500.0, top, "should peak at x=0");
    if let Some((near, threshold)) = near0 {
        let stop = crossings.map_or(end, |(_, second)| second);
        bounded_both(&d, near, stop, 0.05, -500.0, threshold, "should near 0");
    }
    bounded_both(&d, end, end + 1.0, 0.05, -0.0001, 0.0001, "should end at the support radius");
    assert_eq!(d.evaluate(end), 0.0, "{:?}", t);
    assert_eq!(d.evaluate(-end), 0.0, "{:?}", t);

    match crossings {
        Some((first, second)) => {
            bounded_both(&d, first + 0.05, second - 0.05, 0.05, -500.0, -0.0001, "should be negative between crossings");
            if end > second + 0.1 {
                bounded_both(&d, second + 0.05, end - 0.02, 0.02, 0.0, 500.0, "should be positive after the second crossing");
            }
        }
        None => bounded_both(&d, 0.0, end, 0.05, -0.0001, 500.0, "should only produce positive weights"),
    }
}

#[test]
fn non_negative_kernels() {
    check_shape(Type::Box, None, None);
    check_shape(Type::Triangle, None, Some((0.9, 0.1001)));
    check_shape(Type::Hermite, None, Some((0.9, 0.05)));
    check_shape(Type::CubicBSpline, None, Some((1.5, 0.05)));
    check_shape(Type::Gaussian, None, Some((1.5, 0.01)));
}

#[test]
fn negative_lobe_kernels() {
    check_shape(Type::CatmullRom, Some((1.0, 2.0)), Some((0.9, 0.2)));
    check_shape(Type::Mitchell, Some((1.2, 2.0)), Some((0.9, 0.2)));
    check_shape(Type::Cubic, Some((1.0, 2.0)), Some((0.9, 0.2)));
    check_shape(Type::CubicFast, Some((1.0, 2.0)), Some((0.9, 0.2)));
    check_shape(Type::Robidoux, Some((1.2, 2.0)), Some((0.9, 0.2)));
    check_shape(Type::RobidouxSharp, Some((1.2, 2.0)), Some((0.9, 0.2)));
    check_shape(Type::Lanczos2, Some((1.0, 2.0)), Some((0.9, 0.2)));
    check_shape(Type::Lanczos3, Some((1.0, 2.0)), Some((0.9, 0.2)));
    check_shape(Type::RawLanczos2, Some((1.0, 2.0)), Some((0.9, 0.2)));
    check_shape(Type::RawLanczos3, Some((1.0, 2.0)), Some((0.9, 0.2)));
    check_shape(Type::Ginseng, Some((1.0, 2.0)), Some((0.9, 0.2)));
}

#[test]
fn kernels_are_even() {
    for &t in Type::PRESETS.iter() {
        let d = details(t);
        let w = d.support();
        let steps = (w * 200.0) as i32 + 20;
        for i in 0..=steps {
            let x = i as f64 * 0.005;
            assert_eq!(d.evaluate(x), d.evaluate(-x), "{:?} at {}", t, x);
        }
    }
}

#[test]
fn kernels_vanish_beyond_support() {
    for &t in Type::PRESETS.iter() {
        let d = details(t);
        for &x in [1.0, 1.5, 10.0, 1e9, f64::INFINITY].iter() {
            assert_eq!(d.evaluate(d.support() * x), 0.0, "{:?}", t);
        }
    }
}

#[test]
fn interpolating_kernels_hit_zero_at_integers() {
    for &t in [Type::Triangle, Type::CatmullRom, Type::Cubic, Type::CubicFast, Type::Lanczos2, Type::Lanczos3].iter() {
        let d = details(t);
        assert_eq!(d.evaluate(0.0), 1.0, "{:?}", t);
        assert!(d.evaluate(1.0).abs() < 1e-12, "{:?}", t);
        assert!(d.evaluate(2.0).abs() < 1e-12, "{:?}", t);
    }
}

#[test]
fn blur_stretches_the_kernel() {
    let mut ctx = Context::new();
    let plain = InterpolationDetails::create(&mut ctx, Type::Lanczos3).unwrap();
    let blurred = InterpolationDetails::create_with_blur(&mut ctx, Type::Lanczos3, 1.5).unwrap();
    assert_eq!(blurred.support(), 4.5);
    assert_eq!(blurred.filter(), plain.filter());
    for i in 0..40 {
        let x = i as f64 * 0.1;
        assert!((blurred.evaluate(x * 1.5) - plain.evaluate(x)).abs() < 1e-12, "x={}", x);
    }
}

#[test]
fn percent_negative_weight() {
    assert_eq!(details(Type::Triangle).percent_negative_weight(), 0.0);
    assert_eq!(details(Type::CubicBSpline).percent_negative_weight(), 0.0);
    let catrom = details(Type::CatmullRom).percent_negative_weight();
    assert!(catrom > 0.05 && catrom < 0.1, "{}", catrom);
    assert!(details(Type::Lanczos3).percent_negative_weight() > 0.0);
}

#[test]
fn sample_triangle() {
    let mut buf = [9.0; 4];
    details(Type::Triangle).sample_into(-1.0, 1.0, &mut buf);
    assert_eq!(buf, [0.0, 0.5, 1.0, 0.5]);
}

#[test]
fn probe_reports_first_violation() {
    let d = details(Type::Triangle);
    let (x, v) = d.probe(0.0, 1.0, 0.25, 0.6, 1.0).unwrap_err();
    assert_eq!((x, v), (0.5, 0.5));
    assert!(d.probe(0.0, 1.0, 0.0, 0.0, 1.0).is_ok());
    assert!(d.probe(0.5, 1.0, -0.05, 0.0, 1.0).is_ok());
}

#[test]
fn custom_filters() {
    assert!(Filter::new(Kernel::Triangle, 0.0).is_err());
    assert!(Filter::new(Kernel::Triangle, -1.0).is_err());
    assert!(Filter::new(Kernel::Triangle, f64::NAN).is_err());
    assert!(Filter::new(Kernel::Gaussian { sigma: 0.0 }, 1.0).is_err());
    assert!(Filter::new(Kernel::Lanczos { taps: f64::INFINITY }, 1.0).is_err());
    assert!(Filter::new(Kernel::Cubic { b: f64::NAN, c: 0.0 }, 2.0).is_err());

    let f = Filter::new(Kernel::Cubic { b: 0.0, c: 0.75 }, 2.0).unwrap();
    let d = details(Type::Custom(f));
    assert_eq!(d.support(), 2.0);
    assert_eq!(d.filter().kernel(), Kernel::Cubic { b: 0.0, c: 0.75 });
    assert_eq!(Type::Custom(f).filter(), f);
    check_shape(Type::Custom(f), Some((1.0, 2.0)), Some((0.9, 0.2)));
}
