//! Numeric policy compliance tests.
//!
//! These tests pin down the degenerate-input behavior of every kernel and
//! accumulator: empty ranges, single elements, zero strides, excessive
//! corrections and `NaN` propagation through sliding windows.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::unreadable_literal)]

mod common;

use common::{approx_eq, EPSILON};
use num_complex::Complex;

use strided_stats::incr::{
    Accumulator, Mean, MovingCovariance, MovingMean, MovingMeanStdev, MovingStdev,
    MovingVariance, Stdev, Variance, WeightedMean,
};
use strided_stats::kernels::{
    asum, axpy, copy, copy_complex, dot, dot_ndarray, mean, mean_variance, nrm2, rot, scal,
    stdev, stdev_ndarray, swap, variance, variance_ndarray,
};
use strided_stats::{offset_from_stride, Error, StridedLayout};

// ==================== Empty Range Tests ====================
// "N == 0: reductions return their identity or NaN, transforms are no-ops"

#[test]
fn numeric_policy_empty_reductions() {
    let x = [1.0_f64, 2.0, 3.0];
    assert_eq!(dot(0, &x, 1, &x, 1), 0.0);
    assert_eq!(asum(0, &x, 1), 0.0);
    assert_eq!(nrm2(0, &x, 1), 0.0);
    assert!(mean(0, &x, 1).is_nan());
    assert!(variance(0, 1, &x, 1).is_nan());
    assert!(stdev(0, 0, &x, 1).is_nan());
    let (mu, var) = mean_variance(0, 1, &x, 1);
    assert!(mu.is_nan() && var.is_nan());
}

#[test]
fn numeric_policy_empty_transforms_leave_buffers_untouched() {
    let x = [1.0_f64, 2.0, 3.0];
    let mut y = [9.0_f64, 8.0, 7.0];
    copy(0, &x, 1, &mut y, 1);
    assert_eq!(y, [9.0, 8.0, 7.0]);

    let mut a = [1.0_f64, 2.0];
    let mut b = [3.0_f64, 4.0];
    swap(0, &mut a, 1, &mut b, 1);
    rot(0, &mut a, 1, &mut b, 1, 0.0, 1.0);
    assert_eq!((a, b), ([1.0, 2.0], [3.0, 4.0]));

    scal(0, 5.0, &mut a, 1);
    axpy(0, 5.0, &x, 1, &mut b, 1);
    assert_eq!((a, b), ([1.0, 2.0], [3.0, 4.0]));
}

#[test]
fn numeric_policy_axpy_zero_alpha_is_noop() {
    let x = [f64::NAN, f64::INFINITY];
    let mut y = [1.0_f64, 2.0];
    axpy(2, 0.0, &x, 1, &mut y, 1);
    assert_eq!(y, [1.0, 2.0]);
}

// ==================== Offset Tests ====================

#[test]
fn numeric_policy_offset_from_stride() {
    assert_eq!(offset_from_stride(5, 2), 0);
    assert_eq!(offset_from_stride(5, 0), 0);
    assert_eq!(offset_from_stride(5, -2), 8);
    assert_eq!(offset_from_stride(0, -3), 0);
    assert_eq!(offset_from_stride(1, -3), 0);
}

#[test]
fn numeric_policy_layout_validation() {
    assert!(StridedLayout::new(3, -2, 4).validate(5).is_ok());
    assert!(matches!(
        StridedLayout::new(3, -2, 3).validate(5),
        Err(Error::OutOfBounds { .. })
    ));
    assert!(StridedLayout::new(0, 7, 100).validate(0).is_ok());
}

#[test]
fn numeric_policy_negative_stride_reverses_order() {
    let x = [1.0_f64, 2.0, 3.0];
    let y = [4.0_f64, 5.0, 6.0];
    // x forward against y backward: 1*6 + 2*5 + 3*4
    assert_eq!(dot(3, &x, 1, &y, -1), 28.0);
    assert_eq!(dot_ndarray(3, &x, 1, 0, &y, -1, 2), 28.0);
}

// ==================== Single Element And Zero Stride Tests ====================

#[test]
fn numeric_policy_single_element_variance() {
    let x = [4.0_f64];
    assert_eq!(variance(1, 0, &x, 1), 0.0);
    assert!(variance(1, 1, &x, 1).is_nan());
    assert_eq!(mean(1, &x, 1), 4.0);
}

#[test]
fn numeric_policy_zero_stride_variance_is_zero() {
    let x = [2.5_f64, 100.0, -100.0];
    assert_eq!(variance_ndarray(10, 1, &x, 0, 0), 0.0);
    assert_eq!(stdev_ndarray(10, 0, &x, 0, 1), 0.0);
    assert!(variance_ndarray(10, 10, &x, 0, 0).is_nan());
}

#[test]
fn numeric_policy_zero_stride_nan_value() {
    let x = [f64::NAN];
    assert!(variance_ndarray(4, 0, &x, 0, 0).is_nan());
}

#[test]
fn numeric_policy_excessive_correction() {
    let x = [1.0_f64, 2.0, 3.0];
    assert!(variance(3, 3, &x, 1).is_nan());
    assert!(variance(3, 4, &x, 1).is_nan());
    assert!(approx_eq(variance(3, 2, &x, 1), 2.0, EPSILON));
}

// ==================== NaN Propagation Tests ====================

#[test]
fn numeric_policy_nan_propagates_through_reductions() {
    let x = [1.0_f64, f64::NAN, 3.0, 4.0, 5.0, 6.0, 7.0];
    assert!(dot(7, &x, 1, &x, 1).is_nan());
    assert!(asum(7, &x, 1).is_nan());
    assert!(nrm2(7, &x, 1).is_nan());
    assert!(mean(7, &x, 1).is_nan());
    assert!(variance(7, 1, &x, 1).is_nan());
    // The NaN is skipped by a stride of 2.
    assert!(!variance(4, 1, &x, 2).is_nan());
}

#[test]
fn numeric_policy_nrm2_infinity() {
    let x = [1.0_f64, f64::INFINITY];
    assert_eq!(nrm2(2, &x, 1), f64::INFINITY);
    let both = [f64::NEG_INFINITY, 3.0, f64::INFINITY];
    assert_eq!(nrm2(3, &both, 1), f64::INFINITY);
}

#[test]
fn numeric_policy_complex_copy_preserves_nan_parts() {
    let x = [Complex::new(f64::NAN, 1.0)];
    let mut y = [Complex::new(0.0_f64, 0.0)];
    copy_complex(1, &x, 1, &mut y, 1);
    assert!(y[0].re.is_nan());
    assert_eq!(y[0].im, 1.0);
}

// ==================== Accumulator Sentinel Tests ====================

#[test]
fn numeric_policy_accumulators_empty_value_is_none() {
    assert_eq!(Mean::<f64>::new().value(), None);
    assert_eq!(Variance::<f64>::new().value(), None);
    assert_eq!(Stdev::<f64>::new().value(), None);
    assert_eq!(WeightedMean::<f64>::new().value(), None);
    assert_eq!(MovingMean::<f64>::new(3).unwrap().value(), None);
    assert_eq!(MovingStdev::<f64>::new(3).unwrap().value(), None);
    assert_eq!(MovingCovariance::<f64>::new(3).unwrap().value(), None);
    assert_eq!(MovingMeanStdev::<f64>::new(3).unwrap().value(), None);
}

#[test]
fn numeric_policy_zero_window_rejected() {
    assert!(matches!(
        MovingMean::<f64>::new(0),
        Err(Error::InvalidWindow { window: 0, .. })
    ));
    assert!(MovingVariance::<f64>::new(0).is_err());
    assert!(MovingStdev::<f64>::with_mean(0, 1.0).is_err());
    assert!(MovingCovariance::<f64>::new(0).is_err());
}

#[test]
fn numeric_policy_single_observation_stdev_is_zero() {
    let mut acc = Stdev::<f64>::new();
    assert_eq!(acc.observe(42.0), 0.0);

    let mut moving = MovingStdev::<f64>::new(5).unwrap();
    assert_eq!(moving.observe(42.0), 0.0);
}

#[test]
fn numeric_policy_window_of_one() {
    let mut acc = MovingStdev::<f64>::new(1).unwrap();
    assert_eq!(acc.observe_all([1.0, 5.0, -3.0]), vec![0.0, 0.0, 0.0]);
    assert!(acc.observe(f64::NAN).is_nan());
    assert_eq!(acc.observe(2.0), 0.0);
}

// ==================== Windowed NaN Policy Tests ====================
// "NaN poisons the statistic until it leaves the window"

#[test]
fn numeric_policy_nan_window_lifecycle() {
    let mut acc = MovingVariance::<f64>::new(3).unwrap();
    let out = acc.observe_all([1.0, 2.0, f64::NAN, 4.0, 5.0, 6.0, 7.0]);

    assert!(!out[0].is_nan());
    assert!(!out[1].is_nan());
    assert!(out[2].is_nan(), "NaN observation poisons immediately");
    assert!(out[3].is_nan(), "NaN still in window");
    assert!(out[4].is_nan(), "NaN still in window");
    assert!(approx_eq(out[5], 1.0, EPSILON), "window [4, 5, 6]");
    assert!(approx_eq(out[6], 1.0, EPSILON), "window [5, 6, 7]");
}

#[test]
fn numeric_policy_nan_forces_full_count() {
    let mut acc = MovingMean::<f64>::new(4).unwrap();
    acc.observe(1.0);
    acc.observe(f64::NAN);
    assert_eq!(acc.count(), 4);
    acc.observe(2.0);
    assert_eq!(acc.count(), 4);
}

#[test]
fn numeric_policy_nan_rescan_matches_fresh_accumulator() {
    let data = [3.0_f64, f64::NAN, 1.5, -2.0, 8.25, 0.5];
    let mut acc = MovingMeanStdev::<f64>::new(3).unwrap();
    let out = acc.observe_all(data);

    let mut fresh = MovingMeanStdev::<f64>::new(3).unwrap();
    let want = fresh.observe_all([-2.0, 8.25, 0.5]);
    assert!(approx_eq(out[5].mean, want[2].mean, EPSILON));
    assert!(approx_eq(out[5].stdev, want[2].stdev, EPSILON));
}

#[test]
fn numeric_policy_nan_in_covariance_either_side() {
    let mut acc = MovingCovariance::<f64>::new(2).unwrap();
    acc.observe((1.0, 1.0));
    assert!(acc.observe((2.0, f64::NAN)).is_nan());
    assert!(acc.observe((3.0, 3.0)).is_nan());
    assert!(approx_eq(acc.observe((4.0, 5.0)), 1.0, EPSILON));
}

#[test]
fn numeric_policy_unbounded_nan_is_permanent() {
    let mut acc = Variance::<f64>::new();
    acc.observe(1.0);
    acc.observe(f64::NAN);
    for v in [1.0, 2.0, 3.0] {
        assert!(acc.observe(v).is_nan());
    }

    let mut wm = WeightedMean::<f64>::new();
    wm.observe((1.0, f64::NAN));
    assert!(wm.observe((2.0, 1.0)).is_nan());
}

#[test]
fn numeric_policy_reset_clears_poison() {
    let mut acc = MovingStdev::<f64>::new(3).unwrap();
    acc.observe(f64::NAN);
    acc.reset();
    assert_eq!(acc.count(), 0);
    assert_eq!(acc.value(), None);
    assert_eq!(acc.observe(1.0), 0.0);
}
