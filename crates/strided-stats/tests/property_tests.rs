//! Property-based tests for kernels and accumulators using proptest.
//!
//! These tests verify invariant properties that must hold for all valid
//! layouts and inputs, using randomly generated data to find edge cases.

#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]

mod common;

use common::{approx_eq, gather, naive_dot, naive_moving_stdev, naive_variance, LOOSE_EPSILON};
use num_complex::Complex;
use proptest::prelude::*;

use strided_stats::incr::{
    Accumulator, Mean, MovingCovariance, MovingStdev, MovingVariance, WeightedMean,
};
use strided_stats::kernels::{
    asum, axpy_ndarray, copy_ndarray, dot, dot_ndarray, nrm2, rot_complex_ndarray, rot_ndarray,
    scal_ndarray, stdev, swap_ndarray, variance, variance_ndarray,
};
use strided_stats::StridedLayout;

// ==================== Test Data Generators ====================

/// A strided view: `(stride, offset, buffer)` addressing `n` logical elements.
#[derive(Debug, Clone)]
struct View {
    stride: isize,
    offset: usize,
    buf: Vec<f64>,
}

/// Minimum buffer length for `n` elements at `stride`, before padding.
fn span(n: usize, stride: isize) -> usize {
    if n == 0 {
        1
    } else {
        (n - 1) * stride.unsigned_abs() + 1
    }
}

fn arb_view(n: usize) -> impl Strategy<Value = View> {
    (-3isize..=3, 0usize..4).prop_flat_map(move |(stride, pad)| {
        let len = span(n, stride) + pad;
        let offset = if stride < 0 {
            (n.max(1) - 1) * stride.unsigned_abs() + pad
        } else {
            pad
        };
        prop::collection::vec(-100.0..100.0_f64, len).prop_map(move |buf| View {
            stride,
            offset,
            buf,
        })
    })
}

/// Two independent views over `n` logical elements.
fn arb_view_pair(max_n: usize) -> impl Strategy<Value = (usize, View, View)> {
    (0usize..=max_n).prop_flat_map(|n| (Just(n), arb_view(n), arb_view(n)))
}

fn arb_series(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0..1000.0_f64, min_len..=max_len)
}

// ==================== Dot Product Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// dot(x, y) == dot(y, x) for every layout pair
    #[test]
    fn prop_dot_commutative((n, x, y) in arb_view_pair(40)) {
        let xy = dot_ndarray(n, &x.buf, x.stride, x.offset, &y.buf, y.stride, y.offset);
        let yx = dot_ndarray(n, &y.buf, y.stride, y.offset, &x.buf, x.stride, x.offset);
        prop_assert!(approx_eq(xy, yx, 1e-9 * (1.0 + xy.abs())));
    }

    /// Strided dot equals the naive dot of the gathered elements
    #[test]
    fn prop_dot_matches_gathered((n, x, y) in arb_view_pair(40)) {
        let got = dot_ndarray(n, &x.buf, x.stride, x.offset, &y.buf, y.stride, y.offset);
        let gx = gather(n, &x.buf, x.stride, x.offset);
        let gy = gather(n, &y.buf, y.stride, y.offset);
        let scale: f64 = gx.iter().zip(&gy).map(|(a, b)| (a * b).abs()).sum();
        prop_assert!((got - naive_dot(&gx, &gy)).abs() <= 1e-12 * (1.0 + scale));
    }

    /// Unrolled contiguous path agrees with one-at-a-time accumulation
    #[test]
    fn prop_dot_unroll_equivalence(
        (x, y) in (0usize..=240).prop_flat_map(|n| (
            prop::collection::vec(-100.0..100.0_f64, n),
            prop::collection::vec(-100.0..100.0_f64, n),
        ))
    ) {
        let n = x.len();
        let got = dot(n, &x, 1, &y, 1);
        let scale: f64 = x.iter().zip(&y).map(|(a, b)| (a * b).abs()).sum();
        prop_assert!((got - naive_dot(&x, &y)).abs() <= 1e-12 * (1.0 + scale));
    }

    /// nrm2(x) == sqrt(dot(x, x)) and asum is the sum of magnitudes
    #[test]
    fn prop_norms(x in arb_series(0, 60)) {
        let n = x.len();
        let norm = nrm2(n, &x, 1);
        prop_assert!(norm >= 0.0);
        prop_assert!(approx_eq(norm, dot(n, &x, 1, &x, 1).sqrt(), 1e-9 * (1.0 + norm)));
        let total: f64 = x.iter().map(|v| v.abs()).sum();
        prop_assert!(approx_eq(asum(n, &x, 1), total, 1e-9 * (1.0 + total)));
    }
}

// ==================== Transformation Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Copying twice yields the same destination as copying once
    #[test]
    fn prop_copy_idempotent((n, x, y) in arb_view_pair(40)) {
        let mut once = y.buf.clone();
        copy_ndarray(n, &x.buf, x.stride, x.offset, &mut once, y.stride, y.offset);
        let mut twice = y.buf.clone();
        copy_ndarray(n, &x.buf, x.stride, x.offset, &mut twice, y.stride, y.offset);
        copy_ndarray(n, &x.buf, x.stride, x.offset, &mut twice, y.stride, y.offset);
        prop_assert_eq!(&once, &twice);
        if n > 0 && y.stride != 0 {
            prop_assert_eq!(
                gather(n, &once, y.stride, y.offset),
                gather(n, &x.buf, x.stride, x.offset)
            );
        }
    }

    /// A zero-length copy leaves the destination untouched
    #[test]
    fn prop_copy_zero_length_noop(x in arb_view(3), y in arb_view(3)) {
        let mut dst = y.buf.clone();
        copy_ndarray(0, &x.buf, x.stride, x.offset, &mut dst, y.stride, y.offset);
        prop_assert_eq!(dst, y.buf);
    }

    /// Rotating by (c, s) then (c, -s) restores both vectors
    #[test]
    fn prop_rot_invertible(
        (n, x, y) in arb_view_pair(30).prop_filter("distinct slots", |(_, x, y)| x.stride != 0 && y.stride != 0),
        theta in -3.2..3.2_f64,
    ) {
        let (s, c) = theta.sin_cos();
        let mut bx = x.buf.clone();
        let mut by = y.buf.clone();
        rot_ndarray(n, &mut bx, x.stride, x.offset, &mut by, y.stride, y.offset, c, s);
        rot_ndarray(n, &mut bx, x.stride, x.offset, &mut by, y.stride, y.offset, c, -s);
        for (a, b) in bx.iter().zip(&x.buf).chain(by.iter().zip(&y.buf)) {
            prop_assert!(approx_eq(*a, *b, 1e-9));
        }
    }

    /// Complex rotation is invertible component-wise
    #[test]
    fn prop_rot_complex_invertible(
        pairs in prop::collection::vec((-50.0..50.0_f64, -50.0..50.0_f64, -50.0..50.0_f64, -50.0..50.0_f64), 0..30),
        theta in -3.2..3.2_f64,
    ) {
        let n = pairs.len();
        let x0: Vec<Complex<f64>> = pairs.iter().map(|p| Complex::new(p.0, p.1)).collect();
        let y0: Vec<Complex<f64>> = pairs.iter().map(|p| Complex::new(p.2, p.3)).collect();
        let (s, c) = theta.sin_cos();
        let (mut x, mut y) = (x0.clone(), y0.clone());
        let offset = n.saturating_sub(1);
        rot_complex_ndarray(n, &mut x, 1, 0, &mut y, -1, offset, c, s);
        rot_complex_ndarray(n, &mut x, 1, 0, &mut y, -1, offset, c, -s);
        for (a, b) in x.iter().zip(&x0).chain(y.iter().zip(&y0)) {
            prop_assert!(approx_eq(a.re, b.re, 1e-9) && approx_eq(a.im, b.im, 1e-9));
        }
    }

    /// Swapping twice is the identity
    #[test]
    fn prop_swap_involution((n, x, y) in arb_view_pair(30).prop_filter("distinct slots", |(_, x, y)| x.stride != 0 && y.stride != 0)) {
        let mut bx = x.buf.clone();
        let mut by = y.buf.clone();
        swap_ndarray(n, &mut bx, x.stride, x.offset, &mut by, y.stride, y.offset);
        swap_ndarray(n, &mut bx, x.stride, x.offset, &mut by, y.stride, y.offset);
        prop_assert_eq!(bx, x.buf);
        prop_assert_eq!(by, y.buf);
    }

    /// axpy with scal(alpha) matches element-wise arithmetic on the gathered view
    #[test]
    fn prop_axpy_scal((n, x, y) in arb_view_pair(30).prop_filter("distinct slots", |(_, _, y)| y.stride != 0), alpha in -4.0..4.0_f64) {
        let mut by = y.buf.clone();
        axpy_ndarray(n, alpha, &x.buf, x.stride, x.offset, &mut by, y.stride, y.offset);
        let gx = gather(n, &x.buf, x.stride, x.offset);
        let gy = gather(n, &y.buf, y.stride, y.offset);
        let got = gather(n, &by, y.stride, y.offset);
        for k in 0..n {
            prop_assert!(approx_eq(got[k], gy[k] + alpha * gx[k], 1e-9));
        }

        let mut bx = x.buf.clone();
        if x.stride != 0 {
            scal_ndarray(n, alpha, &mut bx, x.stride, x.offset);
            let scaled = gather(n, &bx, x.stride, x.offset);
            for k in 0..n {
                prop_assert!(approx_eq(scaled[k], alpha * gx[k], 1e-9));
            }
        }
    }

    /// Every layout generated for the tests validates against its buffer
    #[test]
    fn prop_generated_layouts_validate((n, x, _y) in arb_view_pair(30)) {
        let layout = StridedLayout::new(n, x.stride, x.offset);
        prop_assert!(layout.validate(x.buf.len()).is_ok());
        prop_assert!(layout.indices().all(|i| i < x.buf.len()));
    }
}

// ==================== Variance Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Variance of finite data is non-negative and stdev is its square root
    #[test]
    fn prop_variance_non_negative(data in arb_series(2, 80), correction in 0usize..=1) {
        let n = data.len();
        let var = variance(n, correction, &data, 1);
        prop_assert!(var >= 0.0);
        prop_assert!(approx_eq(stdev(n, correction, &data, 1), var.sqrt(), 1e-12 * (1.0 + var)));
        let naive = naive_variance(&data, correction);
        prop_assert!(approx_eq(var, naive, LOOSE_EPSILON * (1.0 + naive)));
    }

    /// Strided variance equals variance of the gathered view
    #[test]
    fn prop_variance_strided((n, x, _y) in arb_view_pair(40)) {
        let got = variance_ndarray(n, 1, &x.buf, x.stride, x.offset);
        let gx = gather(n, &x.buf, x.stride, x.offset);
        if x.stride == 0 && n > 1 {
            prop_assert_eq!(got, 0.0);
        } else {
            let want = naive_variance(&gx, 1);
            prop_assert!(approx_eq(got, want, LOOSE_EPSILON * (1.0 + want.abs())));
        }
    }
}

// ==================== Accumulator Properties ====================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Moving stdev matches recomputation over each window
    #[test]
    fn prop_moving_stdev_matches_recompute(data in arb_series(1, 60), window in 1usize..=8) {
        let mut acc = MovingStdev::new(window).unwrap();
        let got = acc.observe_all(data.iter().copied());
        let want = naive_moving_stdev(&data, window);
        for (g, w) in got.iter().zip(&want) {
            prop_assert!(approx_eq(*g, *w, LOOSE_EPSILON * (1.0 + w.abs())));
        }
    }

    /// A NaN in a window of 3 poisons exactly three outputs, then the
    /// statistic equals a fresh window over the post-poison values
    #[test]
    fn prop_nan_poison_and_recovery(
        before in arb_series(0, 6),
        after in arb_series(3, 6),
    ) {
        let mut acc = MovingVariance::new(3).unwrap();
        for &x in &before {
            acc.observe(x);
        }
        prop_assert!(acc.observe(f64::NAN).is_nan());
        prop_assert!(acc.observe(after[0]).is_nan());
        prop_assert!(acc.observe(after[1]).is_nan());
        let recovered = acc.observe(after[2]);
        prop_assert!(!recovered.is_nan());

        let mut fresh = MovingVariance::new(3).unwrap();
        let want = fresh.observe_all(after[..3].iter().copied())[2];
        prop_assert!(approx_eq(recovered, want, LOOSE_EPSILON * (1.0 + want.abs())));
    }

    /// Equal weights reproduce the unweighted running mean
    #[test]
    fn prop_wmean_equal_weights(data in arb_series(1, 60), w in 0.1..10.0_f64) {
        let mut weighted = WeightedMean::new();
        let mut plain = Mean::new();
        for &x in &data {
            let a = weighted.observe((x, w));
            let b = plain.observe(x);
            prop_assert!(approx_eq(a, b, 1e-9 * (1.0 + b.abs())));
        }
    }

    /// Covariance of a series with itself equals its variance
    #[test]
    fn prop_covariance_self_is_variance(data in arb_series(1, 40), window in 1usize..=6) {
        let mut cov = MovingCovariance::new(window).unwrap();
        let mut var = MovingVariance::new(window).unwrap();
        for &x in &data {
            let c = cov.observe((x, x));
            let v = var.observe(x);
            prop_assert!(approx_eq(c, v, LOOSE_EPSILON * (1.0 + v.abs())));
        }
    }
}
