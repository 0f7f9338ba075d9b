//! One-dimensional piecewise-linear interpolation over a normalized axis
//!
//! Small numeric kernel used by the resize transformer. Sequences of
//! different lengths are aligned by placing their samples on positions
//! evenly spaced over the closed interval [0, 1] and evaluating a linear
//! interpolant of one sequence at the positions of the other.

/// `n` positions evenly spaced over the closed interval [0, 1].
///
/// The first position is exactly `0.0` and the last exactly `1.0`. A single
/// position collapses to `[0.0]`.
pub fn linspace_unit(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let denom = (n - 1) as f64;
            (0..n).map(|i| i as f64 / denom).collect()
        }
    }
}

/// Evaluate the piecewise-linear interpolant of `(xs, ys)` at `queries`.
///
/// `xs` must be strictly increasing with at least two knots, `ys` the same
/// length, and every query within `[xs[0], xs[n-1]]` (no extrapolation).
/// Each query is located with a binary search and blended as
/// `(1 - w) * y0 + w * y1`, so a query that lands exactly on a knot
/// reproduces that knot's value exactly and in-range results never leave the
/// range of the two neighboring samples.
///
/// # Panics
/// Panics if `xs` and `ys` differ in length or hold fewer than two knots.
pub fn interpolate_linear(xs: &[f64], ys: &[f64], queries: &[f64]) -> Vec<f64> {
    assert_eq!(
        xs.len(),
        ys.len(),
        "knot positions and values must have the same length"
    );
    assert!(
        xs.len() >= 2,
        "interpolation requires at least two knots, got {}",
        xs.len()
    );

    queries
        .iter()
        .map(|&q| {
            // index of the first knot strictly above q, clamped to a segment
            let hi = xs.partition_point(|&x| x <= q).clamp(1, xs.len() - 1);
            let lo = hi - 1;
            let w = (q - xs[lo]) / (xs[hi] - xs[lo]);
            (1.0 - w) * ys[lo] + w * ys[hi]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_unit_endpoints_and_spacing() {
        let xs = linspace_unit(5);
        assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace_unit(1), vec![0.0]);
        assert!(linspace_unit(0).is_empty());

        let xs = linspace_unit(1000);
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[999], 1.0);
    }

    #[test]
    fn interpolation_at_knots_is_exact() {
        let xs = linspace_unit(4);
        let ys = vec![1.5, -2.0, 0.25, 7.0];
        let out = interpolate_linear(&xs, &ys, &xs);
        assert_eq!(out, ys);
    }

    #[test]
    fn interpolation_between_knots_is_linear_blend() {
        let xs = vec![0.0, 0.5, 1.0];
        let ys = vec![0.0, 10.0, 20.0];
        let out = interpolate_linear(&xs, &ys, &[0.25, 0.75]);
        assert!((out[0] - 5.0).abs() < 1e-12);
        assert!((out[1] - 15.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "at least two knots")]
    fn interpolation_rejects_single_knot() {
        interpolate_linear(&[0.0], &[1.0], &[0.0]);
    }

    #[test]
    fn interpolation_preserves_endpoints_bitwise() {
        let xs = linspace_unit(7);
        let ys = vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7];
        let out = interpolate_linear(&xs, &ys, &[0.0, 1.0]);
        assert_eq!(out[0], ys[0]);
        assert_eq!(out[1], ys[6]);
    }
}
