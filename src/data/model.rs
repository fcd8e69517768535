use std::ops::Range;

use crate::error::FluxError;

// ---------------------------------------------------------------------------
// FluxSeries – thickness axis paired with tallied flux
// ---------------------------------------------------------------------------

/// Flux values paired with their thickness positions.
///
/// Both vectors always have the same non-zero length; construct through
/// [`FluxSeries::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct FluxSeries {
    thickness: Vec<f64>,
    flux: Vec<f64>,
}

impl FluxSeries {
    /// Pair a thickness axis with flux values, rejecting mismatched lengths.
    pub fn new(thickness: Vec<f64>, flux: Vec<f64>) -> Result<Self, FluxError> {
        if thickness.len() != flux.len() {
            return Err(FluxError::LengthMismatch {
                thickness: thickness.len(),
                flux: flux.len(),
            });
        }
        if flux.is_empty() {
            return Err(FluxError::EmptySeries);
        }
        Ok(Self { thickness, flux })
    }

    /// Thickness axis (x), in metres.
    pub fn thickness(&self) -> &[f64] {
        &self.thickness
    }

    /// Flux values (y).
    pub fn flux(&self) -> &[f64] {
        &self.flux
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.flux.len()
    }

    /// Never true for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.flux.is_empty()
    }

    /// `(x, y)` pairs in input order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.thickness.iter().copied().zip(self.flux.iter().copied())
    }

    /// Points where both coordinates are finite.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points().filter(|(x, y)| x.is_finite() && y.is_finite())
    }

    /// Count of points dropped by [`finite_points`](Self::finite_points).
    pub fn non_finite_count(&self) -> usize {
        self.len() - self.finite_points().count()
    }

    /// Plot ranges over the finite points, padded by 5% on each side.
    ///
    /// A flat extent is widened to ±0.5 (or ±5% of its magnitude) so the
    /// chart never gets an empty range.
    pub fn bounds(&self) -> (Range<f64>, Range<f64>) {
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for (x, y) in self.finite_points() {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if x_min > x_max {
            // no finite points at all
            return (0.0..1.0, 0.0..1.0);
        }
        (padded(x_min, x_max), padded(y_min, y_max))
    }
}

/// Largest magnitude a plot range end may take, keeping the span itself
/// finite for the chart's own arithmetic.
const RANGE_LIMIT: f64 = f64::MAX / 4.0;

fn padded(min: f64, max: f64) -> Range<f64> {
    // scale before subtracting so values at opposite ends of f64 don't overflow
    let pad = max / 20.0 - min / 20.0;
    let (lo, hi) = if pad.abs() < f64::EPSILON {
        let half = if min.abs() > f64::EPSILON {
            min.abs() * 0.05
        } else {
            0.5
        };
        (min - half, max + half)
    } else {
        (min - pad, max + pad)
    };
    let (lo, hi) = (
        lo.clamp(-RANGE_LIMIT, RANGE_LIMIT),
        hi.clamp(-RANGE_LIMIT, RANGE_LIMIT),
    );
    if lo < hi {
        lo..hi
    } else {
        // both ends saturated at the same limit
        hi - hi.abs() * 0.1..hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_length_mismatch() {
        let err = FluxSeries::new(vec![0.0, 0.5, 1.0], vec![1.0, 2.0]).unwrap_err();
        assert!(matches!(
            err,
            FluxError::LengthMismatch { thickness: 3, flux: 2 }
        ));
        assert!(err.to_string().contains("same first dimension"));
    }

    #[test]
    fn rejects_empty() {
        let err = FluxSeries::new(Vec::new(), Vec::new()).unwrap_err();
        assert!(matches!(err, FluxError::EmptySeries));
    }

    #[test]
    fn bounds_are_padded() {
        let series = FluxSeries::new(vec![0.0, 1.0], vec![10.0, 20.0]).unwrap();
        let (xr, yr) = series.bounds();
        assert!((xr.start + 0.05).abs() < 1e-12);
        assert!((xr.end - 1.05).abs() < 1e-12);
        assert!((yr.start - 9.5).abs() < 1e-12);
        assert!((yr.end - 20.5).abs() < 1e-12);
    }

    #[test]
    fn bounds_skip_non_finite_and_widen_flat_range() {
        let series = FluxSeries::new(vec![0.0, 0.5, 1.0], vec![4.0, f64::NAN, 4.0]).unwrap();
        assert_eq!(series.non_finite_count(), 1);
        let (_, yr) = series.bounds();
        assert!(yr.start < 4.0 && yr.end > 4.0);
        assert!((yr.end - yr.start - 0.4).abs() < 1e-12);
    }

    #[test]
    fn bounds_stay_finite_at_extremes_of_f64() {
        let series = FluxSeries::new(vec![0.0, 1.0], vec![-1e308, 1e308]).unwrap();
        let (xr, yr) = series.bounds();
        assert!(xr.start.is_finite() && xr.end.is_finite());
        assert!(yr.start.is_finite() && yr.end.is_finite());
        assert!(yr.start < 0.0 && yr.end > 0.0);
        assert!((yr.end - yr.start).is_finite());

        let near_max = FluxSeries::new(vec![0.0], vec![f64::MAX]).unwrap();
        let (_, yr) = near_max.bounds();
        assert!(yr.start.is_finite() && yr.end.is_finite());
        assert!(yr.start < yr.end);
    }

    #[test]
    fn bounds_fallback_without_finite_points() {
        let series = FluxSeries::new(vec![0.0], vec![f64::INFINITY]).unwrap();
        assert_eq!(series.bounds(), (0.0..1.0, 0.0..1.0));
    }
}
