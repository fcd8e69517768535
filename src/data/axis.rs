// ---------------------------------------------------------------------------
// Evenly spaced coordinates
// ---------------------------------------------------------------------------

/// `n` evenly spaced values over the closed interval `[start, end]`.
///
/// The first value is exactly `start` and the last exactly `end`, so
/// `linspace(0.0, 1.0, 10)` ends on `1.0` rather than `9 * (1/9)`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_points_over_unit_interval() {
        let xs = linspace(0.0, 1.0, 10);
        assert_eq!(xs.len(), 10);
        for (i, x) in xs.iter().enumerate() {
            assert!((x - i as f64 / 9.0).abs() < 1e-12, "x[{i}] = {x}");
        }
        assert_eq!(xs[0], 0.0);
        assert_eq!(xs[9], 1.0);
    }

    #[test]
    fn degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.5, 7.0, 1), vec![2.5]);
        assert_eq!(linspace(2.5, 7.0, 2), vec![2.5, 7.0]);
    }

    #[test]
    fn descending_interval() {
        let xs = linspace(1.0, -1.0, 5);
        assert_eq!(xs, vec![1.0, 0.5, 0.0, -0.5, -1.0]);
    }
}
