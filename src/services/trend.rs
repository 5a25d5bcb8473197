/// Number of points in the recent / older comparison windows
pub const WINDOW: usize = 3;

/// Recent vs older window averages over a chronologically ordered series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub recent_avg: f64,
    pub older_avg: f64,
    /// (recent - older) / older, or 0 when the older average is not positive
    pub growth_ratio: f64,
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Compare the trailing window against the leading one.
///
/// The recent average covers the last `min(WINDOW, n)` values. The older
/// average covers the first `WINDOW` values, but only when at least `WINDOW`
/// values remain outside the recent window; shorter series fall back to
/// `older_avg = recent_avg`, which reads as "no trend yet" downstream.
pub fn sliding_trend(values: &[f64]) -> Trend {
    if values.is_empty() {
        return Trend { recent_avg: 0.0, older_avg: 0.0, growth_ratio: 0.0 };
    }

    let n = values.len();
    let recent_avg = mean(&values[n.saturating_sub(WINDOW)..]);
    let older_avg = if n >= 2 * WINDOW {
        mean(&values[..WINDOW])
    } else {
        recent_avg
    };

    let growth_ratio = if older_avg > 0.0 {
        (recent_avg - older_avg) / older_avg
    } else {
        0.0
    };

    Trend { recent_avg, older_avg, growth_ratio }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_is_flat() {
        let trend = sliding_trend(&[]);
        assert_eq!(trend.recent_avg, 0.0);
        assert_eq!(trend.older_avg, 0.0);
        assert_eq!(trend.growth_ratio, 0.0);
    }

    #[test]
    fn short_series_has_no_trend() {
        let trend = sliding_trend(&[10.0, 20.0, 30.0, 40.0]);
        // recent = mean(20, 30, 40), older falls back to recent
        assert!((trend.recent_avg - 30.0).abs() < 1e-9);
        assert_eq!(trend.older_avg, trend.recent_avg);
        assert_eq!(trend.growth_ratio, 0.0);
    }

    #[test]
    fn growth_ratio_compares_first_and_last_windows() {
        let trend = sliding_trend(&[10.0, 10.0, 10.0, 0.0, 20.0, 20.0, 20.0]);
        assert!((trend.older_avg - 10.0).abs() < 1e-9);
        assert!((trend.recent_avg - 20.0).abs() < 1e-9);
        assert!((trend.growth_ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn decline_is_negative_ratio() {
        let trend = sliding_trend(&[20.0, 20.0, 20.0, 15.0, 10.0, 10.0, 10.0]);
        assert!(trend.growth_ratio < -0.1);
    }

    #[test]
    fn zero_older_average_yields_zero_ratio() {
        let trend = sliding_trend(&[0.0, 0.0, 0.0, 5.0, 5.0, 5.0]);
        assert_eq!(trend.older_avg, 0.0);
        assert_eq!(trend.growth_ratio, 0.0);
    }
}
