use crate::catalog::Trend;

/// Classifies a change percentage.
///
/// Changes inside `[-stable_band, stable_band]` are [`Trend::Stable`]. NaN is
/// treated as no change.
pub fn classify_trend(change: f64, stable_band: f64) -> Trend {
    let band = stable_band.abs();
    if change > band {
        Trend::Up
    } else if change < -band {
        Trend::Down
    } else {
        Trend::Stable
    }
}

/// Percentage change from `previous` to `current`, relative to the magnitude
/// of `previous`. Returns 0 when there is no previous value to compare with.
pub fn percent_change(current: f64, previous: f64) -> f64 {
    if previous == 0.0 || !previous.is_finite() || !current.is_finite() {
        return 0.0;
    }
    (current - previous) / previous.abs() * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_trend_default_band() {
        assert_eq!(classify_trend(12.5, 0.0), Trend::Up);
        assert_eq!(classify_trend(-0.1, 0.0), Trend::Down);
        assert_eq!(classify_trend(0.0, 0.0), Trend::Stable);
        assert_eq!(classify_trend(f64::NAN, 0.0), Trend::Stable);
    }

    #[test]
    fn test_classify_trend_with_band() {
        assert_eq!(classify_trend(0.4, 0.5), Trend::Stable);
        assert_eq!(classify_trend(-0.5, 0.5), Trend::Stable);
        assert_eq!(classify_trend(0.6, 0.5), Trend::Up);
        assert_eq!(classify_trend(-2.0, 0.5), Trend::Down);
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(110.0, 100.0), 10.0);
        assert_eq!(percent_change(50.0, 200.0), -75.0);
        assert_eq!(percent_change(-50.0, -100.0), 50.0);
        assert_eq!(percent_change(10.0, 0.0), 0.0);
    }
}
