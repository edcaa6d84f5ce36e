//! Numeric helpers shared by the indicator library.
//!
//! All helpers operate on a close-price series and return `None` when the
//! series is shorter than the requested period. "No value" is always an
//! explicit `None`, never a sentinel zero.

/// Arithmetic mean of the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let sum: f64 = values[values.len() - period..].iter().sum();
    Some(sum / period as f64)
}

/// Exponential moving average of the last `period` values.
///
/// Seeded from the raw value at `len - period` and smoothed forward with
/// `k = 2 / (period + 1)`. The seed is the raw close, not a warm SMA; this
/// matches the production series this engine must stay numerically aligned
/// with.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let k = 2.0 / (period as f64 + 1.0);
    let start = values.len() - period;
    let mut ema = values[start];
    for &v in &values[start + 1..] {
        ema = v * k + ema * (1.0 - k);
    }
    Some(ema)
}

/// Population standard deviation of the last `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance = window
        .iter()
        .map(|v| (v - mean).powi(2))
        .sum::<f64>()
        / period as f64;
    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sma_short_series_is_none() {
        assert_eq!(sma(&[1.0, 2.0], 3), None);
        assert_eq!(sma(&[], 1), None);
    }

    #[test]
    fn sma_takes_tail() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(sma(&v, 2).unwrap(), 3.5);
    }

    #[test]
    fn ema_seeds_from_raw_close() {
        // period == len: seed is the first value, smoothed across the rest
        let v = [10.0, 11.0, 12.0];
        let k = 2.0 / 4.0;
        let expected = {
            let e1 = 11.0 * k + 10.0 * (1.0 - k);
            12.0 * k + e1 * (1.0 - k)
        };
        assert_relative_eq!(ema(&v, 3).unwrap(), expected);
    }

    #[test]
    fn ema_of_single_period_is_last_value() {
        assert_relative_eq!(ema(&[5.0, 7.0, 9.0], 1).unwrap(), 9.0);
    }

    #[test]
    fn stddev_of_constant_series_is_zero() {
        assert_relative_eq!(standard_deviation(&[4.0; 10], 5).unwrap(), 0.0);
    }

    #[test]
    fn stddev_population_form() {
        // {1..=5}: population variance 2.0
        let v = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(standard_deviation(&v, 5).unwrap(), 2.0_f64.sqrt());
    }
}
