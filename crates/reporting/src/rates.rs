//! Conversion-rate arithmetic over already-fetched funnel counts.
//!
//! Pure functions, no I/O. A zero denominator always yields `0.0`, never
//! NaN or infinity.

/// Rate assigned to the top-of-funnel baseline step.
pub const BASELINE_RATE: f64 = 100.0;

/// Step-over-step conversion percentage, rounded to one decimal place.
pub fn step_conversion_rate(current: u64, previous: u64) -> f64 {
    percentage(current, previous)
}

/// Conversion percentage from the baseline step, rounded to one decimal
/// place.
pub fn end_to_end_rate(last: u64, baseline: u64) -> f64 {
    percentage(last, baseline)
}

/// Step-over-step rate for position `index` within ordered counts. Index 0
/// is the baseline and always converts at 100%.
pub fn step_rate_at(counts: &[u64], index: usize) -> f64 {
    if index == 0 {
        return BASELINE_RATE;
    }
    step_conversion_rate(counts[index], counts[index - 1])
}

/// Render a rate with exactly one decimal, e.g. `"37.5"`.
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.1}")
}

fn percentage(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    round_to_tenth(numerator as f64 / denominator as f64 * 100.0)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_rate_is_always_100() {
        for counts in [[1000, 400, 150, 60], [0, 0, 0, 0], [7, 9, 2, 2]] {
            assert_eq!(step_rate_at(&counts, 0), 100.0);
        }
    }

    #[test]
    fn test_reference_funnel_rates() {
        let counts = [1000u64, 400, 150, 60];
        assert_eq!(step_rate_at(&counts, 0), 100.0);
        assert_eq!(step_rate_at(&counts, 1), 40.0);
        assert_eq!(step_rate_at(&counts, 2), 37.5);
        assert_eq!(step_rate_at(&counts, 3), 40.0);
        assert_eq!(end_to_end_rate(counts[3], counts[0]), 6.0);
    }

    #[test]
    fn test_zero_denominator_yields_zero_not_nan() {
        let counts = [0u64, 0, 0, 0];
        for i in 1..4 {
            let rate = step_rate_at(&counts, i);
            assert_eq!(rate, 0.0);
            assert!(rate.is_finite());
        }
        assert_eq!(end_to_end_rate(0, 0), 0.0);
        assert_eq!(end_to_end_rate(5, 0), 0.0);
    }

    #[test]
    fn test_rates_above_100_are_allowed() {
        // Raw counts are not guaranteed monotonic under noisy
        // instrumentation.
        assert_eq!(step_conversion_rate(20, 10), 200.0);
        assert_eq!(end_to_end_rate(15, 10), 150.0);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        assert_eq!(step_conversion_rate(1, 3), 33.3);
        assert_eq!(step_conversion_rate(2, 3), 66.7);
        assert_eq!(step_conversion_rate(1, 7), 14.3);
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(40.0), "40.0");
        assert_eq!(format_rate(37.5), "37.5");
        assert_eq!(format_rate(0.0), "0.0");
        assert_eq!(format_rate(100.0), "100.0");
    }
}
