use crate::levels::bands::{classify_bands, ENGAGEMENT_BANDS, MASTERY_BANDS};
use crate::levels::{EngagementLevel, MasteryLevel};

/// Restrict `value` to `[min, max]`.
///
/// `min` must not exceed `max`; a flipped range is a caller bug.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    debug_assert!(min <= max, "clamp range flipped: min {} > max {}", min, max);
    value.max(min).min(max)
}

/// Round `value` to `decimal_places` decimals, half away from zero.
pub fn round_to(value: f64, decimal_places: u32) -> f64 {
    let factor = 10f64.powi(decimal_places as i32);
    (value * factor).round() / factor
}

/// Percentage of `numerator` over `denominator`, rounded to
/// `decimal_places` decimals.
///
/// Safe-division policy: a zero denominator reports `0.0` instead of
/// failing, so callers never see a division error for missing totals.
pub fn calculate_percentage(numerator: f64, denominator: f64, decimal_places: u32) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    round_to(numerator / denominator * 100.0, decimal_places)
}

/// Arithmetic mean of `values`.
///
/// Empty-input policy: no samples reports `0.0` instead of failing.
pub fn calculate_average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rescale `score` from `[min_val, max_val]` onto `[0, 100]`.
///
/// Inputs outside the source range saturate to 0 or 100 rather than
/// extrapolating. Degenerate-range policy: `max_val == min_val` reports
/// `0.0` instead of dividing by zero.
pub fn normalize_score(score: f64, min_val: f64, max_val: f64) -> f64 {
    debug_assert!(
        min_val <= max_val,
        "normalize range flipped: min {} > max {}",
        min_val,
        max_val
    );
    if max_val == min_val {
        return 0.0;
    }
    let normalized = (score - min_val) / (max_val - min_val) * 100.0;
    clamp(normalized, 0.0, 100.0)
}

/// Map a mastery score to its level using the built-in thresholds.
///
/// Scores outside `[0, 100]` saturate to the terminal bands.
pub fn categorize_mastery_level(mastery_score: f64) -> MasteryLevel {
    classify_bands(&MASTERY_BANDS, mastery_score)
}

/// Map an engagement score to its level using the built-in thresholds.
///
/// Scores outside `[0, 100]` saturate to the terminal bands.
pub fn categorize_engagement_level(engagement_score: f64) -> EngagementLevel {
    classify_bands(&ENGAGEMENT_BANDS, engagement_score)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn clamp_always_in_bounds(value in -1000.0..1000.0f64, a in -500.0..500.0f64, b in -500.0..500.0f64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let clamped = clamp(value, lo, hi);
            assert!(clamped >= lo && clamped <= hi);
        }

        #[test]
        fn clamp_identity_inside_range(value in 0.0..100.0f64) {
            assert_eq!(clamp(value, 0.0, 100.0), value);
        }

        #[test]
        fn percentage_zero_denominator_is_zero(numerator in -1e9..1e9f64) {
            assert_eq!(calculate_percentage(numerator, 0.0, 1), 0.0);
        }

        #[test]
        fn percentage_never_nan(numerator in -1e6..1e6f64, denominator in -1e6..1e6f64) {
            assert!(!calculate_percentage(numerator, denominator, 1).is_nan());
        }

        #[test]
        fn normalize_always_saturated(score in -1e6..1e6f64) {
            let normalized = normalize_score(score, 0.0, 100.0);
            assert!((0.0..=100.0).contains(&normalized));
        }

        #[test]
        fn normalize_monotonic(a in -50.0..150.0f64, b in -50.0..150.0f64) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            assert!(normalize_score(lo, 0.0, 100.0) <= normalize_score(hi, 0.0, 100.0));
        }

        #[test]
        fn categorization_total(score in -1e6..1e6f64) {
            // Any real score maps to some band without panicking.
            let _ = categorize_mastery_level(score);
            let _ = categorize_engagement_level(score);
        }

        #[test]
        fn categorization_saturates_to_terminal_bands(score in 100.0..1e6f64) {
            assert_eq!(categorize_mastery_level(score), MasteryLevel::Mastered);
            assert_eq!(categorize_engagement_level(score), EngagementLevel::Engaged);
            assert_eq!(categorize_mastery_level(-score), MasteryLevel::NotStarted);
            assert_eq!(categorize_engagement_level(-score), EngagementLevel::Critical);
        }
    }
}
