use crate::aggregator::constants::{LIMIT_UPPER_BOUND, STATUS_LOWER_BOUND, STATUS_UPPER_BOUND};
use crate::models::{NutrientReading, NutrientStatus};

/// `consumed / target`, or 0 when the target is not positive.
///
/// A result that overflows to +Infinity saturates at `f64::MAX` so it still
/// reads as far over target. NaN and -Infinity become 0.
#[inline]
pub fn ratio(consumed: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    let r = consumed / target;
    if r.is_finite() {
        r
    } else if r == f64::INFINITY {
        f64::MAX
    } else {
        0.0
    }
}

/// Map a ratio onto a status: below `lower` is inadequate, above `upper` excessive.
///
/// Both bounds are inclusive for `OnTrack`. A NaN ratio classifies as `OnTrack`,
/// so callers pass ratios from [`ratio`], which never returns one.
pub fn classify(ratio: f64, lower: f64, upper: f64) -> NutrientStatus {
    if ratio < lower {
        NutrientStatus::Inadequate
    } else if ratio > upper {
        NutrientStatus::Excessive
    } else {
        NutrientStatus::OnTrack
    }
}

/// Classify progress toward a goal (symmetric 0.9/1.1 bounds).
pub fn classify_target(consumed: f64, target: f64) -> NutrientReading {
    NutrientReading {
        status: classify(ratio(consumed, target), STATUS_LOWER_BOUND, STATUS_UPPER_BOUND),
        consumed,
        target,
    }
}

/// Classify intake against a limit: any overage is excessive.
pub fn classify_limit(consumed: f64, limit: f64) -> NutrientReading {
    NutrientReading {
        status: classify(ratio(consumed, limit), STATUS_LOWER_BOUND, LIMIT_UPPER_BOUND),
        consumed,
        target: limit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_degenerate_target() {
        assert_eq!(ratio(10.0, 0.0), 0.0);
        assert_eq!(ratio(10.0, -5.0), 0.0);
        assert_eq!(ratio(f64::NAN, 5.0), 0.0);
        assert_eq!(ratio(f64::NEG_INFINITY, 5.0), 0.0);
    }

    #[test]
    fn test_ratio_overflow_saturates() {
        assert_eq!(ratio(f64::INFINITY, 5.0), f64::MAX);
        assert_eq!(ratio(5000.0, 1e-320), f64::MAX);
        assert_eq!(classify_limit(5000.0, 1e-320).status, NutrientStatus::Excessive);
        assert_eq!(classify_target(f64::MAX, 28.0).status, NutrientStatus::Excessive);
    }

    #[test]
    fn test_classify_default_bounds() {
        assert_eq!(classify(0.89, 0.9, 1.1), NutrientStatus::Inadequate);
        assert_eq!(classify(0.9, 0.9, 1.1), NutrientStatus::OnTrack);
        assert_eq!(classify(1.1, 0.9, 1.1), NutrientStatus::OnTrack);
        assert_eq!(classify(1.11, 0.9, 1.1), NutrientStatus::Excessive);
    }

    #[test]
    fn test_target_tolerates_small_overage() {
        let reading = classify_target(30.0, 28.0);
        assert_eq!(reading.status, NutrientStatus::OnTrack);
        assert_eq!(reading.consumed, 30.0);
        assert_eq!(reading.target, 28.0);
    }

    #[test]
    fn test_limit_overage_is_excessive() {
        assert_eq!(classify_limit(2300.0, 2300.0).status, NutrientStatus::OnTrack);
        assert_eq!(classify_limit(2350.0, 2300.0).status, NutrientStatus::Excessive);
        assert_eq!(classify_limit(40.0, 30.0).status, NutrientStatus::Excessive);
    }

    #[test]
    fn test_zero_intake_is_inadequate_even_for_limits() {
        assert_eq!(classify_limit(0.0, 50.0).status, NutrientStatus::Inadequate);
        assert_eq!(classify_target(0.0, 28.0).status, NutrientStatus::Inadequate);
    }

    #[test]
    fn test_zero_limit_is_inadequate() {
        let reading = classify_limit(500.0, 0.0);
        assert_eq!(reading.status, NutrientStatus::Inadequate);
    }
}
