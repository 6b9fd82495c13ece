//! Connection-quality classification.
//!
//! The scoring engine reuses `meets_excellent` / `meets_good` so the score's
//! network component can never drift from the displayed tier.

use crate::models::{EffectiveType, NetworkSample, Tier};

pub fn meets_excellent(sample: &NetworkSample) -> bool {
    sample.effective_type == EffectiveType::FourG
        && sample.downlink_mbps > 10.0
        && sample.round_trip_ms < 100.0
}

pub fn meets_good(sample: &NetworkSample) -> bool {
    sample.effective_type == EffectiveType::FourG
        && sample.downlink_mbps > 5.0
        && sample.round_trip_ms < 200.0
}

fn meets_fair(sample: &NetworkSample) -> bool {
    sample.effective_type == EffectiveType::ThreeG
        || (sample.downlink_mbps > 1.0 && sample.round_trip_ms < 500.0)
}

/// First matching rule wins; total over all inputs.
pub fn classify(sample: Option<&NetworkSample>) -> Tier {
    let Some(sample) = sample else {
        return Tier::Unknown;
    };

    if meets_excellent(sample) {
        Tier::Excellent
    } else if meets_good(sample) {
        Tier::Good
    } else if meets_fair(sample) {
        Tier::Fair
    } else {
        Tier::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(effective_type: EffectiveType, downlink_mbps: f64, round_trip_ms: f64) -> NetworkSample {
        NetworkSample {
            effective_type,
            downlink_mbps,
            round_trip_ms,
            data_saver: false,
        }
    }

    #[test]
    fn no_sample_is_unknown() {
        assert_eq!(classify(None), Tier::Unknown);
    }

    #[test]
    fn fast_4g_is_excellent() {
        let s = sample(EffectiveType::FourG, 15.0, 50.0);
        assert_eq!(classify(Some(&s)), Tier::Excellent);
    }

    #[test]
    fn mid_4g_is_good() {
        let s = sample(EffectiveType::FourG, 8.0, 150.0);
        assert_eq!(classify(Some(&s)), Tier::Good);
    }

    #[test]
    fn laggy_4g_falls_through_good() {
        // fast downlink but rtt past the good bound lands on fair
        let s = sample(EffectiveType::FourG, 8.0, 250.0);
        assert_eq!(classify(Some(&s)), Tier::Fair);
    }

    #[test]
    fn any_3g_is_at_least_fair() {
        let s = sample(EffectiveType::ThreeG, 0.2, 900.0);
        assert_eq!(classify(Some(&s)), Tier::Fair);
    }

    #[test]
    fn decent_unknown_type_is_fair() {
        let s = sample(EffectiveType::Unknown, 2.0, 300.0);
        assert_eq!(classify(Some(&s)), Tier::Fair);
    }

    #[test]
    fn slow_link_is_poor() {
        let s = sample(EffectiveType::TwoG, 0.3, 800.0);
        assert_eq!(classify(Some(&s)), Tier::Poor);

        let s = sample(EffectiveType::Unknown, 0.0, 0.0);
        assert_eq!(classify(Some(&s)), Tier::Poor);
    }

    #[test]
    fn classify_is_deterministic() {
        let s = sample(EffectiveType::FourG, 11.0, 99.0);
        assert_eq!(classify(Some(&s)), classify(Some(&s)));
    }

    #[test]
    fn fallback_sample_is_poor_not_unknown() {
        // absence is Unknown; a delivered degraded sample classifies normally
        let s = NetworkSample::fallback();
        assert_eq!(classify(Some(&s)), Tier::Poor);
    }
}
