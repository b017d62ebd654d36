use super::domain::{IntentLevel, Prospect, Quadrant};
use serde::Serialize;

pub const HIGH_INTENT_THRESHOLD: u8 = 70;
pub const MEDIUM_INTENT_THRESHOLD: u8 = 30;
pub const HOT_FIT_THRESHOLD: u8 = 75;
pub const ENGAGED_THRESHOLD: u8 = 50;

/// Deal size at which the potential gauge saturates.
pub const REFERENCE_DEAL_SIZE: u32 = 500_000;

/// Composite priority: 30% fit, 30% engagement, 40% intent, rounded half up.
pub fn hotness_score(prospect: &Prospect) -> u8 {
    let weighted = 3 * prospect.fit_score as u32
        + 3 * prospect.engagement_score as u32
        + 4 * prospect.intent_score as u32;
    ((weighted + 5) / 10) as u8
}

pub fn intent_level(score: u8) -> IntentLevel {
    if score >= HIGH_INTENT_THRESHOLD {
        IntentLevel::High
    } else if score >= MEDIUM_INTENT_THRESHOLD {
        IntentLevel::Medium
    } else {
        IntentLevel::Low
    }
}

pub fn intent_color(score: u8) -> &'static str {
    intent_level(score).color()
}

pub fn quadrant(prospect: &Prospect) -> Quadrant {
    match (
        prospect.fit_score >= HOT_FIT_THRESHOLD,
        prospect.engagement_score >= ENGAGED_THRESHOLD,
    ) {
        (true, true) => Quadrant::HotLeads,
        (true, false) => Quadrant::Nurture,
        (false, true) => Quadrant::Educate,
        (false, false) => Quadrant::Qualify,
    }
}

/// Traffic-light band for the detail gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GaugeBand {
    Strong,
    Fair,
    Weak,
}

impl GaugeBand {
    pub fn for_value(value: u8) -> Self {
        if value >= 70 {
            Self::Strong
        } else if value >= 40 {
            Self::Fair
        } else {
            Self::Weak
        }
    }

    pub const fn color(self) -> &'static str {
        match self {
            Self::Strong => "#10b981",
            Self::Fair => "#f59e0b",
            Self::Weak => "#ef4444",
        }
    }
}

/// Headline gauges shown for a single prospect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DetailMetrics {
    pub potential: u8,
    pub sales_effectiveness: u8,
    pub close_probability: u8,
    pub hotness: u8,
}

impl DetailMetrics {
    pub fn for_prospect(prospect: &Prospect) -> Self {
        let deal_pct = prospect.deal_size as f64 / REFERENCE_DEAL_SIZE as f64 * 100.0;
        let potential = round_score(prospect.fit_score as f64 * 0.7 + deal_pct * 0.3);
        let sales_effectiveness = round_score(
            prospect.call_quality_score as f64 * 0.6 + prospect.engagement_score as f64 * 0.4,
        );
        let hotness = hotness_score(prospect);
        let close_probability = round_score(
            potential as f64 * 0.4 + sales_effectiveness as f64 * 0.3 + hotness as f64 * 0.3,
        );

        Self {
            potential,
            sales_effectiveness,
            close_probability,
            hotness,
        }
    }
}

fn round_score(value: f64) -> u8 {
    value.round().clamp(0.0, u8::MAX as f64) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prospects::testing::prospect;

    fn scored(fit: u8, engagement: u8, intent: u8) -> Prospect {
        let mut record = prospect(1);
        record.fit_score = fit;
        record.engagement_score = engagement;
        record.intent_score = intent;
        record
    }

    #[test]
    fn hotness_matches_worked_example() {
        let record = scored(80, 60, 90);
        assert_eq!(hotness_score(&record), 78);
        assert_eq!(intent_level(record.intent_score), IntentLevel::High);
        assert_eq!(quadrant(&record), Quadrant::HotLeads);
    }

    #[test]
    fn hotness_rounds_half_up() {
        // 0.3 * 1 + 0.3 * 0 + 0.4 * 3 = 1.5
        assert_eq!(hotness_score(&scored(1, 0, 3)), 2);
        assert_eq!(hotness_score(&scored(100, 100, 100)), 100);
        assert_eq!(hotness_score(&scored(0, 0, 0)), 0);
    }

    #[test]
    fn hotness_is_monotone_in_each_input() {
        for base in [0u8, 17, 50, 99] {
            for step in 0..100u8 {
                let lower = hotness_score(&scored(step, base, base));
                let upper = hotness_score(&scored(step + 1, base, base));
                assert!(upper >= lower, "fit {step} -> {}", step + 1);

                let lower = hotness_score(&scored(base, step, base));
                let upper = hotness_score(&scored(base, step + 1, base));
                assert!(upper >= lower, "engagement {step} -> {}", step + 1);

                let lower = hotness_score(&scored(base, base, step));
                let upper = hotness_score(&scored(base, base, step + 1));
                assert!(upper >= lower, "intent {step} -> {}", step + 1);
            }
        }
    }

    #[test]
    fn intent_bands_are_lower_inclusive() {
        assert_eq!(intent_level(29), IntentLevel::Low);
        assert_eq!(intent_level(30), IntentLevel::Medium);
        assert_eq!(intent_level(69), IntentLevel::Medium);
        assert_eq!(intent_level(70), IntentLevel::High);
        assert_eq!(intent_level(0), IntentLevel::Low);
        assert_eq!(intent_level(100), IntentLevel::High);
    }

    #[test]
    fn intent_color_tracks_intent_level_everywhere() {
        for score in 0..=100u8 {
            let expected = match intent_level(score) {
                IntentLevel::High => "#10b981",
                IntentLevel::Medium => "#f59e0b",
                IntentLevel::Low => "#ef4444",
            };
            assert_eq!(intent_color(score), expected, "score {score}");
        }
    }

    #[test]
    fn quadrant_thresholds() {
        assert_eq!(quadrant(&scored(75, 50, 0)), Quadrant::HotLeads);
        assert_eq!(quadrant(&scored(75, 49, 0)), Quadrant::Nurture);
        assert_eq!(quadrant(&scored(74, 50, 0)), Quadrant::Educate);
        assert_eq!(quadrant(&scored(74, 49, 0)), Quadrant::Qualify);
    }

    #[test]
    fn detail_metrics_blend_gauges() {
        let mut record = scored(80, 60, 90);
        record.deal_size = 250_000;
        record.call_quality_score = 90;

        let metrics = DetailMetrics::for_prospect(&record);

        // 80 * 0.7 + 50 * 0.3 = 71
        assert_eq!(metrics.potential, 71);
        // 90 * 0.6 + 60 * 0.4 = 78
        assert_eq!(metrics.sales_effectiveness, 78);
        assert_eq!(metrics.hotness, 78);
        // 71 * 0.4 + 78 * 0.3 + 78 * 0.3 = 75.2
        assert_eq!(metrics.close_probability, 75);
        assert_eq!(GaugeBand::for_value(metrics.close_probability), GaugeBand::Strong);
    }

    #[test]
    fn gauge_bands() {
        assert_eq!(GaugeBand::for_value(70), GaugeBand::Strong);
        assert_eq!(GaugeBand::for_value(69), GaugeBand::Fair);
        assert_eq!(GaugeBand::for_value(40), GaugeBand::Fair);
        assert_eq!(GaugeBand::for_value(39), GaugeBand::Weak);
    }
}
