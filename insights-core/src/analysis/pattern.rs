use serde::{Deserialize, Serialize};

use crate::model::ForecastDay;

/// Summary numbers the pattern rules are evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastStats {
    /// Population variance of the daily midpoint temperatures.
    pub variance: f64,
    /// Last midpoint minus first midpoint.
    pub trend_delta: f64,
    /// Mean precipitation probability across all days.
    pub avg_precipitation: f64,
}

impl ForecastStats {
    /// `None` for an empty forecast.
    pub fn from_days(days: &[ForecastDay]) -> Option<Self> {
        let first = days.first()?;
        let last = days.last()?;
        let n = days.len() as f64;

        let midpoints: Vec<f64> = days.iter().map(ForecastDay::midpoint).collect();
        let mean = midpoints.iter().sum::<f64>() / n;
        let variance = midpoints.iter().map(|m| (m - mean).powi(2)).sum::<f64>() / n;

        let avg_precipitation = days.iter().map(|d| d.precipitation).sum::<f64>() / n;

        Some(Self {
            variance,
            trend_delta: last.midpoint() - first.midpoint(),
            avg_precipitation,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternLabel {
    #[serde(rename = "Stable Clear")]
    StableClear,
    #[serde(rename = "Warming Trend")]
    WarmingTrend,
    #[serde(rename = "Wet Period")]
    WetPeriod,
    Variable,
    #[serde(rename = "Mixed Conditions")]
    MixedConditions,
}

impl PatternLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternLabel::StableClear => "Stable Clear",
            PatternLabel::WarmingTrend => "Warming Trend",
            PatternLabel::WetPeriod => "Wet Period",
            PatternLabel::Variable => "Variable",
            PatternLabel::MixedConditions => "Mixed Conditions",
        }
    }
}

impl std::fmt::Display for PatternLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternPrediction {
    pub label: PatternLabel,
    /// Fixed per rule, 0-100.
    pub confidence: u8,
    pub description: String,
}

/// One row of the classification table.
pub struct PatternRule {
    pub matches: fn(&ForecastStats) -> bool,
    pub label: PatternLabel,
    pub confidence: u8,
    pub description: &'static str,
}

impl PatternRule {
    fn prediction(&self) -> PatternPrediction {
        PatternPrediction {
            label: self.label,
            confidence: self.confidence,
            description: self.description.to_string(),
        }
    }
}

/// Evaluated top to bottom; the first matching rule wins.
pub static PATTERN_RULES: &[PatternRule] = &[
    PatternRule {
        matches: |s| s.variance < 10.0 && s.avg_precipitation < 5.0,
        label: PatternLabel::StableClear,
        confidence: 85,
        description: "Expect consistent clear weather with minimal temperature variation",
    },
    PatternRule {
        matches: |s| s.trend_delta > 5.0 && s.avg_precipitation < 10.0,
        label: PatternLabel::WarmingTrend,
        confidence: 78,
        description: "Temperature rising with low precipitation probability",
    },
    PatternRule {
        matches: |s| s.avg_precipitation > 15.0,
        label: PatternLabel::WetPeriod,
        confidence: 72,
        description: "Higher chance of precipitation over the forecast period",
    },
    PatternRule {
        matches: |s| s.variance > 15.0,
        label: PatternLabel::Variable,
        confidence: 65,
        description: "Expect variable weather conditions with temperature fluctuations",
    },
];

static FALLBACK: PatternRule = PatternRule {
    matches: |_| true,
    label: PatternLabel::MixedConditions,
    confidence: 60,
    description: "Mixed weather patterns with moderate variability",
};

pub fn classify(stats: &ForecastStats) -> PatternPrediction {
    PATTERN_RULES
        .iter()
        .find(|rule| (rule.matches)(stats))
        .unwrap_or(&FALLBACK)
        .prediction()
}

/// Classify a forecast; an empty forecast gets the fallback label.
pub fn predict_pattern(days: &[ForecastDay]) -> PatternPrediction {
    match ForecastStats::from_days(days) {
        Some(stats) => {
            tracing::debug!(?stats, "forecast statistics");
            classify(&stats)
        }
        None => FALLBACK.prediction(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::day;

    fn stats(variance: f64, trend_delta: f64, avg_precipitation: f64) -> ForecastStats {
        ForecastStats { variance, trend_delta, avg_precipitation }
    }

    #[test]
    fn stable_clear_wins_over_later_rules() {
        // Also satisfies the warming rule.
        let p = classify(&stats(5.0, 8.0, 3.0));
        assert_eq!(p.label, PatternLabel::StableClear);
        assert_eq!(p.confidence, 85);
    }

    #[test]
    fn warming_trend() {
        let p = classify(&stats(12.0, 6.0, 8.0));
        assert_eq!(p.label, PatternLabel::WarmingTrend);
        assert_eq!(p.confidence, 78);
        assert_eq!(p.description, "Temperature rising with low precipitation probability");
    }

    #[test]
    fn wet_period_before_variable() {
        let p = classify(&stats(40.0, 0.0, 20.0));
        assert_eq!(p.label, PatternLabel::WetPeriod);
        assert_eq!(p.confidence, 72);
    }

    #[test]
    fn variable() {
        let p = classify(&stats(16.0, 0.0, 12.0));
        assert_eq!(p.label, PatternLabel::Variable);
        assert_eq!(p.confidence, 65);
    }

    #[test]
    fn mixed_conditions_fallback() {
        let p = classify(&stats(12.0, 0.0, 12.0));
        assert_eq!(p.label, PatternLabel::MixedConditions);
        assert_eq!(p.confidence, 60);
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(classify(&stats(10.0, 0.0, 4.0)).label, PatternLabel::MixedConditions);
        assert_eq!(classify(&stats(12.0, 5.0, 4.0)).label, PatternLabel::MixedConditions);
        assert_eq!(classify(&stats(12.0, 0.0, 15.0)).label, PatternLabel::MixedConditions);
        assert_eq!(classify(&stats(15.0, 0.0, 12.0)).label, PatternLabel::MixedConditions);
    }

    #[test]
    fn stats_from_days() {
        let days = vec![
            day(20.0, 10.0, 0.0),
            day(24.0, 14.0, 10.0),
            day(28.0, 18.0, 20.0),
        ];
        let s = ForecastStats::from_days(&days).expect("non-empty forecast");
        // midpoints 15, 19, 23
        assert!((s.variance - 32.0 / 3.0).abs() < 1e-9);
        assert_eq!(s.trend_delta, 8.0);
        assert_eq!(s.avg_precipitation, 10.0);
    }

    #[test]
    fn single_day_has_zero_variance() {
        let s = ForecastStats::from_days(&[day(30.0, 10.0, 2.0)]).expect("non-empty forecast");
        assert_eq!(s.variance, 0.0);
        assert_eq!(s.trend_delta, 0.0);
        assert_eq!(predict_pattern(&[day(30.0, 10.0, 2.0)]).label, PatternLabel::StableClear);
    }

    #[test]
    fn empty_forecast_is_mixed() {
        assert!(ForecastStats::from_days(&[]).is_none());
        let p = predict_pattern(&[]);
        assert_eq!(p.label, PatternLabel::MixedConditions);
        assert_eq!(p.confidence, 60);
    }

    #[test]
    fn labels_serialize_as_display_names() {
        let json = serde_json::to_string(&classify(&stats(5.0, 0.0, 3.0))).expect("serialize");
        assert!(json.contains("\"label\":\"Stable Clear\""));

        for label in [
            PatternLabel::StableClear,
            PatternLabel::WarmingTrend,
            PatternLabel::WetPeriod,
            PatternLabel::Variable,
            PatternLabel::MixedConditions,
        ] {
            let json = serde_json::to_string(&label).expect("serialize");
            assert_eq!(json, format!("\"{}\"", label.as_str()));
            let back: PatternLabel = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(back, label);
        }
    }

    #[test]
    fn wet_forecast() {
        let days: Vec<_> = (0..5).map(|_| day(25.0, 15.0, 25.0)).collect();
        assert_eq!(predict_pattern(&days).label, PatternLabel::WetPeriod);
    }
}
