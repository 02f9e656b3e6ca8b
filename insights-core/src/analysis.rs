//! Derived insights: metric trends over the reading history, a pattern label
//! for the forecast, and a comfort score for the current reading.
//!
//! Every function here is pure and total. Inputs that are too short produce
//! empty or fallback results instead of errors.

use serde::{Deserialize, Serialize};

use crate::model::{ForecastDay, WeatherReading};

pub mod comfort;
pub mod pattern;
pub mod trend;

pub use comfort::{ComfortAssessment, ComfortLevel, comfort_index};
pub use pattern::{ForecastStats, PatternLabel, PatternPrediction, classify, predict_pattern};
pub use trend::{Metric, Trend, TrendDescriptor, TrendDirection, analyze_trends, calculate_trend};

/// Everything the insights panel and the primary display need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub trends: Vec<TrendDescriptor>,
    pub pattern: PatternPrediction,
    pub comfort: ComfortAssessment,
}

impl Insights {
    pub fn compute(
        history: &[WeatherReading],
        forecast: &[ForecastDay],
        current: &WeatherReading,
    ) -> Self {
        let insights = Self {
            trends: analyze_trends(history),
            pattern: predict_pattern(forecast),
            comfort: comfort_index(current),
        };

        tracing::debug!(
            trends = insights.trends.len(),
            pattern = %insights.pattern.label,
            comfort = insights.comfort.index,
            "computed insights"
        );

        insights
    }
}
