use serde::{Deserialize, Serialize};

use crate::model::WeatherReading;

/// Samples averaged for each of the two windows.
const WINDOW: usize = 3;

/// Relative change (in percent) below which a metric counts as stable.
const STABLE_PERCENT: f64 = 2.0;

/// Metrics tracked across the reading history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Temperature,
    Humidity,
    Pressure,
}

impl Metric {
    pub const fn all() -> &'static [Metric] {
        &[Metric::Temperature, Metric::Humidity, Metric::Pressure]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::Humidity => "Humidity",
            Metric::Pressure => "Pressure",
        }
    }

    fn sample(&self, reading: &WeatherReading) -> f64 {
        match self {
            Metric::Temperature => reading.temperature,
            Metric::Humidity => reading.humidity,
            Metric::Pressure => reading.pressure,
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Stable => "stable",
        }
    }
}

/// Direction and size of change for a single series of samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// Recent window average minus prior window average, 2 decimals.
    pub change: f64,
    /// Half-step linear extrapolation of the recent average, 2 decimals.
    pub prediction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendDescriptor {
    pub metric: Metric,
    pub direction: TrendDirection,
    pub change: f64,
    pub prediction: f64,
}

/// Compare the mean of the last three samples with the three before them.
///
/// Returns `None` for fewer than three samples. When the prior window is not
/// full, the prior average is taken to be the recent one, so short histories
/// always report a stable trend with zero change.
pub fn calculate_trend(values: &[f64]) -> Option<Trend> {
    if values.len() < WINDOW {
        return None;
    }

    let split = values.len() - WINDOW;
    let recent_avg = mean(&values[split..]);
    let prior_avg = if split >= WINDOW {
        mean(&values[split - WINDOW..split])
    } else {
        recent_avg
    };

    let change = recent_avg - prior_avg;
    let direction = direction_of(change, prior_avg);
    let prediction = recent_avg + change * 0.5;

    Some(Trend {
        direction,
        change: round2(change),
        prediction: round2(prediction),
    })
}

/// One descriptor per [`Metric`] over the same history, oldest reading first.
pub fn analyze_trends(history: &[WeatherReading]) -> Vec<TrendDescriptor> {
    if history.len() < WINDOW {
        return Vec::new();
    }

    Metric::all()
        .iter()
        .filter_map(|metric| {
            let samples: Vec<f64> = history.iter().map(|r| metric.sample(r)).collect();
            calculate_trend(&samples).map(|trend| TrendDescriptor {
                metric: *metric,
                direction: trend.direction,
                change: trend.change,
                prediction: trend.prediction,
            })
        })
        .collect()
}

fn direction_of(change: f64, prior_avg: f64) -> TrendDirection {
    // A zero baseline has no relative change; only the sign is meaningful.
    let stable = if prior_avg == 0.0 {
        change == 0.0
    } else {
        (change / prior_avg).abs() * 100.0 < STABLE_PERCENT
    };

    if stable {
        TrendDirection::Stable
    } else if change > 0.0 {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Round to 2 decimals, halves toward positive infinity.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
