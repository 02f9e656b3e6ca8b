use serde::{Deserialize, Serialize};

use crate::model::WeatherReading;

const BASE_SCORE: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComfortLevel {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl ComfortLevel {
    pub fn from_index(index: u8) -> Self {
        match index {
            80..=u8::MAX => ComfortLevel::Excellent,
            60..=79 => ComfortLevel::Good,
            40..=59 => ComfortLevel::Fair,
            _ => ComfortLevel::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComfortLevel::Poor => "Poor",
            ComfortLevel::Fair => "Fair",
            ComfortLevel::Good => "Good",
            ComfortLevel::Excellent => "Excellent",
        }
    }
}

impl std::fmt::Display for ComfortLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComfortAssessment {
    /// Clamped to 0-100.
    pub index: u8,
    pub level: ComfortLevel,
    /// Explanations for each adjustment applied, in evaluation order.
    pub factors: Vec<String>,
}

/// A value range with the score adjustment it earns.
pub struct Band {
    pub applies: fn(f64) -> bool,
    pub delta: i32,
    pub factor: &'static str,
}

/// Ordered bands for one reading field; at most one band applies.
pub struct FactorTable {
    pub value: fn(&WeatherReading) -> f64,
    pub bands: &'static [Band],
}

pub static COMFORT_FACTORS: &[FactorTable] = &[
    FactorTable {
        value: |w| w.temperature,
        bands: &[
            Band { applies: |t| (18.0..=24.0).contains(&t), delta: 20, factor: "Optimal temperature" },
            Band { applies: |t| (15.0..=27.0).contains(&t), delta: 10, factor: "Comfortable temperature" },
            Band { applies: |_| true, delta: -10, factor: "Temperature outside comfort zone" },
        ],
    },
    FactorTable {
        value: |w| w.humidity,
        bands: &[
            Band { applies: |h| (40.0..=60.0).contains(&h), delta: 15, factor: "Ideal humidity" },
            Band { applies: |h| (30.0..=70.0).contains(&h), delta: 5, factor: "Acceptable humidity" },
            Band { applies: |_| true, delta: -10, factor: "Humidity discomfort" },
        ],
    },
    FactorTable {
        value: |w| w.wind_speed,
        bands: &[
            Band { applies: |s| (5.0..=15.0).contains(&s), delta: 10, factor: "Pleasant breeze" },
            Band { applies: |s| s > 25.0, delta: -15, factor: "Strong winds" },
        ],
    },
    FactorTable {
        value: |w| w.uv_index,
        bands: &[
            Band { applies: |uv| uv <= 2.0, delta: 5, factor: "Low UV exposure" },
            Band { applies: |uv| uv >= 8.0, delta: -10, factor: "High UV warning" },
        ],
    },
];

pub fn comfort_index(weather: &WeatherReading) -> ComfortAssessment {
    let mut score = BASE_SCORE;
    let mut factors = Vec::new();

    for table in COMFORT_FACTORS {
        let value = (table.value)(weather);
        if let Some(band) = table.bands.iter().find(|b| (b.applies)(value)) {
            score += band.delta;
            factors.push(band.factor.to_string());
        }
    }

    let index = score.clamp(0, 100) as u8;

    ComfortAssessment {
        index,
        level: ComfortLevel::from_index(index),
        factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::reading;

    fn weather(temperature: f64, humidity: f64, wind_speed: f64, uv_index: f64) -> WeatherReading {
        WeatherReading {
            wind_speed,
            uv_index,
            ..reading(temperature, humidity, 1013.0)
        }
    }

    #[test]
    fn ideal_conditions_are_excellent() {
        let c = comfort_index(&weather(20.0, 50.0, 10.0, 1.0));
        assert_eq!(c.index, 100);
        assert_eq!(c.level, ComfortLevel::Excellent);
        assert_eq!(
            c.factors,
            vec!["Optimal temperature", "Ideal humidity", "Pleasant breeze", "Low UV exposure"]
        );
    }

    #[test]
    fn neutral_wind_and_uv_add_no_factor() {
        let c = comfort_index(&weather(16.0, 35.0, 20.0, 5.0));
        assert_eq!(c.index, 65);
        assert_eq!(c.level, ComfortLevel::Good);
        assert_eq!(c.factors, vec!["Comfortable temperature", "Acceptable humidity"]);
    }

    #[test]
    fn harsh_conditions_are_poor() {
        let c = comfort_index(&weather(100.0, 0.0, 40.0, 11.0));
        // 50 - 10 - 10 - 15 - 10
        assert_eq!(c.index, 5);
        assert_eq!(c.level, ComfortLevel::Poor);
        assert_eq!(
            c.factors,
            vec![
                "Temperature outside comfort zone",
                "Humidity discomfort",
                "Strong winds",
                "High UV warning",
            ]
        );
    }

    #[test]
    fn band_edges_are_inclusive() {
        let c = comfort_index(&weather(24.0, 60.0, 15.0, 2.0));
        assert_eq!(c.index, 100);

        let c = comfort_index(&weather(27.0, 70.0, 25.0, 8.0));
        // 50 + 10 + 5 - 10
        assert_eq!(c.index, 55);
        assert_eq!(c.level, ComfortLevel::Fair);
    }

    #[test]
    fn index_stays_in_range_for_extremes() {
        for (t, h, w, uv) in [
            (f64::MAX, f64::MIN, f64::MAX, f64::MAX),
            (-273.0, 1000.0, 1000.0, 100.0),
            (f64::NAN, f64::NAN, f64::NAN, f64::NAN),
        ] {
            let c = comfort_index(&weather(t, h, w, uv));
            assert!(c.index <= 100);
        }
    }

    #[test]
    fn nan_falls_through_to_otherwise() {
        let c = comfort_index(&weather(f64::NAN, f64::NAN, f64::NAN, f64::NAN));
        assert_eq!(c.index, 30);
        assert_eq!(c.factors, vec!["Temperature outside comfort zone", "Humidity discomfort"]);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(ComfortLevel::from_index(80), ComfortLevel::Excellent);
        assert_eq!(ComfortLevel::from_index(79), ComfortLevel::Good);
        assert_eq!(ComfortLevel::from_index(60), ComfortLevel::Good);
        assert_eq!(ComfortLevel::from_index(59), ComfortLevel::Fair);
        assert_eq!(ComfortLevel::from_index(40), ComfortLevel::Fair);
        assert_eq!(ComfortLevel::from_index(39), ComfortLevel::Poor);
        assert_eq!(ComfortLevel::from_index(0), ComfortLevel::Poor);
    }
}
