use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Location used when none has been chosen.
pub const DEFAULT_LOCATION: &str = "New York";

/// City part of a "City, CC" roster entry, trimmed.
pub fn city_name(entry: &str) -> &str {
    entry.split_once(',').map_or(entry, |(city, _)| city).trim()
}

/// Coarse weather category shared by readings, forecast days and hourly points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Snow,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Rain => "Rain",
            Condition::Snow => "Snow",
        }
    }

    /// Default icon key for the condition.
    pub fn icon(&self) -> &'static str {
        match self {
            Condition::Clear => "sun",
            Condition::Clouds => "cloud",
            Condition::Rain => "cloud-rain",
            Condition::Snow => "snowflake",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Current conditions at one location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub location: String,
    pub country: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub wind_direction: f64,
    pub visibility: f64,
    pub uv_index: f64,
    pub condition: Condition,
    pub description: String,
    pub icon: String,
    pub cloud_cover: f64,
    pub timestamp: DateTime<Utc>,
}

/// One upcoming day of the 5-day forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub high: f64,
    pub low: f64,
    pub condition: Condition,
    pub description: String,
    pub icon: String,
    pub humidity: f64,
    pub wind_speed: f64,
    /// Probability of precipitation, 0-100.
    pub precipitation: f64,
}

impl ForecastDay {
    pub fn midpoint(&self) -> f64 {
        (self.high + self.low) / 2.0
    }
}

/// One hour of the 24-hour forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    pub time: DateTime<Utc>,
    pub temperature: f64,
    pub condition: Condition,
    pub icon: String,
    pub precipitation: f64,
    pub wind_speed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_icons() {
        assert_eq!(Condition::Clear.icon(), "sun");
        assert_eq!(Condition::Rain.icon(), "cloud-rain");
        assert_eq!(Condition::Snow.to_string(), "Snow");
    }

    #[test]
    fn city_name_drops_country_suffix() {
        assert_eq!(city_name("London, GB"), "London");
        assert_eq!(city_name("  New York , US"), "New York");
        assert_eq!(city_name("Springfield"), "Springfield");
        assert_eq!(city_name(""), "");
    }

    #[test]
    fn forecast_day_midpoint() {
        let day = ForecastDay {
            date: NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date"),
            high: 30.0,
            low: 10.0,
            condition: Condition::Clear,
            description: "Sunny".into(),
            icon: "sun".into(),
            humidity: 40.0,
            wind_speed: 5.0,
            precipitation: 0.0,
        };
        assert_eq!(day.midpoint(), 20.0);
    }
}
