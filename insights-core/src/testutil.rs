use chrono::{NaiveDate, TimeZone, Utc};

use crate::model::{Condition, ForecastDay, WeatherReading};

pub(crate) fn reading(temperature: f64, humidity: f64, pressure: f64) -> WeatherReading {
    WeatherReading {
        location: "Test".into(),
        country: "US".into(),
        temperature,
        feels_like: temperature,
        humidity,
        pressure,
        wind_speed: 0.0,
        wind_direction: 0.0,
        visibility: 10.0,
        uv_index: 4.0,
        condition: Condition::Clear,
        description: "Clear sky".into(),
        icon: "sun".into(),
        cloud_cover: 0.0,
        timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

pub(crate) fn day(high: f64, low: f64, precipitation: f64) -> ForecastDay {
    ForecastDay {
        date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
        high,
        low,
        condition: Condition::Clouds,
        description: "Cloudy".into(),
        icon: "cloud".into(),
        humidity: 50.0,
        wind_speed: 5.0,
        precipitation,
    }
}
