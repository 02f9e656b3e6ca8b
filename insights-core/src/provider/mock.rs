use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration as ChronoDuration, Utc};
use parking_lot::Mutex;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::Duration;

use crate::model::{Condition, DEFAULT_LOCATION, ForecastDay, HourlyPoint, WeatherReading};

use super::{WeatherProvider, roster};

const DEFAULT_COUNTRY: &str = "US";

pub const FORECAST_DAYS: usize = 5;
pub const HOURLY_POINTS: usize = 24;

const CURRENT_CONDITIONS: &[(Condition, &str)] = &[
    (Condition::Clear, "Clear sky"),
    (Condition::Clouds, "Partly cloudy"),
    (Condition::Rain, "Light rain"),
    (Condition::Snow, "Light snow"),
];

const FORECAST_CONDITIONS: &[(Condition, &str)] = &[
    (Condition::Clear, "Sunny"),
    (Condition::Clouds, "Cloudy"),
    (Condition::Rain, "Rainy"),
];

/// Simulated round-trip times, mirroring a slow remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    pub current: Duration,
    pub forecast: Duration,
    pub hourly: Duration,
    pub search: Duration,
}

impl Latency {
    pub const NONE: Latency = Latency {
        current: Duration::ZERO,
        forecast: Duration::ZERO,
        hourly: Duration::ZERO,
        search: Duration::ZERO,
    };
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            current: Duration::from_millis(500),
            forecast: Duration::from_millis(300),
            hourly: Duration::from_millis(400),
            search: Duration::from_millis(200),
        }
    }
}

/// Provider that fabricates range-bounded random readings.
#[derive(Debug)]
pub struct MockProvider {
    rng: Mutex<StdRng>,
    latency: Latency,
}

impl MockProvider {
    pub fn new(latency: Latency) -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            latency,
        }
    }

    /// Deterministic provider for tests and reproducible demos.
    pub fn with_seed(seed: u64, latency: Latency) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            latency,
        }
    }

    fn generate_current(&self, location: Option<&str>) -> WeatherReading {
        let mut rng = self.rng.lock();
        let (condition, description) = pick(&mut *rng, CURRENT_CONDITIONS);

        let location = location
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LOCATION);

        WeatherReading {
            location: location.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
            temperature: spread(&mut *rng, 15.0, 20.0),
            feels_like: spread(&mut *rng, 12.0, 25.0),
            humidity: spread(&mut *rng, 40.0, 40.0),
            pressure: spread(&mut *rng, 1000.0, 50.0),
            wind_speed: spread(&mut *rng, 0.0, 15.0),
            wind_direction: spread(&mut *rng, 0.0, 360.0),
            visibility: spread(&mut *rng, 8.0, 2.0),
            uv_index: spread(&mut *rng, 0.0, 11.0),
            condition,
            description: description.to_string(),
            icon: condition.icon().to_string(),
            cloud_cover: spread(&mut *rng, 0.0, 100.0),
            timestamp: Utc::now(),
        }
    }

    fn generate_forecast(&self) -> Vec<ForecastDay> {
        let mut rng = self.rng.lock();
        let today = Utc::now().date_naive();

        (1..=FORECAST_DAYS as i64)
            .map(|offset| {
                let (condition, description) = pick(&mut *rng, FORECAST_CONDITIONS);
                ForecastDay {
                    date: today + ChronoDuration::days(offset),
                    high: spread(&mut *rng, 20.0, 15.0),
                    low: spread(&mut *rng, 5.0, 15.0),
                    condition,
                    description: description.to_string(),
                    icon: condition.icon().to_string(),
                    humidity: spread(&mut *rng, 30.0, 50.0),
                    wind_speed: spread(&mut *rng, 0.0, 20.0),
                    precipitation: spread(&mut *rng, 0.0, 30.0),
                }
            })
            .collect()
    }

    fn generate_hourly(&self) -> Vec<HourlyPoint> {
        let mut rng = self.rng.lock();
        let now = Utc::now();

        (0..HOURLY_POINTS)
            .map(|i| {
                let (condition, _) = pick(&mut *rng, FORECAST_CONDITIONS);
                // Daily swing on top of the random base.
                let swing = (i as f64 / 4.0).sin() * 5.0;
                HourlyPoint {
                    time: now + ChronoDuration::hours(i as i64),
                    temperature: (18.0 + rng.r#gen::<f64>() * 10.0 + swing).round(),
                    condition,
                    icon: condition.icon().to_string(),
                    precipitation: spread(&mut *rng, 0.0, 20.0),
                    wind_speed: spread(&mut *rng, 0.0, 15.0),
                }
            })
            .collect()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(Latency::default())
    }
}

/// `base + U[0,1) * width`, rounded to a whole number.
fn spread<R: Rng + ?Sized>(rng: &mut R, base: f64, width: f64) -> f64 {
    (base + rng.r#gen::<f64>() * width).round()
}

fn pick<R: Rng + ?Sized>(rng: &mut R, table: &[(Condition, &'static str)]) -> (Condition, &'static str) {
    table[rng.gen_range(0..table.len())]
}

async fn delay(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

#[async_trait]
impl WeatherProvider for MockProvider {
    async fn current_weather(&self, location: Option<&str>) -> Result<WeatherReading> {
        delay(self.latency.current).await;
        Ok(self.generate_current(location))
    }

    async fn forecast(&self) -> Result<Vec<ForecastDay>> {
        delay(self.latency.forecast).await;
        Ok(self.generate_forecast())
    }

    async fn hourly(&self) -> Result<Vec<HourlyPoint>> {
        delay(self.latency.hourly).await;
        Ok(self.generate_hourly())
    }

    async fn search_locations(&self, query: &str) -> Result<Vec<String>> {
        delay(self.latency.search).await;
        Ok(roster::search_roster(roster::ROSTER, query))
    }
}
