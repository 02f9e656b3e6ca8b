use crate::{
    Config,
    model::{ForecastDay, HourlyPoint, WeatherReading},
    provider::mock::{Latency, MockProvider},
};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};

pub mod mock;
pub mod roster;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    Mock,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Mock => "mock",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::Mock]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "mock" => Ok(ProviderId::Mock),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: mock."
            )),
        }
    }
}

/// Source of readings and forecasts for the dashboard.
///
/// The dashboard and the analysis code only see this trait, so a provider
/// backed by a real HTTP API can replace the mock without touching them.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions; `None` means the provider's default location.
    async fn current_weather(&self, location: Option<&str>) -> anyhow::Result<WeatherReading>;

    /// The next five days, starting tomorrow.
    async fn forecast(&self) -> anyhow::Result<Vec<ForecastDay>>;

    /// The next 24 hours, starting now.
    async fn hourly(&self) -> anyhow::Result<Vec<HourlyPoint>>;

    async fn search_locations(&self, query: &str) -> anyhow::Result<Vec<String>>;
}

#[async_trait]
impl<P: WeatherProvider + ?Sized> WeatherProvider for Box<P> {
    async fn current_weather(&self, location: Option<&str>) -> anyhow::Result<WeatherReading> {
        (**self).current_weather(location).await
    }

    async fn forecast(&self) -> anyhow::Result<Vec<ForecastDay>> {
        (**self).forecast().await
    }

    async fn hourly(&self) -> anyhow::Result<Vec<HourlyPoint>> {
        (**self).hourly().await
    }

    async fn search_locations(&self, query: &str) -> anyhow::Result<Vec<String>> {
        (**self).search_locations(query).await
    }
}

/// Construct a provider from config and explicit ProviderId.
pub fn provider_from_config(
    id: ProviderId,
    config: &Config,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let latency = if config.simulate_latency { Latency::default() } else { Latency::NONE };

    let boxed: Box<dyn WeatherProvider> = match id {
        ProviderId::Mock => Box::new(MockProvider::new(latency)),
    };

    Ok(boxed)
}

/// Construct the default provider from config, using `default_provider` field.
pub fn default_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let id = config.default_provider_id()?;
    provider_from_config(id, config)
}
