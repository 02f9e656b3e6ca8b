//! Core library for the `weather-insights` dashboard.
//!
//! This crate defines:
//! - Shared domain models (readings, forecast days, hourly points)
//! - Insight analysis: metric trends, forecast pattern, comfort index
//! - Abstraction over weather providers, with a simulated provider
//! - The dashboard coordinator and its explicit state
//! - Configuration handling
//!
//! It is used by `weather-insights-cli`, but can also be reused by other binaries or services.

pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod model;
pub mod provider;

#[cfg(test)]
mod testutil;

pub use analysis::Insights;
pub use config::Config;
pub use dashboard::{Dashboard, DashboardState, FetchError, FetchKind};
pub use model::{Condition, DEFAULT_LOCATION, ForecastDay, HourlyPoint, WeatherReading, city_name};
pub use provider::{ProviderId, WeatherProvider};
