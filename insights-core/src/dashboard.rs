//! Coordination between the provider, the analysis module and whatever
//! renders the result.
//!
//! [`DashboardState`] is the single owned snapshot of everything on screen.
//! [`Dashboard::refresh`] takes `&mut self`, so refreshes against one
//! dashboard run one after another and results land in call order; a slow
//! earlier fetch can never overwrite a newer one.

use serde::Serialize;
use std::future::Future;

use crate::{
    analysis::Insights,
    config::DEFAULT_HISTORY_WINDOW,
    model::{DEFAULT_LOCATION, ForecastDay, HourlyPoint, WeatherReading, city_name},
    provider::WeatherProvider,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Current,
    Forecast,
    Hourly,
}

impl std::fmt::Display for FetchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FetchKind::Current => "current weather",
            FetchKind::Forecast => "forecast",
            FetchKind::Hourly => "hourly forecast",
        })
    }
}

/// A refresh failed; nothing from that refresh was applied.
#[derive(Debug, thiserror::Error)]
#[error("failed to fetch {kind}")]
pub struct FetchError {
    pub kind: FetchKind,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub selected_location: String,
    pub current: Option<WeatherReading>,
    pub forecast: Vec<ForecastDay>,
    pub hourly: Vec<HourlyPoint>,
    /// Readings for the selected location, oldest first.
    pub history: Vec<WeatherReading>,
    pub insights: Option<Insights>,
    /// Set while a refresh is in flight, and left set after a failed one.
    pub loading: bool,
    /// Successful refreshes so far.
    pub refresh_count: u64,
}

impl DashboardState {
    fn new(location: String) -> Self {
        Self {
            selected_location: location,
            current: None,
            forecast: Vec::new(),
            hourly: Vec::new(),
            history: Vec::new(),
            insights: None,
            loading: true,
            refresh_count: 0,
        }
    }
}

#[derive(Debug)]
pub struct Dashboard<P> {
    provider: P,
    state: DashboardState,
    history_window: usize,
}

impl<P: WeatherProvider> Dashboard<P> {
    /// `location` may be a roster entry; only the city part is kept.
    pub fn new(provider: P, location: Option<String>) -> Self {
        let location = location
            .as_deref()
            .map(city_name)
            .filter(|city| !city.is_empty())
            .unwrap_or(DEFAULT_LOCATION)
            .to_string();
        Self {
            provider,
            state: DashboardState::new(location),
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }

    /// Number of readings kept for trend analysis; at least one.
    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window.max(1);
        self
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Fetch current, forecast and hourly data together and recompute
    /// insights once all three have arrived.
    ///
    /// On failure the error is logged, previous data stays in place and the
    /// state remains `loading`. There is no retry.
    pub async fn refresh(&mut self) -> Result<&DashboardState, FetchError> {
        self.state.loading = true;
        let location = self.state.selected_location.clone();
        tracing::debug!(%location, "refreshing weather data");

        let fetched = tokio::try_join!(
            fetch(FetchKind::Current, self.provider.current_weather(Some(location.as_str()))),
            fetch(FetchKind::Forecast, self.provider.forecast()),
            fetch(FetchKind::Hourly, self.provider.hourly()),
        );

        let (current, forecast, hourly) = match fetched {
            Ok(data) => data,
            Err(err) => {
                tracing::error!(%location, kind = %err.kind, error = %err.source, "failed to load weather data");
                return Err(err);
            }
        };

        self.apply(current, forecast, hourly);
        Ok(&self.state)
    }

    /// Switch location and refresh. History is per location, so it starts over.
    ///
    /// Search hits like "London, GB" select the city ("London").
    pub async fn select_location(&mut self, location: &str) -> Result<&DashboardState, FetchError> {
        let city = city_name(location);
        tracing::info!(location = %city, "location selected");
        self.state.selected_location = city.to_string();
        self.state.history.clear();
        self.refresh().await
    }

    pub async fn search(&self, query: &str) -> anyhow::Result<Vec<String>> {
        self.provider.search_locations(query).await
    }

    fn apply(&mut self, current: WeatherReading, forecast: Vec<ForecastDay>, hourly: Vec<HourlyPoint>) {
        let state = &mut self.state;

        state.history.push(current.clone());
        if state.history.len() > self.history_window {
            let excess = state.history.len() - self.history_window;
            state.history.drain(..excess);
        }

        state.insights = Some(Insights::compute(&state.history, &forecast, &current));
        state.current = Some(current);
        state.forecast = forecast;
        state.hourly = hourly;
        state.loading = false;
        state.refresh_count += 1;
    }
}

async fn fetch<T>(
    kind: FetchKind,
    request: impl Future<Output = anyhow::Result<T>>,
) -> Result<T, FetchError> {
    request.await.map_err(|source| FetchError { kind, source: source.into() })
}
