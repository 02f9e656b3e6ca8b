//! Human-readable rendering of dashboard state.
//!
//! Every function here is a pure function of its input and returns the text
//! to print.

use std::fmt::Write;

use weather_insights_core::{
    DashboardState, ForecastDay, HourlyPoint, WeatherReading,
    analysis::{ComfortAssessment, Insights, TrendDirection},
};

const CHART_HOURS: usize = 12;
const HOURLY_ROWS: usize = 12;
const SPARKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn render_dashboard(state: &DashboardState) -> String {
    let Some(current) = &state.current else {
        return "Loading weather data...\n".to_string();
    };

    let mut out = String::new();

    match &state.insights {
        Some(insights) => out.push_str(&render_current(current, Some(&insights.comfort))),
        None => out.push_str(&render_current(current, None)),
    }
    if state.loading {
        out.push_str("  (refresh pending, showing last known data)\n");
    }
    out.push('\n');

    if !state.hourly.is_empty() {
        out.push_str(&render_hourly(&state.hourly));
        out.push('\n');
        out.push_str(&render_chart(&state.hourly));
        out.push('\n');
    }

    out.push_str(&render_forecast(&state.forecast));

    if let Some(insights) = &state.insights {
        out.push('\n');
        out.push_str(&render_insights(insights));
    }

    out
}

pub fn render_current(weather: &WeatherReading, comfort: Option<&ComfortAssessment>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}, {}  ({})", weather.location, weather.country, weather.timestamp.format("%Y-%m-%d %H:%M UTC"));
    let _ = writeln!(
        out,
        "  {:.0}°C, feels like {:.0}°C  {} ({})",
        weather.temperature, weather.feels_like, weather.description, weather.condition
    );
    let _ = writeln!(
        out,
        "  Humidity {:.0}%  Pressure {:.0} hPa  Wind {:.0} km/h {}",
        weather.humidity,
        weather.pressure,
        weather.wind_speed,
        compass(weather.wind_direction)
    );
    let _ = writeln!(
        out,
        "  Visibility {:.0} km  UV {:.0}  Cloud cover {:.0}%",
        weather.visibility, weather.uv_index, weather.cloud_cover
    );

    if let Some(comfort) = comfort {
        let _ = writeln!(out, "  Comfort {}/100 ({})", comfort.index, comfort.level);
        for factor in &comfort.factors {
            let _ = writeln!(out, "    - {factor}");
        }
    }

    out
}

pub fn render_forecast(days: &[ForecastDay]) -> String {
    let mut out = String::from("5-Day Forecast:\n");
    if days.is_empty() {
        out.push_str("  (no forecast)\n");
        return out;
    }

    for (i, day) in days.iter().enumerate() {
        let label = if i == 0 { "Tomorrow".to_string() } else { day.date.format("%a %b %d").to_string() };
        let _ = writeln!(
            out,
            "  {:<10} {:>3.0}° / {:>3.0}°  {:<7} rain {:>2.0}%  wind {:.0} km/h",
            label, day.high, day.low, day.description, day.precipitation, day.wind_speed
        );
    }

    out
}

/// Table of the first twelve hourly points.
pub fn render_hourly(points: &[HourlyPoint]) -> String {
    let mut out = String::from("Next 12 Hours:\n");

    for point in points.iter().take(HOURLY_ROWS) {
        let _ = writeln!(
            out,
            "  {}  {:>3.0}°C  {:<6}  rain {:>2.0}%  wind {:.0} km/h",
            point.time.format("%H:%M"),
            point.temperature,
            point.condition,
            point.precipitation,
            point.wind_speed
        );
    }

    out
}

/// Sparkline of the first twelve hourly temperatures.
pub fn render_chart(points: &[HourlyPoint]) -> String {
    let data = &points[..points.len().min(CHART_HOURS)];
    if data.is_empty() {
        return String::new();
    }

    let temps: Vec<f64> = data.iter().map(|p| p.temperature).collect();
    let line = sparkline(&temps);
    let min = temps.iter().copied().fold(f64::INFINITY, f64::min);
    let max = temps.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    format!(
        "Temperature, next {} hours:\n  {line}  ({min:.0}°C .. {max:.0}°C)\n",
        data.len()
    )
}

pub fn sparkline(values: &[f64]) -> String {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Flat series still need a non-zero divisor.
    let range = if max - min > 0.0 { max - min } else { 1.0 };
    let top = (SPARKS.len() - 1) as f64;

    values
        .iter()
        .map(|v| {
            let level = ((v - min) / range * top).round().clamp(0.0, top) as usize;
            SPARKS[level]
        })
        .collect()
}

pub fn render_insights(insights: &Insights) -> String {
    let mut out = String::from("Weather Analysis:\n");

    let pattern = &insights.pattern;
    let _ = writeln!(out, "  Pattern: {} ({}% confidence)", pattern.label, pattern.confidence);
    let _ = writeln!(out, "    {}", pattern.description);

    if insights.trends.is_empty() {
        out.push_str("  Trends: not enough history yet\n");
    } else {
        out.push_str("  Trends:\n");
        for trend in &insights.trends {
            let _ = writeln!(
                out,
                "    {:<12} {} {:<6} change {:+.2}  next ~{:.2}",
                trend.metric.as_str(),
                arrow(trend.direction),
                trend.direction.as_str(),
                trend.change,
                trend.prediction
            );
        }
    }

    out
}

pub fn render_search(query: &str, results: &[String]) -> String {
    if results.is_empty() {
        return format!("No locations match '{query}'.\n");
    }

    let mut out = String::new();
    for city in results {
        let _ = writeln!(out, "{city}");
    }
    out
}

fn arrow(direction: TrendDirection) -> char {
    match direction {
        TrendDirection::Up => '↑',
        TrendDirection::Down => '↓',
        TrendDirection::Stable => '→',
    }
}

fn compass(degrees: f64) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let idx = ((degrees.rem_euclid(360.0) / 45.0).round() as usize) % POINTS.len();
    POINTS[idx]
}
