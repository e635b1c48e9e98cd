// File: crates/skycast-core/src/model.rs
// Summary: Weather report data model (location, current conditions, astronomy, forecasts).

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Wind {
    pub speed: f64,
    pub direction: Direction,
}

/// Compass direction for wind readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    N,
    NNE,
    NE,
    ENE,
    E,
    ESE,
    SE,
    SSE,
    S,
    SSW,
    SW,
    WSW,
    W,
    WNW,
    NW,
    NNW,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::N => "N",
            Direction::NNE => "NNE",
            Direction::NE => "NE",
            Direction::ENE => "ENE",
            Direction::E => "E",
            Direction::ESE => "ESE",
            Direction::SE => "SE",
            Direction::SSE => "SSE",
            Direction::S => "S",
            Direction::SSW => "SSW",
            Direction::SW => "SW",
            Direction::WSW => "WSW",
            Direction::W => "W",
            Direction::WNW => "WNW",
            Direction::NW => "NW",
            Direction::NNW => "NNW",
        }
    }
}

/// Current conditions block. Units follow the report source: temperatures in
/// degrees Fahrenheit, wind in mph, visibility in miles, pressure in inHg.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub description: String,
    /// Icon keyword (e.g., "cloud-sun"); resolved through `icon::icon_class`.
    pub icon: String,
    pub feels_like: f64,
    pub summary: String,
    pub air_quality: u32,
    pub wind: Wind,
    pub humidity: u32,
    pub visibility: f64,
    pub pressure: f64,
    pub dew_point: f64,
}

/// Sun and moon times, pre-formatted by the report source.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Astronomy {
    pub sunrise: String,
    pub sunset: String,
    pub daylight_duration: String,
    pub moonrise: String,
    pub moonset: String,
    pub moonlight_duration: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DailyEntry {
    pub day: String,
    pub icon: String,
    pub high: f64,
    pub low: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HourlyEntry {
    pub time: String,
    pub temp: f64,
    /// Precipitation probability in percent.
    pub precip: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Suggestion {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// Everything one render pass consumes. Passed explicitly into each render
/// call; there is no ambient "current report" state anywhere in the library.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: Location,
    pub current: CurrentConditions,
    pub astronomy: Astronomy,
    pub daily_forecast: Vec<DailyEntry>,
    pub hourly_forecast: Vec<HourlyEntry>,
    pub suggestions: Vec<Suggestion>,
}
