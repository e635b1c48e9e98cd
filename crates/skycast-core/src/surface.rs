// File: crates/skycast-core/src/surface.rs
// Summary: Presentation surface trait; named text regions plus a vector chart area.

use crate::error::RenderError;
use crate::path::PathDescriptor;
use crate::types::Extent;
use crate::view::{DailyCard, HourlyDetail, SuggestionRow};

/// Named single-value text regions of the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRegion {
    LocationName,
    CurrentTime,
    CurrentTemp,
    CurrentDescription,
    FeelsLike,
    WeatherSummary,
    AirQuality,
    Wind,
    Humidity,
    Visibility,
    Pressure,
    DewPoint,
    SunriseTime,
    DaylightDuration,
    SunsetTime,
    MoonriseTime,
    MoonlightDuration,
    MoonsetTime,
}

impl TextRegion {
    /// Stable region identifier, used by surfaces that address regions by name.
    pub fn id(&self) -> &'static str {
        match self {
            TextRegion::LocationName => "location-name",
            TextRegion::CurrentTime => "current-time",
            TextRegion::CurrentTemp => "current-temp",
            TextRegion::CurrentDescription => "current-description",
            TextRegion::FeelsLike => "feels-like",
            TextRegion::WeatherSummary => "weather-summary",
            TextRegion::AirQuality => "air-quality",
            TextRegion::Wind => "wind",
            TextRegion::Humidity => "humidity",
            TextRegion::Visibility => "visibility",
            TextRegion::Pressure => "pressure",
            TextRegion::DewPoint => "dew-point",
            TextRegion::SunriseTime => "sunrise-time",
            TextRegion::DaylightDuration => "daylight-duration",
            TextRegion::SunsetTime => "sunset-time",
            TextRegion::MoonriseTime => "moonrise-time",
            TextRegion::MoonlightDuration => "moonlight-duration",
            TextRegion::MoonsetTime => "moonset-time",
        }
    }
}

/// Output side of a render pass. Implementations own all side effects; the
/// core only hands them pre-formatted text and pre-computed geometry, so the
/// computation stays unit-testable without any rendering environment.
pub trait DashboardSurface {
    fn write_text(&mut self, region: TextRegion, text: &str) -> Result<(), RenderError>;

    /// Set the current-conditions icon (a class string, not an image).
    fn write_current_icon(&mut self, class: &str) -> Result<(), RenderError>;

    /// Replace the daily forecast strip. Called with the full card list on
    /// every render; the previous content is discarded.
    fn write_daily(&mut self, cards: &[DailyCard]) -> Result<(), RenderError>;

    fn write_hourly_labels(&mut self, labels: &[String]) -> Result<(), RenderError>;

    fn write_hourly_details(&mut self, details: &[HourlyDetail]) -> Result<(), RenderError>;

    fn write_suggestions(&mut self, rows: &[SuggestionRow]) -> Result<(), RenderError>;

    /// Hand over the hourly curve. An empty descriptor means "draw nothing";
    /// surfaces must not attempt to render it.
    fn set_chart(&mut self, path: &PathDescriptor, extent: Extent) -> Result<(), RenderError>;
}
