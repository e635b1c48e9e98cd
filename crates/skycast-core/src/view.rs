// File: crates/skycast-core/src/view.rs
// Summary: Pure dashboard view model; formats a weather report into text regions.

use crate::icon::{icon_class, suggestion_class};
use crate::model::WeatherReport;

/// One card in the daily forecast strip.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyCard {
    pub day: String,
    pub icon_class: String,
    pub high: String,
    pub low: String,
}

/// One temp/precip pair under the hourly graph.
#[derive(Clone, Debug, PartialEq)]
pub struct HourlyDetail {
    pub temp: String,
    pub precip: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SuggestionRow {
    pub icon_class: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AstronomyView {
    pub sunrise: String,
    pub daylight_duration: String,
    pub sunset: String,
    pub moonrise: String,
    pub moonlight_duration: String,
    pub moonset: String,
}

/// Every text region the dashboard displays, derived from a report and a
/// clock reading. Building the view has no side effects; a surface writer
/// decides what to do with it.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardView {
    pub location_line: String,
    pub clock: String,
    pub temperature: String,
    pub description: String,
    pub icon_class: String,
    pub feels_like: String,
    pub summary: String,
    pub air_quality: String,
    pub wind: String,
    pub humidity: String,
    pub visibility: String,
    pub pressure: String,
    pub dew_point: String,
    pub astronomy: AstronomyView,
    pub daily: Vec<DailyCard>,
    pub hourly_labels: Vec<String>,
    pub hourly_details: Vec<HourlyDetail>,
    pub suggestions: Vec<SuggestionRow>,
}

impl DashboardView {
    pub fn from_report(report: &WeatherReport, clock: impl Into<String>) -> Self {
        let cur = &report.current;
        Self {
            location_line: format!("{}, {}", report.location.city, report.location.state),
            clock: clock.into(),
            temperature: format!("{}°F", cur.temperature),
            description: cur.description.clone(),
            icon_class: icon_class(&cur.icon).to_string(),
            feels_like: format!("Feels like {}°", cur.feels_like),
            summary: cur.summary.clone(),
            air_quality: cur.air_quality.to_string(),
            wind: format!("{} mph {}", cur.wind.speed, cur.wind.direction.as_str()),
            humidity: format!("{}%", cur.humidity),
            visibility: format!("{} mi", cur.visibility),
            pressure: format!("{} in", cur.pressure),
            dew_point: format!("{}°", cur.dew_point),
            astronomy: AstronomyView {
                sunrise: report.astronomy.sunrise.clone(),
                daylight_duration: report.astronomy.daylight_duration.clone(),
                sunset: report.astronomy.sunset.clone(),
                moonrise: report.astronomy.moonrise.clone(),
                moonlight_duration: report.astronomy.moonlight_duration.clone(),
                moonset: report.astronomy.moonset.clone(),
            },
            daily: report
                .daily_forecast
                .iter()
                .map(|d| DailyCard {
                    day: d.day.clone(),
                    icon_class: icon_class(&d.icon).to_string(),
                    high: format!("{}°", d.high),
                    low: format!("{}°", d.low),
                })
                .collect(),
            hourly_labels: report
                .hourly_forecast
                .iter()
                .map(|h| h.time.clone())
                .collect(),
            hourly_details: report
                .hourly_forecast
                .iter()
                .map(|h| HourlyDetail {
                    temp: format!("{}°", h.temp),
                    precip: format!("{}%", h.precip),
                })
                .collect(),
            suggestions: report
                .suggestions
                .iter()
                .map(|s| SuggestionRow {
                    icon_class: suggestion_class(&s.icon),
                    title: s.title.clone(),
                    description: s.description.clone(),
                })
                .collect(),
        }
    }
}
