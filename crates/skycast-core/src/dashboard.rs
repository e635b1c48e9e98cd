// File: crates/skycast-core/src/dashboard.rs
// Summary: Render driver and dashboard controller (refresh, city change, resize).

use crate::error::RenderError;
use crate::model::WeatherReport;
use crate::path::ChartPathBuilder;
use crate::sample::Series;
use crate::surface::{DashboardSurface, TextRegion};
use crate::timefmt;
use crate::types::Extent;
use crate::view::DashboardView;

/// One complete render pass: build the view model and chart geometry from the
/// report, then push everything into the surface. Runs to completion
/// synchronously; re-running with the same inputs writes the same output.
pub fn render_dashboard(
    report: &WeatherReport,
    extent: Extent,
    clock: &str,
    surface: &mut dyn DashboardSurface,
) -> Result<(), RenderError> {
    let view = DashboardView::from_report(report, clock);

    surface.write_text(TextRegion::LocationName, &view.location_line)?;
    surface.write_text(TextRegion::CurrentTime, &view.clock)?;
    surface.write_text(TextRegion::CurrentTemp, &view.temperature)?;
    surface.write_text(TextRegion::CurrentDescription, &view.description)?;
    surface.write_current_icon(&view.icon_class)?;
    surface.write_text(TextRegion::FeelsLike, &view.feels_like)?;
    surface.write_text(TextRegion::WeatherSummary, &view.summary)?;

    surface.write_text(TextRegion::AirQuality, &view.air_quality)?;
    surface.write_text(TextRegion::Wind, &view.wind)?;
    surface.write_text(TextRegion::Humidity, &view.humidity)?;
    surface.write_text(TextRegion::Visibility, &view.visibility)?;
    surface.write_text(TextRegion::Pressure, &view.pressure)?;
    surface.write_text(TextRegion::DewPoint, &view.dew_point)?;

    surface.write_text(TextRegion::SunriseTime, &view.astronomy.sunrise)?;
    surface.write_text(TextRegion::DaylightDuration, &view.astronomy.daylight_duration)?;
    surface.write_text(TextRegion::SunsetTime, &view.astronomy.sunset)?;
    surface.write_text(TextRegion::MoonriseTime, &view.astronomy.moonrise)?;
    surface.write_text(TextRegion::MoonlightDuration, &view.astronomy.moonlight_duration)?;
    surface.write_text(TextRegion::MoonsetTime, &view.astronomy.moonset)?;

    surface.write_daily(&view.daily)?;
    surface.write_hourly_labels(&view.hourly_labels)?;
    surface.write_hourly_details(&view.hourly_details)?;
    surface.write_suggestions(&view.suggestions)?;

    let series = Series::from_hourly(&report.hourly_forecast);
    let path = ChartPathBuilder::default().build(&series, extent);
    surface.set_chart(&path, extent)?;

    Ok(())
}

/// Owns the displayed report and the current chart extent as explicit values.
/// Every trigger (initial show, refresh, city change, resize) is a full,
/// idempotent re-render against the surface it is given.
#[derive(Clone, Debug)]
pub struct Dashboard {
    report: WeatherReport,
    extent: Extent,
}

impl Dashboard {
    pub fn new(report: WeatherReport, extent: Extent) -> Self {
        Self { report, extent }
    }

    pub fn report(&self) -> &WeatherReport {
        &self.report
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Initial display.
    pub fn show(&self, surface: &mut dyn DashboardSurface) -> Result<(), RenderError> {
        render_dashboard(&self.report, self.extent, &timefmt::current_clock(), surface)
    }

    /// Explicit refresh: recompute with the current data.
    pub fn refresh(&self, surface: &mut dyn DashboardSurface) -> Result<(), RenderError> {
        self.show(surface)
    }

    /// Change the displayed city and re-render.
    pub fn set_city(
        &mut self,
        city: impl Into<String>,
        surface: &mut dyn DashboardSurface,
    ) -> Result<(), RenderError> {
        self.report.location.city = city.into();
        self.show(surface)
    }

    /// Recompute geometry against a new extent and re-render. The underlying
    /// report is untouched.
    pub fn resize(
        &mut self,
        extent: Extent,
        surface: &mut dyn DashboardSurface,
    ) -> Result<(), RenderError> {
        self.extent = extent;
        self.show(surface)
    }
}
