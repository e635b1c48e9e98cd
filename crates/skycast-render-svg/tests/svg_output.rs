// File: crates/skycast-render-svg/tests/svg_output.rs
// Purpose: Validate SVG document assembly and the render triggers end to end.

use skycast_core::model::{
    Astronomy, CurrentConditions, DailyEntry, Direction, HourlyEntry, Location, Suggestion,
    WeatherReport, Wind,
};
use skycast_core::surface::TextRegion;
use skycast_core::{Dashboard, Extent};
use skycast_render_svg::SvgDocument;

fn report() -> WeatherReport {
    WeatherReport {
        location: Location {
            city: "Portland".to_string(),
            state: "OR".to_string(),
            country: "USA".to_string(),
        },
        current: CurrentConditions {
            temperature: 58.0,
            description: "Cloudy".to_string(),
            icon: "cloud".to_string(),
            feels_like: 56.0,
            summary: "Overcast & cool.".to_string(),
            air_quality: 22,
            wind: Wind { speed: 5.0, direction: Direction::W },
            humidity: 71,
            visibility: 9.0,
            pressure: 30.01,
            dew_point: 50.0,
        },
        astronomy: Astronomy {
            sunrise: "6:20 AM".to_string(),
            sunset: "7:40 PM".to_string(),
            daylight_duration: "13 hr 20 min".to_string(),
            moonrise: "9:40 AM".to_string(),
            moonset: "12:30 AM".to_string(),
            moonlight_duration: "14 hr 50 min".to_string(),
        },
        daily_forecast: vec![DailyEntry {
            day: "Today".to_string(),
            icon: "cloud".to_string(),
            high: 61.0,
            low: 49.0,
        }],
        hourly_forecast: vec![
            HourlyEntry { time: "Now".to_string(), temp: 58.0, precip: 20 },
            HourlyEntry { time: "2 PM".to_string(), temp: 60.0, precip: 25 },
            HourlyEntry { time: "4 PM".to_string(), temp: 59.0, precip: 30 },
        ],
        suggestions: vec![Suggestion {
            icon: "tshirt".to_string(),
            title: "Clothing".to_string(),
            description: "Light jacket".to_string(),
        }],
    }
}

#[test]
fn document_contains_all_region_writes() {
    let dashboard = Dashboard::new(report(), Extent::default());
    let mut doc = SvgDocument::new();
    dashboard.show(&mut doc).expect("render");

    assert_eq!(doc.text(TextRegion::LocationName), Some("Portland, OR"));
    assert_eq!(doc.text(TextRegion::CurrentTemp), Some("58°F"));
    assert_eq!(doc.text(TextRegion::Humidity), Some("71%"));
    assert_eq!(doc.text(TextRegion::SunriseTime), Some("6:20 AM"));

    let svg = doc.to_svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("id=\"location-name\""));
    assert!(svg.contains("id=\"current-weather-icon\""));
    assert!(svg.contains("Portland, OR"));
}

#[test]
fn chart_renders_path_and_one_marker_per_hour() {
    let dashboard = Dashboard::new(report(), Extent::default());
    let mut doc = SvgDocument::new();
    dashboard.show(&mut doc).expect("render");

    let path = doc.chart().expect("chart set");
    assert!(path.d.starts_with('M'));
    assert_eq!(path.markers.len(), 3);

    let svg = doc.to_svg();
    assert!(svg.contains("class=\"graph-area\""));
    assert_eq!(svg.matches("class=\"graph-point\"").count(), 3);
}

#[test]
fn empty_hourly_series_draws_no_chart() {
    let mut r = report();
    r.hourly_forecast.clear();
    let dashboard = Dashboard::new(r, Extent::default());
    let mut doc = SvgDocument::new();
    dashboard.show(&mut doc).expect("render");

    assert!(doc.chart().expect("chart still set").is_empty());
    let svg = doc.to_svg();
    assert!(!svg.contains("graph-area"));
    assert!(!svg.contains("graph-point"));
}

#[test]
fn city_change_rewrites_region_without_duplicates() {
    let mut dashboard = Dashboard::new(report(), Extent::default());
    let mut doc = SvgDocument::new();
    dashboard.show(&mut doc).expect("render");
    dashboard.set_city("Eugene", &mut doc).expect("render");

    assert_eq!(doc.text(TextRegion::LocationName), Some("Eugene, OR"));
    let svg = doc.to_svg();
    assert_eq!(svg.matches("id=\"location-name\"").count(), 1);
    assert!(!svg.contains("Portland, OR"));
}

#[test]
fn resize_rebuilds_geometry_against_new_extent() {
    let mut dashboard = Dashboard::new(report(), Extent::new(300.0, 100.0));
    let mut doc = SvgDocument::new();
    dashboard.show(&mut doc).expect("render");
    let narrow_last_x = doc.chart().unwrap().markers.last().unwrap().x;

    dashboard.resize(Extent::new(600.0, 100.0), &mut doc).expect("render");
    let wide_last_x = doc.chart().unwrap().markers.last().unwrap().x;

    assert!((narrow_last_x - 300.0).abs() < 1e-9);
    assert!((wide_last_x - 600.0).abs() < 1e-9);
}

#[test]
fn text_content_is_xml_escaped() {
    let mut r = report();
    r.location.city = "A&B <Town>".to_string();
    let dashboard = Dashboard::new(r, Extent::default());
    let mut doc = SvgDocument::new();
    dashboard.show(&mut doc).expect("render");

    let svg = doc.to_svg();
    assert!(svg.contains("A&amp;B &lt;Town&gt;, OR"));
    assert!(!svg.contains("<Town>"));
}
