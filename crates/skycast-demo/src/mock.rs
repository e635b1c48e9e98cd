// File: crates/skycast-demo/src/mock.rs
// Summary: Built-in sample weather report, stand-in for a live data feed.

use skycast_core::model::{
    Astronomy, CurrentConditions, DailyEntry, Direction, HourlyEntry, Location, Suggestion,
    WeatherReport, Wind,
};

/// A full report for Washington, DC. In a real application this would come
/// from a weather API; the demo just re-renders this value.
pub fn washington_dc() -> WeatherReport {
    WeatherReport {
        location: Location {
            city: "Washington".to_string(),
            state: "DC".to_string(),
            country: "USA".to_string(),
        },
        current: CurrentConditions {
            temperature: 62.0,
            description: "Partly Cloudy".to_string(),
            icon: "cloud-sun".to_string(),
            feels_like: 60.0,
            summary: "Expect partly cloudy skies with a chance of light showers later. \
                      High will be 75°F."
                .to_string(),
            air_quality: 45,
            wind: Wind { speed: 7.0, direction: Direction::NNE },
            humidity: 68,
            visibility: 10.0,
            pressure: 29.98,
            dew_point: 55.0,
        },
        astronomy: Astronomy {
            sunrise: "6:15 AM".to_string(),
            sunset: "7:45 PM".to_string(),
            daylight_duration: "13 hr 30 min".to_string(),
            moonrise: "10:00 AM".to_string(),
            moonset: "1:00 AM".to_string(),
            moonlight_duration: "15 hr 00 min".to_string(),
        },
        daily_forecast: vec![
            daily("Today", "cloud-sun", 75.0, 58.0),
            daily("Sat 27", "cloud", 72.0, 56.0),
            daily("Sun 28", "cloud-showers-heavy", 68.0, 54.0),
            daily("Mon 29", "sun", 78.0, 60.0),
            daily("Tue 30", "cloud-sun-rain", 70.0, 55.0),
            daily("Wed 31", "cloud-bolt", 65.0, 52.0),
            daily("Thu 1", "sun", 77.0, 59.0),
        ],
        hourly_forecast: vec![
            hourly("Now", 62.0, 10),
            hourly("3 AM", 60.0, 5),
            hourly("5 AM", 59.0, 5),
            hourly("7 AM", 65.0, 10),
            hourly("9 AM", 70.0, 15),
            hourly("11 AM", 73.0, 20),
            hourly("1 PM", 75.0, 25),
            hourly("3 PM", 72.0, 30),
            hourly("5 PM", 68.0, 35),
            hourly("7 PM", 64.0, 40),
            hourly("9 PM", 61.0, 45),
            hourly("11 PM", 58.0, 50),
        ],
        suggestions: vec![
            suggestion("umbrella", "Umbrella", "Might need later"),
            suggestion("tshirt", "Clothing", "Light jacket recommended"),
            suggestion("sun", "Sunscreen", "High UV index"),
            suggestion("wind", "Wind chill", "Mild"),
        ],
    }
}

fn daily(day: &str, icon: &str, high: f64, low: f64) -> DailyEntry {
    DailyEntry { day: day.to_string(), icon: icon.to_string(), high, low }
}

fn hourly(time: &str, temp: f64, precip: u32) -> HourlyEntry {
    HourlyEntry { time: time.to_string(), temp, precip }
}

fn suggestion(icon: &str, title: &str, description: &str) -> Suggestion {
    Suggestion {
        icon: icon.to_string(),
        title: title.to_string(),
        description: description.to_string(),
    }
}
