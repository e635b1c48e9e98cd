// File: crates/skycast-core/src/icon.rs
// Summary: Weather description/keyword to Font Awesome class mapping.

/// Resolve a weather description or icon keyword to a Font Awesome class
/// string. Matching is case-insensitive; unknown inputs fall back to a
/// question mark.
pub fn icon_class(keyword: &str) -> &'static str {
    match keyword.to_lowercase().as_str() {
        "clear" | "sun" => "fas fa-sun text-yellow-500",
        "partly cloudy" | "cloud-sun" => "fas fa-cloud-sun text-yellow-500",
        "cloudy" | "cloud" => "fas fa-cloud text-gray-500",
        "light rain" | "cloud-showers-heavy" => "fas fa-cloud-showers-heavy text-blue-500",
        "rain" | "cloud-sun-rain" => "fas fa-cloud-sun-rain text-blue-500",
        "thunderstorm" | "cloud-bolt" => "fas fa-cloud-bolt text-gray-500",
        "snow" => "fas fa-snowflake text-blue-300",
        _ => "fas fa-question text-gray-500",
    }
}

/// Class for a suggestion row icon (plain keyword, fixed accent color).
pub fn suggestion_class(keyword: &str) -> String {
    format!("fas fa-{keyword} text-blue-500 text-2xl")
}
