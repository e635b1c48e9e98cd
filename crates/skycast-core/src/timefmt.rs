// File: crates/skycast-core/src/timefmt.rs
// Summary: 12-hour clock formatting for the dashboard header.

use chrono::{Local, Timelike};

/// Format a wall-clock reading as "h:MM AM/PM". Hour 0 renders as 12.
pub fn clock_12h(hours: u32, minutes: u32) -> String {
    let ampm = if hours >= 12 { "PM" } else { "AM" };
    let h = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{h}:{minutes:02} {ampm}")
}

/// Current local time in dashboard clock format.
pub fn current_clock() -> String {
    let now = Local::now();
    clock_12h(now.hour(), now.minute())
}
