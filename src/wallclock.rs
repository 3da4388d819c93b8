//! Local wall-clock access for the CLI layer.
//!
//! The calculator crates never read the clock; "today" and "now" are
//! resolved here and passed in as plain values.

use chrono::{Datelike, Local, Timelike};

use rotaday_calendar::{CivilDate, ClockTime};

/// Returns today's date in the local timezone.
pub fn today() -> CivilDate {
    let now = Local::now().date_naive();
    CivilDate::new(now.year(), now.month() as u8, now.day() as u8)
        .expect("the local clock names a real calendar date")
}

/// Returns the current local wall-clock time.
pub fn now() -> ClockTime {
    let now = Local::now().time();
    ClockTime::new(now.hour() as u8, now.minute() as u8, now.second() as u8)
        .expect("the local clock names a real time of day")
}
