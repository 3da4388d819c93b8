//! Error types for the rotaday-calendar crate.

/// Error type for all fallible operations in the rotaday-calendar crate.
///
/// This enum covers validation failures for calendar dates, wall-clock
/// times, and weekday indices, plus parse failures for their external
/// string forms.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year, which decides February's length.
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a date string does not have the `YYYY-MM-DD` shape.
    #[error("invalid date: {input:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The input that failed to parse.
        input: String,
    },

    /// Returned when a time string is malformed or out of range.
    #[error("invalid time: {input:?} (expected HH:MM or HH:MM:SS)")]
    InvalidTime {
        /// The input that failed to parse or validate.
        input: String,
    },

    /// Returned when a weekday index is outside the valid range 0..=6.
    #[error("invalid weekday index: {index} (must be 0..=6, Monday = 0)")]
    InvalidWeekday {
        /// The invalid weekday index that was provided.
        index: u8,
    },
}
