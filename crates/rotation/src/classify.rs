//! Day classification: the calculator's output type.

use crate::patterns::Pattern;

/// Classification of one calendar date against a rotation.
///
/// The cycle day and pattern are present exactly when the date is a
/// school day; half days are school days with a shortened timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayClass {
    /// Not a school weekday.
    Weekend,
    /// A single-day holiday or a day inside a holiday range.
    Holiday {
        /// The holiday's label.
        label: String,
    },
    /// A school day with a shortened schedule.
    HalfDay {
        /// Position within the rotation (1..=rotation_length).
        cycle_day: u8,
        /// The block pattern for this cycle day.
        pattern: Pattern,
    },
    /// A normal school day.
    School {
        /// Position within the rotation (1..=rotation_length).
        cycle_day: u8,
        /// The block pattern for this cycle day.
        pattern: Pattern,
    },
}

impl DayClass {
    /// Returns the cycle day, present iff the date is a school day.
    pub fn cycle_day(&self) -> Option<u8> {
        match self {
            Self::HalfDay { cycle_day, .. } | Self::School { cycle_day, .. } => Some(*cycle_day),
            Self::Weekend | Self::Holiday { .. } => None,
        }
    }

    /// Returns the schedule pattern, present iff the date is a school day.
    pub fn pattern(&self) -> Option<&Pattern> {
        match self {
            Self::HalfDay { pattern, .. } | Self::School { pattern, .. } => Some(pattern),
            Self::Weekend | Self::Holiday { .. } => None,
        }
    }

    /// Whether this classification is a school day (half days included).
    pub fn is_school_day(&self) -> bool {
        matches!(self, Self::HalfDay { .. } | Self::School { .. })
    }
}
